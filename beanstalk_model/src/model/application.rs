// Copyright (c) 2025 Elektrobit Automotive GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.
//
// SPDX-License-Identifier: Apache-2.0

use super::Tag;
use crate::Timestamp;
use model_macros::model_object;

/// Describes the properties of an application.
#[model_object]
pub struct ApplicationDescription {
    application_arn: Option<String>,
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(max = 200))]
    description: Option<String>,
    date_created: Option<Timestamp>,
    date_updated: Option<Timestamp>,
    /// The names of the versions for this application.
    versions: Option<Vec<String>>,
    /// The names of the configuration templates associated with this
    /// application.
    configuration_templates: Option<Vec<String>>,
    resource_lifecycle_config: Option<ApplicationResourceLifecycleConfig>,
}

/// The resource lifecycle configuration for an application.
#[model_object]
pub struct ApplicationResourceLifecycleConfig {
    /// The ARN of an IAM service role that Elastic Beanstalk has permission
    /// to assume.
    service_role: Option<String>,
    /// Defines lifecycle settings for application versions.
    version_lifecycle_config: Option<ApplicationVersionLifecycleConfig>,
}

/// The application version lifecycle settings for an application.
#[model_object]
pub struct ApplicationVersionLifecycleConfig {
    /// Specify a max count rule to restrict the number of application
    /// versions that are retained for an application.
    max_count_rule: Option<MaxCountRule>,
    /// Specify a max age rule to restrict the length of time that
    /// application versions are retained for an application.
    max_age_rule: Option<MaxAgeRule>,
}

#[model_object]
pub struct MaxCountRule {
    #[model(mandatory)]
    enabled: Option<bool>,
    /// Specify the maximum number of application versions to retain.
    max_count: Option<i32>,
    /// Set to `true` to delete a version's source bundle from Amazon S3 when
    /// Elastic Beanstalk deletes the application version.
    delete_source_from_s3: Option<bool>,
}

#[model_object]
pub struct MaxAgeRule {
    #[model(mandatory)]
    enabled: Option<bool>,
    /// Specify the number of days to retain an application version.
    max_age_in_days: Option<i32>,
    delete_source_from_s3: Option<bool>,
}

/// Request to create an application.
#[model_object]
pub struct CreateApplicationRequest {
    /// The name of the application. Must be unique within your account.
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    /// Your description of the application.
    #[model(length(max = 200))]
    description: Option<String>,
    /// Specifies an application resource lifecycle configuration to prevent
    /// your application from accumulating too many versions.
    resource_lifecycle_config: Option<ApplicationResourceLifecycleConfig>,
    /// Specifies the tags applied to the application.
    tags: Option<Vec<Tag>>,
}

#[model_object]
pub struct CreateApplicationResult {
    application: Option<ApplicationDescription>,
}

#[model_object]
pub struct DeleteApplicationRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    /// When set to `true`, running environments will be terminated before
    /// deleting the application.
    terminate_env_by_force: Option<bool>,
}

#[model_object]
pub struct DescribeApplicationsRequest {
    /// If specified, restricts the result to applications with these names.
    application_names: Option<Vec<String>>,
}

#[model_object]
pub struct DescribeApplicationsResult {
    applications: Option<Vec<ApplicationDescription>>,
}

#[model_object]
pub struct UpdateApplicationRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    /// If this parameter is not specified, the service does not update the
    /// description.
    #[model(length(max = 200))]
    description: Option<String>,
}

#[model_object]
pub struct UpdateApplicationResult {
    application: Option<ApplicationDescription>,
}

#[model_object]
pub struct UpdateApplicationResourceLifecycleRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(mandatory)]
    resource_lifecycle_config: Option<ApplicationResourceLifecycleConfig>,
}

#[model_object]
pub struct UpdateApplicationResourceLifecycleResult {
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    resource_lifecycle_config: Option<ApplicationResourceLifecycleConfig>,
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

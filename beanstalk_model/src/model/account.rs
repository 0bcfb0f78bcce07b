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

use model_macros::model_object;

/// The AWS Elastic Beanstalk quota information for a single resource type.
#[model_object]
pub struct ResourceQuota {
    /// The maximum number of instances of this resource type that an AWS
    /// account can use.
    maximum: Option<i32>,
}

/// A set of per-resource quotas for an AWS account.
#[model_object]
pub struct ResourceQuotas {
    application_quota: Option<ResourceQuota>,
    application_version_quota: Option<ResourceQuota>,
    environment_quota: Option<ResourceQuota>,
    configuration_template_quota: Option<ResourceQuota>,
    custom_platform_quota: Option<ResourceQuota>,
}

#[model_object]
pub struct DescribeAccountAttributesRequest {}

#[model_object]
pub struct DescribeAccountAttributesResult {
    /// The Elastic Beanstalk resource quotas associated with the calling
    /// AWS account.
    resource_quotas: Option<ResourceQuotas>,
}

/// Creates a bucket in Amazon S3 to store application versions, logs, and
/// other files used by Elastic Beanstalk environments.
#[model_object]
pub struct CreateStorageLocationRequest {}

#[model_object]
pub struct CreateStorageLocationResult {
    /// The name of the Amazon S3 bucket created.
    #[model(length(max = 255))]
    s3_bucket: Option<String>,
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

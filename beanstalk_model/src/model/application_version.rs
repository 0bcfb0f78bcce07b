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

use super::{ApplicationVersionStatus, ComputeType, SourceRepository, SourceType, Tag};
use crate::Timestamp;
use model_macros::model_object;

/// Describes the properties of an application version.
#[model_object]
pub struct ApplicationVersionDescription {
    application_version_arn: Option<String>,
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(max = 200))]
    description: Option<String>,
    #[model(length(min = 1, max = 100))]
    version_label: Option<String>,
    /// If the version's source code was retrieved from AWS CodeCommit, the
    /// location of the source code for the application version.
    source_build_information: Option<SourceBuildInformation>,
    /// Reference to the artifact from the AWS CodeBuild build.
    build_arn: Option<String>,
    /// The storage location of the application version's source bundle in
    /// Amazon S3.
    source_bundle: Option<S3Location>,
    date_created: Option<Timestamp>,
    date_updated: Option<Timestamp>,
    /// The processing status of the application version.
    status: Option<ApplicationVersionStatus>,
}

/// The bucket and key of an item stored in Amazon S3.
#[model_object]
pub struct S3Location {
    #[model(length(max = 255))]
    s3_bucket: Option<String>,
    #[model(length(max = 1024))]
    s3_key: Option<String>,
}

/// Location of the source code for an application version.
#[model_object]
pub struct SourceBuildInformation {
    /// The type of repository, `Git` or `Zip`.
    #[model(mandatory)]
    source_type: Option<SourceType>,
    /// Location where the repository is stored, `CodeCommit` or `S3`.
    #[model(mandatory)]
    source_repository: Option<SourceRepository>,
    /// The location of the source code, as a formatted string, depending on
    /// the value of `SourceRepository`.
    #[model(mandatory, length(min = 3, max = 255))]
    source_location: Option<String>,
}

/// Settings for an AWS CodeBuild build.
#[model_object]
pub struct BuildConfiguration {
    artifact_name: Option<String>,
    /// The Amazon Resource Name (ARN) of the IAM role that enables AWS
    /// CodeBuild to interact with dependent AWS services.
    #[model(mandatory)]
    code_build_service_role: Option<String>,
    compute_type: Option<ComputeType>,
    /// The ID of the Docker image to use for this build project.
    #[model(mandatory)]
    image: Option<String>,
    /// How long in minutes, from 5 to 480, to wait until timing out any
    /// related build that does not get marked as completed.
    #[model(range(min = 5, max = 480))]
    timeout_in_minutes: Option<i32>,
}

/// Creates an application version for the specified application.
#[model_object]
pub struct CreateApplicationVersionRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    /// A label identifying this version.
    #[model(mandatory, length(min = 1, max = 100))]
    version_label: Option<String>,
    #[model(length(max = 200))]
    description: Option<String>,
    /// Specify a commit in an AWS CodeCommit Git repository to use as the
    /// source code for the application version.
    source_build_information: Option<SourceBuildInformation>,
    /// The Amazon S3 bucket and key that identify the location of the source
    /// bundle for this version.
    source_bundle: Option<S3Location>,
    /// Settings for an AWS CodeBuild build.
    build_configuration: Option<BuildConfiguration>,
    /// Set to `true` to create an application with the specified name if it
    /// doesn't already exist.
    auto_create_application: Option<bool>,
    /// Pre-processes and validates the environment manifest and configuration
    /// files in the source bundle.
    process: Option<bool>,
    tags: Option<Vec<Tag>>,
}

#[model_object]
pub struct CreateApplicationVersionResult {
    application_version: Option<ApplicationVersionDescription>,
}

#[model_object]
pub struct DeleteApplicationVersionRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(mandatory, length(min = 1, max = 100))]
    version_label: Option<String>,
    /// Set to `true` to delete the source bundle from your storage bucket.
    delete_source_bundle: Option<bool>,
}

#[model_object]
pub struct DescribeApplicationVersionsRequest {
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    version_labels: Option<Vec<String>>,
    /// For a paginated request. Specify a maximum number of application
    /// versions to include in each response.
    #[model(range(min = 1, max = 1000))]
    max_records: Option<i32>,
    next_token: Option<String>,
}

#[model_object]
pub struct DescribeApplicationVersionsResult {
    application_versions: Option<Vec<ApplicationVersionDescription>>,
    next_token: Option<String>,
}

#[model_object]
pub struct UpdateApplicationVersionRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(mandatory, length(min = 1, max = 100))]
    version_label: Option<String>,
    #[model(length(max = 200))]
    description: Option<String>,
}

#[model_object]
pub struct UpdateApplicationVersionResult {
    application_version: Option<ApplicationVersionDescription>,
}

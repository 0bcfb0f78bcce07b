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

use super::{ConfigurationOptionSetting, PlatformStatus, S3Location, Tag};
use crate::Timestamp;
use model_macros::model_object;

/// Detailed information about a platform version.
#[model_object]
pub struct PlatformDescription {
    platform_arn: Option<String>,
    /// The AWS account ID of the person who created the platform version.
    platform_owner: Option<String>,
    platform_name: Option<String>,
    platform_version: Option<String>,
    solution_stack_name: Option<String>,
    platform_status: Option<PlatformStatus>,
    date_created: Option<Timestamp>,
    date_updated: Option<Timestamp>,
    platform_category: Option<String>,
    description: Option<String>,
    maintainer: Option<String>,
    operating_system_name: Option<String>,
    operating_system_version: Option<String>,
    programming_languages: Option<Vec<PlatformProgrammingLanguage>>,
    frameworks: Option<Vec<PlatformFramework>>,
    /// The custom AMIs supported by the platform version.
    custom_ami_list: Option<Vec<CustomAmi>>,
    /// The tiers supported by the platform version.
    supported_tier_list: Option<Vec<String>>,
    /// The additions supported by the platform version.
    supported_addon_list: Option<Vec<String>>,
    /// The state of the platform version in its lifecycle, `Recommended`
    /// or empty.
    platform_lifecycle_state: Option<String>,
    platform_branch_name: Option<String>,
    platform_branch_lifecycle_state: Option<String>,
}

/// Summary information about a platform version.
#[model_object]
pub struct PlatformSummary {
    platform_arn: Option<String>,
    platform_owner: Option<String>,
    platform_status: Option<PlatformStatus>,
    platform_category: Option<String>,
    operating_system_name: Option<String>,
    operating_system_version: Option<String>,
    supported_tier_list: Option<Vec<String>>,
    supported_addon_list: Option<Vec<String>>,
    platform_lifecycle_state: Option<String>,
    platform_version: Option<String>,
    platform_branch_name: Option<String>,
    platform_branch_lifecycle_state: Option<String>,
}

/// Summary information about a platform branch.
#[model_object]
pub struct PlatformBranchSummary {
    platform_name: Option<String>,
    branch_name: Option<String>,
    /// The support life cycle state of the platform branch, `beta`,
    /// `supported`, `deprecated` or `retired`.
    lifecycle_state: Option<String>,
    /// An ordinal number that designates the order in which platform
    /// branches have been added to a platform.
    branch_order: Option<i32>,
    supported_tier_list: Option<Vec<String>>,
}

#[model_object]
pub struct PlatformFramework {
    name: Option<String>,
    version: Option<String>,
}

#[model_object]
pub struct PlatformProgrammingLanguage {
    name: Option<String>,
    version: Option<String>,
}

/// A custom AMI available to platforms.
#[model_object]
pub struct CustomAmi {
    virtualization_type: Option<String>,
    image_id: Option<String>,
}

/// Describes criteria to restrict the results when listing platform versions.
#[model_object]
pub struct PlatformFilter {
    /// The platform version attribute to which the filter values are
    /// applied, e.g. `PlatformName` or `PlatformStatus`.
    r#type: Option<String>,
    /// The operator to apply to the `Type` with each of the `Values`.
    operator: Option<String>,
    values: Option<Vec<String>>,
}

/// Describes criteria to restrict a list of results.
#[model_object]
pub struct SearchFilter {
    attribute: Option<String>,
    operator: Option<String>,
    values: Option<Vec<String>>,
}

/// The builder used to build the custom platform.
#[model_object(name = "Builder")]
pub struct PlatformBuilder {
    #[model(name = "ARN")]
    arn: Option<String>,
}

/// Request to create a new version of your custom platform.
#[model_object]
pub struct CreatePlatformVersionRequest {
    #[model(mandatory)]
    platform_name: Option<String>,
    /// The number, such as 1.0.2, for the new platform version.
    #[model(mandatory)]
    platform_version: Option<String>,
    /// The location of the platform definition archive in Amazon S3.
    #[model(mandatory)]
    platform_definition_bundle: Option<S3Location>,
    /// The name of the builder environment.
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    option_settings: Option<Vec<ConfigurationOptionSetting>>,
    tags: Option<Vec<Tag>>,
}

#[model_object]
pub struct CreatePlatformVersionResult {
    platform_summary: Option<PlatformSummary>,
    #[model(name = "Builder")]
    platform_builder: Option<PlatformBuilder>,
}

#[model_object]
pub struct DeletePlatformVersionRequest {
    platform_arn: Option<String>,
}

#[model_object]
pub struct DeletePlatformVersionResult {
    platform_summary: Option<PlatformSummary>,
}

#[model_object]
pub struct DescribePlatformVersionRequest {
    platform_arn: Option<String>,
}

#[model_object]
pub struct DescribePlatformVersionResult {
    platform_description: Option<PlatformDescription>,
}

/// Request to list the platform branches available for your account in an
/// AWS Region.
#[model_object]
pub struct ListPlatformBranchesRequest {
    /// Criteria for restricting the resulting list of platform branches.
    filters: Option<Vec<SearchFilter>>,
    #[model(range(min = 1))]
    max_records: Option<i32>,
    next_token: Option<String>,
}

#[model_object]
pub struct ListPlatformBranchesResult {
    platform_branch_summary_list: Option<Vec<PlatformBranchSummary>>,
    next_token: Option<String>,
}

#[model_object]
pub struct ListPlatformVersionsRequest {
    filters: Option<Vec<PlatformFilter>>,
    #[model(range(min = 1))]
    max_records: Option<i32>,
    next_token: Option<String>,
}

#[model_object]
pub struct ListPlatformVersionsResult {
    platform_summary_list: Option<Vec<PlatformSummary>>,
    next_token: Option<String>,
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

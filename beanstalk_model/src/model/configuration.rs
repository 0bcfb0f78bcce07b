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

use super::{
    ConfigurationDeploymentStatus, ConfigurationOptionValueType, Tag, ValidationSeverity,
};
use crate::Timestamp;
use model_macros::model_object;

// Creating or updating a configuration template answers with the full
// settings description.
macro_rules! configuration_settings_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[model_object]
        pub struct $name {
            solution_stack_name: Option<String>,
            platform_arn: Option<String>,
            #[model(length(min = 1, max = 100))]
            application_name: Option<String>,
            /// If not null, the name of the configuration template for this
            /// configuration set.
            #[model(length(min = 1, max = 100))]
            template_name: Option<String>,
            #[model(length(max = 200))]
            description: Option<String>,
            /// If not null, the name of the environment for this configuration
            /// set.
            #[model(length(min = 4, max = 40))]
            environment_name: Option<String>,
            /// If this configuration set is associated with an environment,
            /// the deployment status parameter indicates the deployment
            /// status of this configuration set.
            deployment_status: Option<ConfigurationDeploymentStatus>,
            date_created: Option<Timestamp>,
            date_updated: Option<Timestamp>,
            option_settings: Option<Vec<ConfigurationOptionSetting>>,
        }
    };
}

configuration_settings_object!(
    /// Describes the settings for a configuration set.
    ConfigurationSettingsDescription
);
configuration_settings_object!(CreateConfigurationTemplateResult);
configuration_settings_object!(UpdateConfigurationTemplateResult);

/// A specification identifying an individual configuration option along with
/// its current value.
#[model_object]
pub struct ConfigurationOptionSetting {
    /// A unique resource name for the option setting. Use it for a
    /// time-based scaling configuration option.
    #[model(length(min = 1, max = 256))]
    resource_name: Option<String>,
    namespace: Option<String>,
    option_name: Option<String>,
    value: Option<String>,
}

/// A specification identifying an individual configuration option.
#[model_object]
pub struct OptionSpecification {
    #[model(length(min = 1, max = 256))]
    resource_name: Option<String>,
    namespace: Option<String>,
    option_name: Option<String>,
}

/// A regular expression representing a restriction on a string configuration
/// option value.
#[model_object]
pub struct OptionRestrictionRegex {
    pattern: Option<String>,
    label: Option<String>,
}

/// Describes the possible values for a configuration option.
#[model_object]
pub struct ConfigurationOptionDescription {
    namespace: Option<String>,
    name: Option<String>,
    default_value: Option<String>,
    /// An indication of which action is required if the value for this
    /// configuration option changes.
    change_severity: Option<String>,
    /// An indication of whether the user defined this configuration option.
    user_defined: Option<bool>,
    value_type: Option<ConfigurationOptionValueType>,
    /// If specified, values for the configuration option are selected from
    /// this list.
    value_options: Option<Vec<String>>,
    min_value: Option<i32>,
    max_value: Option<i32>,
    max_length: Option<i32>,
    regex: Option<OptionRestrictionRegex>,
}

/// A specification for an environment configuration.
#[model_object]
pub struct SourceConfiguration {
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(min = 1, max = 100))]
    template_name: Option<String>,
}

/// An error or warning for a desired configuration option value.
#[model_object]
pub struct ValidationMessage {
    message: Option<String>,
    severity: Option<ValidationSeverity>,
    namespace: Option<String>,
    option_name: Option<String>,
}

/// Request to create a configuration template.
#[model_object]
pub struct CreateConfigurationTemplateRequest {
    /// The name of the Elastic Beanstalk application to associate with this
    /// configuration template.
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    /// The name of the configuration template.
    #[model(mandatory, length(min = 1, max = 100))]
    template_name: Option<String>,
    solution_stack_name: Option<String>,
    platform_arn: Option<String>,
    /// An Elastic Beanstalk configuration template to base this one on.
    source_configuration: Option<SourceConfiguration>,
    /// The ID of an environment whose settings you want to use to create the
    /// configuration template.
    environment_id: Option<String>,
    #[model(length(max = 200))]
    description: Option<String>,
    option_settings: Option<Vec<ConfigurationOptionSetting>>,
    tags: Option<Vec<Tag>>,
}

#[model_object]
pub struct DeleteConfigurationTemplateRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(mandatory, length(min = 1, max = 100))]
    template_name: Option<String>,
}

#[model_object]
pub struct DeleteEnvironmentConfigurationRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(mandatory, length(min = 4, max = 40))]
    environment_name: Option<String>,
}

/// Request to describe the configuration options of an environment,
/// template or platform.
#[model_object]
pub struct DescribeConfigurationOptionsRequest {
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(min = 1, max = 100))]
    template_name: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    solution_stack_name: Option<String>,
    platform_arn: Option<String>,
    /// If specified, restricts the descriptions to only the specified
    /// options.
    options: Option<Vec<OptionSpecification>>,
}

#[model_object]
pub struct DescribeConfigurationOptionsResult {
    solution_stack_name: Option<String>,
    platform_arn: Option<String>,
    options: Option<Vec<ConfigurationOptionDescription>>,
}

#[model_object]
pub struct DescribeConfigurationSettingsRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(min = 1, max = 100))]
    template_name: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
}

#[model_object]
pub struct DescribeConfigurationSettingsResult {
    configuration_settings: Option<Vec<ConfigurationSettingsDescription>>,
}

/// Updates the specified configuration template to have the specified
/// properties or configuration option values.
#[model_object]
pub struct UpdateConfigurationTemplateRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(mandatory, length(min = 1, max = 100))]
    template_name: Option<String>,
    #[model(length(max = 200))]
    description: Option<String>,
    option_settings: Option<Vec<ConfigurationOptionSetting>>,
    /// A list of configuration options to remove from the configuration set.
    options_to_remove: Option<Vec<OptionSpecification>>,
}

/// Checks a set of configuration settings against the application.
#[model_object]
pub struct ValidateConfigurationSettingsRequest {
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(min = 1, max = 100))]
    template_name: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    /// A list of the options and desired values to evaluate.
    #[model(mandatory)]
    option_settings: Option<Vec<ConfigurationOptionSetting>>,
}

#[model_object]
pub struct ValidateConfigurationSettingsResult {
    messages: Option<Vec<ValidationMessage>>,
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

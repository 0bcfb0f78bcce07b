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
    ConfigurationOptionSetting, EnvironmentHealth, EnvironmentHealthStatus, EnvironmentInfoType,
    EnvironmentStatus, OptionSpecification, Tag,
};
use crate::Timestamp;
use model_macros::model_object;

// The create, terminate and update operations all answer with the full
// environment description.
macro_rules! environment_description_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[model_object]
        pub struct $name {
            /// The name of this environment.
            #[model(length(min = 4, max = 40))]
            environment_name: Option<String>,
            /// The ID of this environment.
            environment_id: Option<String>,
            /// The name of the application associated with this environment.
            #[model(length(min = 1, max = 100))]
            application_name: Option<String>,
            /// The application version deployed in this environment.
            #[model(length(min = 1, max = 100))]
            version_label: Option<String>,
            solution_stack_name: Option<String>,
            platform_arn: Option<String>,
            /// The name of the configuration template used to originally
            /// launch this environment.
            #[model(length(min = 1, max = 100))]
            template_name: Option<String>,
            #[model(length(max = 200))]
            description: Option<String>,
            /// For load-balanced, autoscaling environments, the URL to the
            /// load balancer. For single-instance environments, the IP
            /// address of the instance.
            #[model(name = "EndpointURL")]
            endpoint_url: Option<String>,
            /// The URL to the CNAME for this environment.
            #[model(name = "CNAME", length(min = 1, max = 255))]
            cname: Option<String>,
            date_created: Option<Timestamp>,
            date_updated: Option<Timestamp>,
            status: Option<EnvironmentStatus>,
            /// Indicates if there is an in-progress environment configuration
            /// update or application version deployment that you can cancel.
            abortable_operation_in_progress: Option<bool>,
            /// Describes the health status of the environment.
            health: Option<EnvironmentHealth>,
            /// Returns the health status of the application running in your
            /// environment.
            health_status: Option<EnvironmentHealthStatus>,
            resources: Option<EnvironmentResourcesDescription>,
            tier: Option<EnvironmentTier>,
            environment_links: Option<Vec<EnvironmentLink>>,
            environment_arn: Option<String>,
            #[model(length(min = 1, max = 256))]
            operations_role: Option<String>,
        }
    };
}

environment_description_object!(
    /// Describes the properties of an environment.
    EnvironmentDescription
);
environment_description_object!(CreateEnvironmentResult);
environment_description_object!(TerminateEnvironmentResult);
environment_description_object!(UpdateEnvironmentResult);

/// Describes the properties of an environment tier.
#[model_object]
pub struct EnvironmentTier {
    /// The name of this environment tier, `WebServer` or `Worker`.
    name: Option<String>,
    /// The type of this environment tier, `Standard` or `SQS/HTTP`.
    r#type: Option<String>,
    version: Option<String>,
}

/// A link to another environment, defined in the environment's manifest.
#[model_object]
pub struct EnvironmentLink {
    link_name: Option<String>,
    environment_name: Option<String>,
}

#[model_object]
pub struct EnvironmentResourcesDescription {
    load_balancer: Option<LoadBalancerDescription>,
}

#[model_object]
pub struct LoadBalancerDescription {
    load_balancer_name: Option<String>,
    domain: Option<String>,
    listeners: Option<Vec<Listener>>,
}

#[model_object]
pub struct Listener {
    protocol: Option<String>,
    port: Option<i32>,
}

/// Describes the AWS resources in use by an environment.
#[model_object]
pub struct EnvironmentResourceDescription {
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    auto_scaling_groups: Option<Vec<AutoScalingGroup>>,
    instances: Option<Vec<Instance>>,
    launch_configurations: Option<Vec<LaunchConfiguration>>,
    launch_templates: Option<Vec<LaunchTemplate>>,
    load_balancers: Option<Vec<LoadBalancer>>,
    triggers: Option<Vec<Trigger>>,
    queues: Option<Vec<Queue>>,
}

#[model_object]
pub struct AutoScalingGroup {
    name: Option<String>,
}

/// The description of an Amazon EC2 instance.
#[model_object]
pub struct Instance {
    /// The ID of the Amazon EC2 instance.
    id: Option<String>,
}

#[model_object]
pub struct LaunchConfiguration {
    name: Option<String>,
}

#[model_object]
pub struct LaunchTemplate {
    id: Option<String>,
}

#[model_object]
pub struct LoadBalancer {
    name: Option<String>,
}

#[model_object]
pub struct Trigger {
    name: Option<String>,
}

/// Describes a queue.
#[model_object]
pub struct Queue {
    name: Option<String>,
    #[model(name = "URL")]
    url: Option<String>,
}

/// The information retrieved from the Amazon EC2 instances.
#[model_object]
pub struct EnvironmentInfoDescription {
    info_type: Option<EnvironmentInfoType>,
    ec2_instance_id: Option<String>,
    sample_timestamp: Option<Timestamp>,
    /// The retrieved information. Currently contains a presigned Amazon S3
    /// URL.
    message: Option<String>,
}

#[model_object]
pub struct AbortEnvironmentUpdateRequest {
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
}

/// Request to add or change the operations role used by an environment.
#[model_object]
pub struct AssociateEnvironmentOperationsRoleRequest {
    #[model(mandatory, length(min = 4, max = 40))]
    environment_name: Option<String>,
    /// The Amazon Resource Name (ARN) of an existing IAM role to be used as
    /// the environment's operations role.
    #[model(mandatory, length(min = 1, max = 256))]
    operations_role: Option<String>,
}

/// Checks if the specified CNAME is available.
#[model_object(name = "CheckDNSAvailabilityRequest")]
pub struct CheckDnsAvailabilityRequest {
    /// The prefix used when this CNAME is reserved.
    #[model(mandatory, name = "CNAMEPrefix", length(min = 4, max = 63))]
    cname_prefix: Option<String>,
}

#[model_object(name = "CheckDNSAvailabilityResult")]
pub struct CheckDnsAvailabilityResult {
    /// Indicates if the specified CNAME is available.
    available: Option<bool>,
    /// The fully qualified CNAME to reserve when `CreateEnvironment` is
    /// called with the provided prefix.
    #[model(name = "FullyQualifiedCNAME", length(min = 1, max = 255))]
    fully_qualified_cname: Option<String>,
}

/// Request to create or update a group of environments.
#[model_object]
pub struct ComposeEnvironmentsRequest {
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    /// The name of the group to which the target environments belong.
    #[model(length(min = 1, max = 19))]
    group_name: Option<String>,
    /// A list of version labels, specifying one or more application source
    /// bundles that belong to the target application.
    version_labels: Option<Vec<String>>,
}

#[model_object]
pub struct ComposeEnvironmentsResult {
    environments: Option<Vec<EnvironmentDescription>>,
    next_token: Option<String>,
}

/// Launches an environment for the specified application using the specified
/// configuration.
#[model_object]
pub struct CreateEnvironmentRequest {
    /// The name of the application that is associated with this environment.
    #[model(mandatory, length(min = 1, max = 100))]
    application_name: Option<String>,
    /// A unique name for the environment. Must contain only letters, digits
    /// and the dash character and may not start or end with a dash.
    #[model(
        length(min = 4, max = 40),
        pattern = "^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?$"
    )]
    environment_name: Option<String>,
    /// The name of the group to which the target environment belongs.
    #[model(length(min = 1, max = 19))]
    group_name: Option<String>,
    #[model(length(max = 200))]
    description: Option<String>,
    /// If specified, the environment attempts to use this value as the
    /// prefix for the CNAME in your Elastic Beanstalk environment URL.
    #[model(name = "CNAMEPrefix", length(min = 4, max = 63))]
    cname_prefix: Option<String>,
    tier: Option<EnvironmentTier>,
    /// Specifies the tags applied to resources in the environment.
    tags: Option<Vec<Tag>>,
    #[model(length(min = 1, max = 100))]
    version_label: Option<String>,
    /// The name of the configuration template to use for the environment.
    #[model(length(min = 1, max = 100))]
    template_name: Option<String>,
    solution_stack_name: Option<String>,
    platform_arn: Option<String>,
    option_settings: Option<Vec<ConfigurationOptionSetting>>,
    options_to_remove: Option<Vec<OptionSpecification>>,
    #[model(length(min = 1, max = 256))]
    operations_role: Option<String>,
}

#[model_object]
pub struct DescribeEnvironmentResourcesRequest {
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
}

#[model_object]
pub struct DescribeEnvironmentResourcesResult {
    environment_resources: Option<EnvironmentResourceDescription>,
}

/// Request to describe one or more environments.
#[model_object]
pub struct DescribeEnvironmentsRequest {
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(min = 1, max = 100))]
    version_label: Option<String>,
    environment_ids: Option<Vec<String>>,
    environment_names: Option<Vec<String>>,
    /// Indicates whether to include deleted environments.
    include_deleted: Option<bool>,
    /// If specified when `IncludeDeleted` is set to `true`, then environments
    /// deleted after this date are displayed.
    included_deleted_back_to: Option<Timestamp>,
    #[model(range(min = 1, max = 1000))]
    max_records: Option<i32>,
    next_token: Option<String>,
}

#[model_object]
pub struct DescribeEnvironmentsResult {
    environments: Option<Vec<EnvironmentDescription>>,
    next_token: Option<String>,
}

#[model_object]
pub struct DisassociateEnvironmentOperationsRoleRequest {
    #[model(mandatory, length(min = 4, max = 40))]
    environment_name: Option<String>,
}

#[model_object]
pub struct RebuildEnvironmentRequest {
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
}

/// Request to retrieve logs from the instances of an environment.
#[model_object]
pub struct RequestEnvironmentInfoRequest {
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    /// The type of information to request.
    #[model(mandatory)]
    info_type: Option<EnvironmentInfoType>,
}

#[model_object]
pub struct RestartAppServerRequest {
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
}

#[model_object]
pub struct RetrieveEnvironmentInfoRequest {
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    #[model(mandatory)]
    info_type: Option<EnvironmentInfoType>,
}

#[model_object]
pub struct RetrieveEnvironmentInfoResult {
    environment_info: Option<Vec<EnvironmentInfoDescription>>,
}

/// Swaps the CNAMEs of two environments.
#[model_object(name = "SwapEnvironmentCNAMEsRequest")]
pub struct SwapEnvironmentCnamesRequest {
    source_environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    source_environment_name: Option<String>,
    destination_environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    destination_environment_name: Option<String>,
}

#[model_object]
pub struct TerminateEnvironmentRequest {
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    /// Indicates whether the associated AWS resources should shut down when
    /// the environment is terminated.
    terminate_resources: Option<bool>,
    /// Terminates the target environment even if another environment in the
    /// same group is dependent on it.
    force_terminate: Option<bool>,
}

/// Updates the environment description, deploys a new application version,
/// updates the configuration settings to an entirely new configuration
/// template, or updates select configuration option values.
#[model_object]
pub struct UpdateEnvironmentRequest {
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    #[model(length(min = 1, max = 19))]
    group_name: Option<String>,
    #[model(length(max = 200))]
    description: Option<String>,
    tier: Option<EnvironmentTier>,
    #[model(length(min = 1, max = 100))]
    version_label: Option<String>,
    #[model(length(min = 1, max = 100))]
    template_name: Option<String>,
    solution_stack_name: Option<String>,
    platform_arn: Option<String>,
    option_settings: Option<Vec<ConfigurationOptionSetting>>,
    options_to_remove: Option<Vec<OptionSpecification>>,
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{
        CheckDnsAvailabilityRequest, CreateEnvironmentRequest, EnvironmentDescription,
        EnvironmentTier, Instance, UpdateEnvironmentResult,
    };
    use crate::model::{EnvironmentHealth, EnvironmentStatus, Tag};
    use crate::{ModelError, ModelField, ModelObject};

    #[test]
    fn utest_check_dns_availability_request_rendering() {
        let request = CheckDnsAvailabilityRequest::builder()
            .with_cname_prefix("myapp")
            .build()
            .unwrap();

        assert_eq!(request.cname_prefix(), Some("myapp"));
        assert_eq!(request.to_string(), "{CNAMEPrefix: myapp}");
        assert_eq!(
            CheckDnsAvailabilityRequest::TYPE_NAME,
            "CheckDNSAvailabilityRequest"
        );
    }

    #[test]
    fn utest_instances_with_same_id_are_equal() {
        let first = Instance::builder().with_id("i-1234").build().unwrap();
        let second = Instance::builder().with_id("i-1234").build().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.hash_code(), second.hash_code());
        assert_eq!(first.to_string(), "{Id: i-1234}");
    }

    #[test]
    fn utest_environment_tier_raw_type_field() {
        let tier = EnvironmentTier::builder()
            .with_name("WebServer")
            .with_type("Standard")
            .build()
            .unwrap();

        assert_eq!(tier.r#type(), Some("Standard"));
        assert_eq!(tier.to_string(), "{Name: WebServer,Type: Standard}");
    }

    #[test]
    fn utest_create_environment_request_environment_name_pattern() {
        let valid = CreateEnvironmentRequest::builder()
            .with_application_name("my-app")
            .with_environment_name("my-env-1")
            .build();
        assert!(valid.is_ok());

        let leading_dash = CreateEnvironmentRequest::builder()
            .with_application_name("my-app")
            .with_environment_name("-my-env")
            .build();
        assert!(matches!(
            leading_dash,
            Err(ModelError::PatternMismatch { ref field, .. })
                if field == "CreateEnvironmentRequest.EnvironmentName"
        ));
    }

    #[test]
    fn utest_create_environment_request_nested_tag_path() {
        let result = CreateEnvironmentRequest::builder()
            .with_application_name("my-app")
            .append_tags([Tag::builder().with_key("team").with_value("a").build().unwrap()])
            .append_tags([serde_json::from_str::<Tag>(r#"{"Value": "no key"}"#).unwrap()])
            .build();

        assert_eq!(
            result,
            Err(ModelError::MissingField {
                field: "CreateEnvironmentRequest.Tags[1].Key".into()
            })
        );
    }

    #[test]
    fn utest_environment_description_shapes_share_fields() {
        let description = EnvironmentDescription::builder()
            .with_environment_name("my-env")
            .with_status(EnvironmentStatus::Ready)
            .with_health(EnvironmentHealth::Green)
            .with_cname("my-env.elasticbeanstalk.com")
            .build()
            .unwrap();
        let result = UpdateEnvironmentResult::builder()
            .with_environment_name("my-env")
            .with_status(EnvironmentStatus::Ready)
            .with_health(EnvironmentHealth::Green)
            .with_cname("my-env.elasticbeanstalk.com")
            .build()
            .unwrap();

        assert_eq!(description.to_string(), result.to_string());
        assert_eq!(description.hash_code(), result.hash_code());
        assert_eq!(UpdateEnvironmentResult::TYPE_NAME, "UpdateEnvironmentResult");
    }
}

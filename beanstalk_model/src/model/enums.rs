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

use model_macros::model_enum;

#[model_enum]
pub enum ActionHistoryStatus {
    Completed,
    Failed,
    Unknown,
}

#[model_enum]
pub enum ActionStatus {
    Scheduled,
    Pending,
    Running,
    Unknown,
}

#[model_enum]
pub enum ActionType {
    InstanceRefresh,
    PlatformUpdate,
    Unknown,
}

/// Processing state of an application version, see
/// `CreateApplicationVersionRequest::process`.
#[model_enum]
pub enum ApplicationVersionStatus {
    Processed,
    Unprocessed,
    Failed,
    Processing,
    Building,
}

/// Compute resources of the CodeBuild environment used to build a source bundle.
#[model_enum]
pub enum ComputeType {
    /// 3 GB memory, 2 vCPUs.
    #[model(value = "BUILD_GENERAL1_SMALL")]
    BuildGeneral1Small,
    /// 7 GB memory, 4 vCPUs.
    #[model(value = "BUILD_GENERAL1_MEDIUM")]
    BuildGeneral1Medium,
    /// 15 GB memory, 8 vCPUs.
    #[model(value = "BUILD_GENERAL1_LARGE")]
    BuildGeneral1Large,
}

#[model_enum]
pub enum ConfigurationDeploymentStatus {
    #[model(value = "deployed")]
    Deployed,
    #[model(value = "pending")]
    Pending,
    #[model(value = "failed")]
    Failed,
}

#[model_enum]
pub enum ConfigurationOptionValueType {
    Scalar,
    List,
}

/// Color indicator of the health of an environment.
#[model_enum]
pub enum EnvironmentHealth {
    Green,
    Yellow,
    Red,
    Grey,
}

#[model_enum]
pub enum EnvironmentHealthAttribute {
    Status,
    Color,
    Causes,
    ApplicationMetrics,
    InstancesHealth,
    All,
    HealthStatus,
    RefreshedAt,
}

/// Enhanced health status of an environment or an instance.
#[model_enum]
pub enum EnvironmentHealthStatus {
    NoData,
    Unknown,
    Pending,
    Ok,
    Info,
    Warning,
    Degraded,
    Severe,
    Suspended,
}

#[model_enum]
pub enum EnvironmentInfoType {
    #[model(value = "tail")]
    Tail,
    #[model(value = "bundle")]
    Bundle,
}

#[model_enum]
pub enum EnvironmentStatus {
    Aborting,
    Launching,
    Updating,
    LinkingFrom,
    LinkingTo,
    Ready,
    Terminating,
    Terminated,
}

#[model_enum]
pub enum EventSeverity {
    #[model(value = "TRACE")]
    Trace,
    #[model(value = "DEBUG")]
    Debug,
    #[model(value = "INFO")]
    Info,
    #[model(value = "WARN")]
    Warn,
    #[model(value = "ERROR")]
    Error,
    #[model(value = "FATAL")]
    Fatal,
}

#[model_enum]
pub enum FailureType {
    UpdateCancelled,
    CancellationFailed,
    RollbackFailed,
    RollbackSuccessful,
    InternalFailure,
    InvalidEnvironmentState,
    PermissionsError,
}

#[model_enum]
pub enum InstancesHealthAttribute {
    HealthStatus,
    Color,
    Causes,
    ApplicationMetrics,
    RefreshedAt,
    LaunchedAt,
    System,
    Deployment,
    AvailabilityZone,
    InstanceType,
    All,
}

#[model_enum]
pub enum PlatformStatus {
    Creating,
    Failed,
    Ready,
    Deleting,
    Deleted,
}

/// Location of the source code of an application version.
#[model_enum]
pub enum SourceRepository {
    CodeCommit,
    S3,
}

#[model_enum]
pub enum SourceType {
    Git,
    Zip,
}

#[model_enum]
pub enum ValidationSeverity {
    #[model(value = "error")]
    Error,
    #[model(value = "warning")]
    Warning,
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
        ApplicationVersionStatus, ComputeType, ConfigurationDeploymentStatus, EnvironmentHealth,
        EventSeverity, ValidationSeverity,
    };
    use crate::{ModelError, ModelField, model_object::string_hash_code};

    #[test]
    fn utest_from_value_known_value() {
        assert_eq!(
            ApplicationVersionStatus::from_value("Processed"),
            Ok(ApplicationVersionStatus::Processed)
        );
        assert_eq!(
            ComputeType::from_value("BUILD_GENERAL1_MEDIUM"),
            Ok(ComputeType::BuildGeneral1Medium)
        );
        assert_eq!(
            ConfigurationDeploymentStatus::from_value("deployed"),
            Ok(ConfigurationDeploymentStatus::Deployed)
        );
    }

    #[test]
    fn utest_from_value_rejects_empty_and_unknown() {
        assert_eq!(
            ApplicationVersionStatus::from_value(""),
            Err(ModelError::InvalidEnumValue {
                type_name: "ApplicationVersionStatus".into(),
                value: String::new(),
            })
        );
        assert_eq!(
            ApplicationVersionStatus::from_value("Bogus"),
            Err(ModelError::InvalidEnumValue {
                type_name: "ApplicationVersionStatus".into(),
                value: "Bogus".into(),
            })
        );
        // values are case sensitive
        assert!(ConfigurationDeploymentStatus::from_value("Deployed").is_err());
    }

    #[test]
    fn utest_display_and_parse_use_canonical_text() {
        assert_eq!(EventSeverity::Warn.to_string(), "WARN");
        assert_eq!(EventSeverity::Warn.as_str(), "WARN");
        assert_eq!("FATAL".parse::<EventSeverity>(), Ok(EventSeverity::Fatal));
        assert_eq!(
            EnvironmentHealth::try_from("Grey"),
            Ok(EnvironmentHealth::Grey)
        );
    }

    #[test]
    fn utest_values_in_declaration_order() {
        assert_eq!(
            EnvironmentHealth::values(),
            &[
                EnvironmentHealth::Green,
                EnvironmentHealth::Yellow,
                EnvironmentHealth::Red,
                EnvironmentHealth::Grey
            ]
        );
        for status in ApplicationVersionStatus::values() {
            assert_eq!(
                ApplicationVersionStatus::from_value(status.as_str()),
                Ok(*status)
            );
        }
    }

    #[test]
    fn utest_hash_code_of_canonical_text() {
        assert_eq!(
            ComputeType::BuildGeneral1Small.hash_code(),
            string_hash_code("BUILD_GENERAL1_SMALL")
        );
    }

    #[test]
    fn utest_serde_uses_canonical_text() {
        assert_eq!(
            serde_json::to_string(&ComputeType::BuildGeneral1Large).unwrap(),
            "\"BUILD_GENERAL1_LARGE\""
        );
        assert_eq!(
            serde_json::from_str::<EventSeverity>("\"INFO\"").unwrap(),
            EventSeverity::Info
        );
        assert!(serde_json::from_str::<EventSeverity>("\"Info\"").is_err());
    }

    #[test]
    fn utest_severity_with_error_constant_converts_from_text() {
        assert_eq!(EventSeverity::try_from("ERROR"), Ok(EventSeverity::Error));
        assert_eq!("ERROR".parse::<EventSeverity>(), Ok(EventSeverity::Error));
        assert_eq!(
            ValidationSeverity::from_value("error"),
            Ok(ValidationSeverity::Error)
        );
        assert_eq!(
            ValidationSeverity::try_from("warning"),
            Ok(ValidationSeverity::Warning)
        );
        assert_eq!(ValidationSeverity::Error.to_string(), "error");
        assert!(matches!(
            ValidationSeverity::try_from("ERROR"),
            Err(ModelError::InvalidEnumValue { .. })
        ));
    }
}

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
use std::fmt;

macro_rules! service_errors {
    ($($(#[doc = $doc:literal])* $variant:ident => $code:literal,)*) => {
        /// Failure category of the service, identified by its error code.
        #[model_enum]
        pub enum ServiceErrorKind {
            $(
                $(#[doc = $doc])*
                #[model(value = $code)]
                $variant,
            )*
        }

        /// Error signaled by the service. Each variant carries the message
        /// sent along with the error code.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum ElasticBeanstalkError {
            $(
                $(#[doc = $doc])*
                $variant(String),
            )*
            /// Error code outside the known set.
            Unknown { code: String, message: String },
        }

        impl ElasticBeanstalkError {
            pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
                let message = message.into();
                match kind {
                    $(ServiceErrorKind::$variant => ElasticBeanstalkError::$variant(message),)*
                }
            }

            pub fn kind(&self) -> Option<ServiceErrorKind> {
                match self {
                    $(ElasticBeanstalkError::$variant(_) => Some(ServiceErrorKind::$variant),)*
                    ElasticBeanstalkError::Unknown { .. } => None,
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(ElasticBeanstalkError::$variant(message) => message,)*
                    ElasticBeanstalkError::Unknown { message, .. } => message,
                }
            }
        }
    };
}

service_errors! {
    /// CodeBuild is not available in the specified region.
    CodeBuildNotInServiceRegion => "CodeBuildNotInServiceRegionException",
    /// A generic service exception has occurred.
    ElasticBeanstalkService => "ElasticBeanstalkServiceException",
    /// The specified account does not have sufficient privileges for one or
    /// more AWS services.
    InsufficientPrivileges => "InsufficientPrivilegesException",
    /// One or more input parameters is not valid.
    InvalidRequest => "InvalidRequestException",
    /// Cannot modify the managed action in its current state.
    ManagedActionInvalidState => "ManagedActionInvalidStateException",
    /// Unable to perform the specified operation because another operation
    /// that effects an element in this activity is already in progress.
    OperationInProgress => "OperationInProgressFailure",
    /// The platform version is used by one or more environments.
    PlatformVersionStillReferenced => "PlatformVersionStillReferencedException",
    /// A resource doesn't exist for the specified Amazon Resource Name (ARN).
    ResourceNotFound => "ResourceNotFoundException",
    /// The type of the specified Amazon Resource Name (ARN) isn't supported
    /// for this operation.
    ResourceTypeNotSupported => "ResourceTypeNotSupportedException",
    /// The specified S3 bucket does not belong to the S3 region in which the
    /// service is running.
    S3LocationNotInServiceRegion => "S3LocationNotInServiceRegionException",
    /// The specified account does not have a subscription to Amazon S3.
    S3SubscriptionRequired => "S3SubscriptionRequiredException",
    /// Unable to delete the Amazon S3 source bundle associated with the
    /// application version.
    SourceBundleDeletion => "SourceBundleDeletionFailure",
    /// The specified account has reached its limit of application versions.
    TooManyApplicationVersions => "TooManyApplicationVersionsException",
    /// The specified account has reached its limit of applications.
    TooManyApplications => "TooManyApplicationsException",
    /// The specified account has reached its limit of Amazon S3 buckets.
    TooManyBuckets => "TooManyBucketsException",
    /// The specified account has reached its limit of configuration
    /// templates.
    TooManyConfigurationTemplates => "TooManyConfigurationTemplatesException",
    /// The specified account has reached its limit of environments.
    TooManyEnvironments => "TooManyEnvironmentsException",
    /// You have exceeded the maximum number of allowed platforms associated
    /// with the account.
    TooManyPlatforms => "TooManyPlatformsException",
    /// The number of tags in the resource would exceed the number of tags
    /// that each resource can have.
    TooManyTags => "TooManyTagsException",
}

impl ElasticBeanstalkError {
    /// Classifies the error code reported by the service.
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        match ServiceErrorKind::from_value(code) {
            Ok(kind) => ElasticBeanstalkError::new(kind, message),
            Err(_) => {
                log::debug!("Unknown service error code '{code}'");
                ElasticBeanstalkError::Unknown {
                    code: code.to_string(),
                    message: message.into(),
                }
            }
        }
    }

    /// The error code as sent by the service.
    pub fn code(&self) -> &str {
        match self {
            ElasticBeanstalkError::Unknown { code, .. } => code,
            known => known.kind().map_or("", |kind| kind.as_str()),
        }
    }
}

impl fmt::Display for ElasticBeanstalkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ElasticBeanstalkError {}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

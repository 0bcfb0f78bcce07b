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

//! Catalog of the operations of the service with their request and result
//! types and the service errors each of them declares.

use crate::model::*;
use crate::{ModelObject, ServiceErrorKind};
use model_macros::model_enum;

/// Acts on the concrete request and result types of an operation.
pub trait OperationVisitor {
    type Output;

    fn visit<I: ModelObject, O: ModelObject>(self, operation: Operation) -> Self::Output;
}

macro_rules! operations {
    ($(
        $(#[doc = $doc:literal])*
        $variant:ident $(as $value:literal)? ($input:ty => $output:ty) [$($error:ident),*],
    )*) => {
        /// The operations of the service, named as in the API.
        #[model_enum]
        pub enum Operation {
            $(
                $(#[doc = $doc])*
                $(#[model(value = $value)])?
                $variant,
            )*
        }

        impl Operation {
            pub fn input_type_name(&self) -> &'static str {
                match self {
                    $(Operation::$variant => <$input as ModelObject>::TYPE_NAME,)*
                }
            }

            pub fn output_type_name(&self) -> &'static str {
                match self {
                    $(Operation::$variant => <$output as ModelObject>::TYPE_NAME,)*
                }
            }

            pub fn declared_errors(&self) -> &'static [ServiceErrorKind] {
                match self {
                    $(Operation::$variant => &[$(ServiceErrorKind::$error),*],)*
                }
            }

            /// Calls the visitor with the request and result types of this operation.
            pub fn visit<V: OperationVisitor>(self, visitor: V) -> V::Output {
                log::debug!("Visiting operation '{self}'");
                match self {
                    $(Operation::$variant => visitor.visit::<$input, $output>(self),)*
                }
            }
        }
    };
}

operations! {
    /// Cancels in-progress environment configuration update or application
    /// version deployment.
    AbortEnvironmentUpdate (AbortEnvironmentUpdateRequest => EmptyResult)
        [InsufficientPrivileges],
    /// Applies a scheduled managed action immediately.
    ApplyEnvironmentManagedAction (ApplyEnvironmentManagedActionRequest => ApplyEnvironmentManagedActionResult)
        [ElasticBeanstalkService, ManagedActionInvalidState],
    /// Adds or changes the operations role of an environment.
    AssociateEnvironmentOperationsRole (AssociateEnvironmentOperationsRoleRequest => EmptyResult)
        [InsufficientPrivileges],
    /// Checks if the specified CNAME is available.
    CheckDnsAvailability as "CheckDNSAvailability" (CheckDnsAvailabilityRequest => CheckDnsAvailabilityResult)
        [],
    /// Creates or updates a group of environments that each run a separate
    /// component of a single application.
    ComposeEnvironments (ComposeEnvironmentsRequest => ComposeEnvironmentsResult)
        [TooManyEnvironments, InsufficientPrivileges],
    CreateApplication (CreateApplicationRequest => CreateApplicationResult)
        [TooManyApplications],
    CreateApplicationVersion (CreateApplicationVersionRequest => CreateApplicationVersionResult)
        [
            TooManyApplications,
            TooManyApplicationVersions,
            InsufficientPrivileges,
            S3LocationNotInServiceRegion,
            CodeBuildNotInServiceRegion
        ],
    CreateConfigurationTemplate (CreateConfigurationTemplateRequest => CreateConfigurationTemplateResult)
        [InsufficientPrivileges, TooManyBuckets, TooManyConfigurationTemplates],
    CreateEnvironment (CreateEnvironmentRequest => CreateEnvironmentResult)
        [TooManyEnvironments, InsufficientPrivileges],
    /// Creates a new version of a custom platform.
    CreatePlatformVersion (CreatePlatformVersionRequest => CreatePlatformVersionResult)
        [InsufficientPrivileges, ElasticBeanstalkService, TooManyPlatforms],
    /// Creates a bucket in Amazon S3 to store application versions, logs,
    /// and other files.
    CreateStorageLocation (CreateStorageLocationRequest => CreateStorageLocationResult)
        [TooManyBuckets, S3SubscriptionRequired, InsufficientPrivileges],
    DeleteApplication (DeleteApplicationRequest => EmptyResult)
        [OperationInProgress],
    DeleteApplicationVersion (DeleteApplicationVersionRequest => EmptyResult)
        [
            SourceBundleDeletion,
            InsufficientPrivileges,
            OperationInProgress,
            S3LocationNotInServiceRegion
        ],
    DeleteConfigurationTemplate (DeleteConfigurationTemplateRequest => EmptyResult)
        [OperationInProgress],
    /// Deletes the draft configuration associated with the running
    /// environment.
    DeleteEnvironmentConfiguration (DeleteEnvironmentConfigurationRequest => EmptyResult)
        [],
    DeletePlatformVersion (DeletePlatformVersionRequest => DeletePlatformVersionResult)
        [
            OperationInProgress,
            InsufficientPrivileges,
            ElasticBeanstalkService,
            PlatformVersionStillReferenced
        ],
    /// Returns attributes related to the service that are specific to the
    /// calling account.
    DescribeAccountAttributes (DescribeAccountAttributesRequest => DescribeAccountAttributesResult)
        [InsufficientPrivileges],
    DescribeApplicationVersions (DescribeApplicationVersionsRequest => DescribeApplicationVersionsResult)
        [],
    DescribeApplications (DescribeApplicationsRequest => DescribeApplicationsResult)
        [],
    DescribeConfigurationOptions (DescribeConfigurationOptionsRequest => DescribeConfigurationOptionsResult)
        [TooManyBuckets],
    DescribeConfigurationSettings (DescribeConfigurationSettingsRequest => DescribeConfigurationSettingsResult)
        [TooManyBuckets],
    /// Returns information about the overall health of an environment.
    DescribeEnvironmentHealth (DescribeEnvironmentHealthRequest => DescribeEnvironmentHealthResult)
        [InvalidRequest, ElasticBeanstalkService],
    DescribeEnvironmentManagedActionHistory (DescribeEnvironmentManagedActionHistoryRequest => DescribeEnvironmentManagedActionHistoryResult)
        [ElasticBeanstalkService],
    DescribeEnvironmentManagedActions (DescribeEnvironmentManagedActionsRequest => DescribeEnvironmentManagedActionsResult)
        [ElasticBeanstalkService],
    DescribeEnvironmentResources (DescribeEnvironmentResourcesRequest => DescribeEnvironmentResourcesResult)
        [InsufficientPrivileges],
    DescribeEnvironments (DescribeEnvironmentsRequest => DescribeEnvironmentsResult)
        [],
    DescribeEvents (DescribeEventsRequest => DescribeEventsResult)
        [],
    DescribeInstancesHealth (DescribeInstancesHealthRequest => DescribeInstancesHealthResult)
        [InvalidRequest, ElasticBeanstalkService],
    DescribePlatformVersion (DescribePlatformVersionRequest => DescribePlatformVersionResult)
        [InsufficientPrivileges, ElasticBeanstalkService],
    DisassociateEnvironmentOperationsRole (DisassociateEnvironmentOperationsRoleRequest => EmptyResult)
        [InsufficientPrivileges],
    ListAvailableSolutionStacks (ListAvailableSolutionStacksRequest => ListAvailableSolutionStacksResult)
        [],
    ListPlatformBranches (ListPlatformBranchesRequest => ListPlatformBranchesResult)
        [],
    ListPlatformVersions (ListPlatformVersionsRequest => ListPlatformVersionsResult)
        [InsufficientPrivileges, ElasticBeanstalkService],
    ListTagsForResource (ListTagsForResourceRequest => ListTagsForResourceResult)
        [InsufficientPrivileges, ResourceNotFound, ResourceTypeNotSupported],
    /// Deletes and recreates all of the AWS resources for an environment and
    /// forces a restart.
    RebuildEnvironment (RebuildEnvironmentRequest => EmptyResult)
        [InsufficientPrivileges],
    /// Initiates a request to compile the specified type of information of
    /// the deployed environment.
    RequestEnvironmentInfo (RequestEnvironmentInfoRequest => EmptyResult)
        [],
    RestartAppServer (RestartAppServerRequest => EmptyResult)
        [],
    RetrieveEnvironmentInfo (RetrieveEnvironmentInfoRequest => RetrieveEnvironmentInfoResult)
        [],
    /// Swaps the CNAMEs of two environments.
    SwapEnvironmentCnames as "SwapEnvironmentCNAMEs" (SwapEnvironmentCnamesRequest => EmptyResult)
        [],
    TerminateEnvironment (TerminateEnvironmentRequest => TerminateEnvironmentResult)
        [InsufficientPrivileges],
    UpdateApplication (UpdateApplicationRequest => UpdateApplicationResult)
        [],
    UpdateApplicationResourceLifecycle (UpdateApplicationResourceLifecycleRequest => UpdateApplicationResourceLifecycleResult)
        [InsufficientPrivileges],
    UpdateApplicationVersion (UpdateApplicationVersionRequest => UpdateApplicationVersionResult)
        [],
    UpdateConfigurationTemplate (UpdateConfigurationTemplateRequest => UpdateConfigurationTemplateResult)
        [InsufficientPrivileges, TooManyBuckets],
    UpdateEnvironment (UpdateEnvironmentRequest => UpdateEnvironmentResult)
        [InsufficientPrivileges, TooManyBuckets],
    UpdateTagsForResource (UpdateTagsForResourceRequest => EmptyResult)
        [
            InsufficientPrivileges,
            OperationInProgress,
            TooManyTags,
            ResourceNotFound,
            ResourceTypeNotSupported
        ],
    /// Takes a set of configuration settings and either a configuration
    /// template or environment, and determines whether those values are
    /// valid.
    ValidateConfigurationSettings (ValidateConfigurationSettingsRequest => ValidateConfigurationSettingsResult)
        [InsufficientPrivileges, TooManyBuckets],
}

impl Operation {
    /// The operations that declare the given service error.
    pub fn declaring(kind: ServiceErrorKind) -> Vec<Operation> {
        Operation::values()
            .iter()
            .copied()
            .filter(|operation| operation.declared_errors().contains(&kind))
            .collect()
    }

    pub fn returns_payload(&self) -> bool {
        self.output_type_name() != EmptyResult::TYPE_NAME
    }
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
    use super::{Operation, OperationVisitor};
    use crate::{ModelObject, ServiceErrorKind};
    use std::collections::HashSet;

    struct TypeNames;

    impl OperationVisitor for TypeNames {
        type Output = (&'static str, &'static str);

        fn visit<I: ModelObject, O: ModelObject>(self, _operation: Operation) -> Self::Output {
            (I::TYPE_NAME, O::TYPE_NAME)
        }
    }

    #[test]
    fn utest_catalog_lists_all_operations_once() {
        let operations = Operation::values();
        assert_eq!(operations.len(), 47);

        let names: HashSet<&str> = operations.iter().map(Operation::as_str).collect();
        assert_eq!(names.len(), 47);
        assert!(names.contains("CheckDNSAvailability"));
        assert!(names.contains("SwapEnvironmentCNAMEs"));
    }

    #[test]
    fn utest_catalog_type_names_match_visited_types() {
        for operation in Operation::values() {
            let (input, output) = operation.visit(TypeNames);

            assert_eq!(input, operation.input_type_name());
            assert_eq!(output, operation.output_type_name());
            assert_eq!(input, format!("{operation}Request"));
            if operation.returns_payload() {
                assert_eq!(output, format!("{operation}Result"));
            } else {
                assert_eq!(output, "EmptyResult");
            }
        }
    }

    #[test]
    fn utest_catalog_declared_errors() {
        assert_eq!(
            Operation::CreateApplicationVersion.declared_errors(),
            &[
                ServiceErrorKind::TooManyApplications,
                ServiceErrorKind::TooManyApplicationVersions,
                ServiceErrorKind::InsufficientPrivileges,
                ServiceErrorKind::S3LocationNotInServiceRegion,
                ServiceErrorKind::CodeBuildNotInServiceRegion
            ]
        );
        assert!(Operation::CheckDnsAvailability.declared_errors().is_empty());
        assert_eq!(
            Operation::declaring(ServiceErrorKind::TooManyTags),
            vec![Operation::UpdateTagsForResource]
        );
        assert_eq!(
            Operation::declaring(ServiceErrorKind::ManagedActionInvalidState),
            vec![Operation::ApplyEnvironmentManagedAction]
        );
    }

    #[test]
    fn utest_every_service_error_is_declared_somewhere() {
        for kind in ServiceErrorKind::values() {
            assert!(
                !Operation::declaring(*kind).is_empty(),
                "'{kind}' is not declared by any operation"
            );
        }
    }

    #[test]
    fn utest_operations_without_payload() {
        let without_payload: Vec<Operation> = Operation::values()
            .iter()
            .copied()
            .filter(|operation| !operation.returns_payload())
            .collect();

        assert_eq!(without_payload.len(), 12);
        assert!(without_payload.contains(&Operation::SwapEnvironmentCnames));
        assert!(!without_payload.contains(&Operation::CreateEnvironment));
    }
}

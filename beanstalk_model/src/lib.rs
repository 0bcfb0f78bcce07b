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

//! Request, result and error model of the AWS Elastic Beanstalk API.
//!
//! Every model object is an immutable value with a generated builder. The
//! `#[model_object]` and `#[model_enum]` attributes generate that surface.

// Lets the generated code refer to this crate by name from inside the crate.
extern crate self as beanstalk_model;

pub use model_macros::{model_enum, model_object};

pub const API_VERSION: &str = "2010-12-01";
pub const ENDPOINT_PREFIX: &str = "elasticbeanstalk";
pub const SERVICE_NAME: &str = "AWSElasticBeanstalk";

/// Point in time used by all timestamp fields, rendered in RFC 3339.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

mod error;
pub use error::ModelError;

pub mod model_object;
pub use model_object::{ModelField, ModelObject};

pub mod validation;

pub mod model;

pub mod operations;
pub use operations::{Operation, OperationVisitor};

pub mod service_error;
pub use service_error::{ElasticBeanstalkError, ServiceErrorKind};

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

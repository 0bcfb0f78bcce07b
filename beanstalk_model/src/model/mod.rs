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

//! All model objects and enumerations of the service.

mod account;
mod application;
mod application_version;
mod configuration;
mod enums;
mod environment;
mod events;
mod health;
mod managed_action;
mod platform;
mod solution_stack;
mod tags;

pub use account::*;
pub use application::*;
pub use application_version::*;
pub use configuration::*;
pub use enums::*;
pub use environment::*;
pub use events::*;
pub use health::*;
pub use managed_action::*;
pub use platform::*;
pub use solution_stack::*;
pub use tags::*;

use model_macros::model_object;

/// Output of the operations that return no payload.
#[model_object]
pub struct EmptyResult {}

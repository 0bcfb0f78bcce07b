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

use super::{ActionHistoryStatus, ActionStatus, ActionType, FailureType};
use crate::Timestamp;
use model_macros::model_object;

/// The record of an upcoming or in-progress managed action.
#[model_object]
pub struct ManagedAction {
    action_id: Option<String>,
    action_description: Option<String>,
    action_type: Option<ActionType>,
    /// The status of the managed action. If the action is `Scheduled`, you
    /// can apply it immediately with `ApplyEnvironmentManagedAction`.
    status: Option<ActionStatus>,
    /// The start time of the maintenance window in which the managed action
    /// will execute.
    window_start_time: Option<Timestamp>,
}

/// The record of a completed or failed managed action.
#[model_object]
pub struct ManagedActionHistoryItem {
    action_id: Option<String>,
    action_type: Option<ActionType>,
    action_description: Option<String>,
    /// If the action failed, the type of failure.
    failure_type: Option<FailureType>,
    status: Option<ActionHistoryStatus>,
    failure_description: Option<String>,
    executed_time: Option<Timestamp>,
    finished_time: Option<Timestamp>,
}

/// Request to execute a scheduled managed action immediately.
#[model_object]
pub struct ApplyEnvironmentManagedActionRequest {
    environment_name: Option<String>,
    environment_id: Option<String>,
    /// The action ID of the scheduled managed action to execute.
    #[model(mandatory)]
    action_id: Option<String>,
}

#[model_object]
pub struct ApplyEnvironmentManagedActionResult {
    action_id: Option<String>,
    action_description: Option<String>,
    action_type: Option<ActionType>,
    status: Option<String>,
}

#[model_object]
pub struct DescribeEnvironmentManagedActionHistoryRequest {
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    next_token: Option<String>,
    /// The maximum number of items to return for a single request.
    #[model(range(min = 1, max = 100))]
    max_items: Option<i32>,
}

#[model_object]
pub struct DescribeEnvironmentManagedActionHistoryResult {
    #[model(length(min = 1, max = 100))]
    managed_action_history_items: Option<Vec<ManagedActionHistoryItem>>,
    next_token: Option<String>,
}

#[model_object]
pub struct DescribeEnvironmentManagedActionsRequest {
    environment_name: Option<String>,
    environment_id: Option<String>,
    /// To show only actions with a particular status, specify a status.
    status: Option<ActionStatus>,
}

#[model_object]
pub struct DescribeEnvironmentManagedActionsResult {
    #[model(length(min = 1, max = 100))]
    managed_actions: Option<Vec<ManagedAction>>,
}

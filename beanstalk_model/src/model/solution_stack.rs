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

use model_macros::model_object;

/// Describes the solution stack.
#[model_object]
pub struct SolutionStackDescription {
    solution_stack_name: Option<String>,
    /// The permitted file types allowed for a solution stack.
    permitted_file_types: Option<Vec<String>>,
}

#[model_object]
pub struct ListAvailableSolutionStacksRequest {}

#[model_object]
pub struct ListAvailableSolutionStacksResult {
    /// A list of available solution stacks.
    solution_stacks: Option<Vec<String>>,
    solution_stack_details: Option<Vec<SolutionStackDescription>>,
}

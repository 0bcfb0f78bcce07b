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

use beanstalk_model::Operation;
use tabled::Tabled;

#[derive(Debug, Tabled, Clone, PartialEq)]
#[tabled(rename_all = "UPPERCASE")]
pub struct OperationTableRow {
    pub operation: String,
    pub input: String,
    pub output: String,
    #[tabled(rename = "DECLARED ERRORS")]
    pub declared_errors: String,
}

impl From<Operation> for OperationTableRow {
    fn from(operation: Operation) -> Self {
        OperationTableRow {
            operation: operation.as_str().to_string(),
            input: operation.input_type_name().to_string(),
            output: operation.output_type_name().to_string(),
            declared_errors: operation
                .declared_errors()
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

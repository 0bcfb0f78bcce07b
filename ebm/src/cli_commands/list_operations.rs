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
use tabled::{Table, settings::Style};

use super::CliCommands;
use super::operation_table_row::OperationTableRow;

impl CliCommands {
    pub fn list_operations(&self) -> String {
        let rows: Vec<OperationTableRow> = Operation::values()
            .iter()
            .copied()
            .map(OperationTableRow::from)
            .collect();
        log::debug!("Listing {} operations", rows.len());

        let mut table = Table::new(rows);
        table.with(Style::blank());
        table.to_string()
    }
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

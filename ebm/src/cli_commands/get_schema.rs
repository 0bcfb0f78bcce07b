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

use beanstalk_model::{ModelObject, Operation, OperationVisitor};
use schemars::{Schema, generate::SchemaSettings};

use super::CliCommands;
use crate::cli_error::CliError;

struct OperationSchema {
    output_type: bool,
}

impl OperationVisitor for OperationSchema {
    type Output = Schema;

    fn visit<I: ModelObject, O: ModelObject>(self, _operation: Operation) -> Schema {
        let generator = SchemaSettings::draft07().into_generator();
        if self.output_type {
            generator.into_root_schema_for::<O>()
        } else {
            generator.into_root_schema_for::<I>()
        }
    }
}

impl CliCommands {
    pub fn get_schema(&self, operation: Operation, output_type: bool) -> Result<String, CliError> {
        let schema = operation.visit(OperationSchema { output_type });
        Ok(serde_json::to_string_pretty(&schema)?)
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
    use crate::cli::OutputFormat;
    use crate::cli_commands::tests::generate_test_cli_commands;
    use beanstalk_model::Operation;

    #[test]
    fn utest_get_schema_of_request() {
        let schema = generate_test_cli_commands(OutputFormat::Yaml)
            .get_schema(Operation::CheckDnsAvailability, false)
            .unwrap();
        let schema: serde_json::Value = serde_json::from_str(&schema).unwrap();

        assert_eq!(
            schema["$schema"],
            "http://json-schema.org/draft-07/schema#"
        );
        assert_eq!(schema["title"], "CheckDNSAvailabilityRequest");
        let cname_prefix = schema["properties"]["CNAMEPrefix"].to_string();
        assert!(cname_prefix.contains("\"minLength\":4"));
        assert!(cname_prefix.contains("\"maxLength\":63"));
    }

    #[test]
    fn utest_get_schema_of_result() {
        let schema = generate_test_cli_commands(OutputFormat::Yaml)
            .get_schema(Operation::CheckDnsAvailability, true)
            .unwrap();

        assert!(schema.contains("\"CheckDNSAvailabilityResult\""));
        assert!(schema.contains("\"FullyQualifiedCNAME\""));
    }
}

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

use beanstalk_model::{ElasticBeanstalkError, Operation};

use super::CliCommands;

impl CliCommands {
    pub fn classify_error(&self, code: &str, message: Option<String>) -> String {
        let error = ElasticBeanstalkError::from_code(code, message.unwrap_or_default());

        let mut lines = vec![format!("code: {}", error.code())];
        if !error.message().is_empty() {
            lines.push(format!("message: {}", error.message()));
        }
        match error.kind() {
            Some(kind) => {
                let declaring = Operation::declaring(kind)
                    .iter()
                    .map(Operation::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                lines.push(format!("kind: {kind:?}"));
                lines.push(format!("declared by: {declaring}"));
            }
            None => lines.push("kind: unknown".to_string()),
        }
        lines.join("\n")
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

    #[test]
    fn utest_classify_known_error() {
        let output = generate_test_cli_commands(OutputFormat::Yaml).classify_error(
            "ManagedActionInvalidStateException",
            Some("action is not pending".to_string()),
        );

        assert_eq!(
            output,
            "code: ManagedActionInvalidStateException\n\
             message: action is not pending\n\
             kind: ManagedActionInvalidState\n\
             declared by: ApplyEnvironmentManagedAction"
        );
    }

    #[test]
    fn utest_classify_unknown_error() {
        let output =
            generate_test_cli_commands(OutputFormat::Yaml).classify_error("ThrottlingException", None);

        assert_eq!(output, "code: ThrottlingException\nkind: unknown");
    }
}

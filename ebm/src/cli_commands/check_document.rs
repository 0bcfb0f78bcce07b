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

use std::path::Path;

use beanstalk_model::{ModelObject, Operation, OperationVisitor};

use super::{CliCommands, Document};
use crate::cli::OutputFormat;
use crate::cli_error::CliError;

struct DocumentValidator<'a> {
    document: &'a Document<'a>,
}

impl OperationVisitor for DocumentValidator<'_> {
    type Output = Result<String, CliError>;

    fn visit<I: ModelObject, O: ModelObject>(self, _operation: Operation) -> Self::Output {
        let request: I = self.document.parse()?;
        request.validate()?;
        Ok(format!("{}: {request}", I::TYPE_NAME))
    }
}

struct DocumentRenderer<'a> {
    document: &'a Document<'a>,
    output_format: OutputFormat,
}

impl OperationVisitor for DocumentRenderer<'_> {
    type Output = Result<String, CliError>;

    fn visit<I: ModelObject, O: ModelObject>(self, _operation: Operation) -> Self::Output {
        let request: I = self.document.parse()?;
        match self.output_format {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&request)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&request)?),
        }
    }
}

impl CliCommands {
    pub fn validate_document(&self, operation: Operation, file: &Path) -> Result<String, CliError> {
        let document = Document::read(file)?;
        operation.visit(DocumentValidator {
            document: &document,
        })
    }

    pub fn render_document(
        &self,
        operation: Operation,
        file: &Path,
        output_format: Option<OutputFormat>,
    ) -> Result<String, CliError> {
        let document = Document::read(file)?;
        operation.visit(DocumentRenderer {
            document: &document,
            output_format: output_format.unwrap_or(self.default_output_format),
        })
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
    use crate::cli_commands::tests::{generate_test_cli_commands, write_document};
    use crate::cli_error::CliError;
    use beanstalk_model::model::CreateEnvironmentRequest;
    use beanstalk_model::test_utils::generate_test_create_environment_request;
    use beanstalk_model::{ModelError, Operation};

    #[test]
    fn utest_validate_document_valid_request() {
        let request = generate_test_create_environment_request();
        let document = write_document(".yaml", &serde_yaml::to_string(&request).unwrap());

        let output = generate_test_cli_commands(OutputFormat::Yaml)
            .validate_document(Operation::CreateEnvironment, document.path())
            .unwrap();

        assert_eq!(output, format!("CreateEnvironmentRequest: {request}"));
    }

    #[test]
    fn utest_validate_document_reports_nested_path() {
        let document = write_document(
            ".json",
            r#"{"ApplicationName": "my-app", "Tags": [{"Value": "no key"}]}"#,
        );

        let result = generate_test_cli_commands(OutputFormat::Yaml)
            .validate_document(Operation::CreateEnvironment, document.path());

        assert_eq!(
            result,
            Err(CliError::Validation(ModelError::MissingField {
                field: "CreateEnvironmentRequest.Tags[0].Key".to_string()
            }))
        );
    }

    #[test]
    fn utest_validate_document_rejects_unknown_enum_value() {
        let document = write_document(".yaml", "EnvironmentName: my-env\nInfoType: everything\n");

        let result = generate_test_cli_commands(OutputFormat::Yaml)
            .validate_document(Operation::RequestEnvironmentInfo, document.path());

        assert!(matches!(result, Err(CliError::YamlSerialization(_))));
    }

    #[test]
    fn utest_render_document_uses_default_output_format() {
        let request = generate_test_create_environment_request();
        let document = write_document(".yaml", &serde_yaml::to_string(&request).unwrap());

        let output = generate_test_cli_commands(OutputFormat::Json)
            .render_document(Operation::CreateEnvironment, document.path(), None)
            .unwrap();

        let rendered: CreateEnvironmentRequest = serde_json::from_str(&output).unwrap();
        assert_eq!(rendered, request);
        assert!(!output.contains("GroupName"));
    }

    #[test]
    fn utest_render_document_explicit_output_format() {
        let document = write_document(".json", r#"{"CNAMEPrefix": "myapp"}"#);

        let output = generate_test_cli_commands(OutputFormat::Json)
            .render_document(
                Operation::CheckDnsAvailability,
                document.path(),
                Some(OutputFormat::Yaml),
            )
            .unwrap();

        assert_eq!(output, "CNAMEPrefix: myapp\n");
    }
}

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

use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::cli::OutputFormat;
use crate::cli_error::CliError;
use crate::ebm_config::EbmConfig;

mod check_document;
mod classify_error;
mod get_schema;
mod list_operations;
mod operation_table_row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> DocumentFormat {
        match path.extension().and_then(OsStr::to_str) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A request document read from disk.
struct Document<'a> {
    path: &'a Path,
    content: String,
}

impl<'a> Document<'a> {
    fn read(path: &'a Path) -> Result<Self, CliError> {
        let content = read_to_string(path)
            .map_err(|err| CliError::ReadDocument(format!("'{}': {err}", path.display())))?;
        Ok(Document { path, content })
    }

    fn parse<T: DeserializeOwned>(&self) -> Result<T, CliError> {
        log::debug!("Parsing document '{}'", self.path.display());
        match DocumentFormat::from_path(self.path) {
            DocumentFormat::Json => Ok(serde_json::from_str(&self.content)?),
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(&self.content)?),
        }
    }
}

pub struct CliCommands {
    default_output_format: OutputFormat,
}

impl CliCommands {
    pub fn init(config: &EbmConfig) -> Self {
        CliCommands {
            default_output_format: config.output_format,
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

#[cfg(test)]
pub(crate) mod tests {
    use super::{CliCommands, Document, DocumentFormat};
    use crate::cli::OutputFormat;
    use crate::cli_error::CliError;
    use crate::ebm_config::EbmConfig;
    use beanstalk_model::model::Tag;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    pub fn write_document(suffix: &str, content: &str) -> NamedTempFile {
        let mut document = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(document, "{content}").unwrap();
        document
    }

    pub fn generate_test_cli_commands(output_format: OutputFormat) -> CliCommands {
        CliCommands::init(&EbmConfig {
            output_format,
            ..EbmConfig::default()
        })
    }

    #[test]
    fn utest_document_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("request.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("request.JSON")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("request.yml")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("request")),
            DocumentFormat::Yaml
        );
    }

    #[test]
    fn utest_document_parse_json_and_yaml() {
        let json = write_document(".json", r#"{"Key": "team", "Value": "platform"}"#);
        let yaml = write_document(".yaml", "Key: team\nValue: platform\n");

        let from_json: Tag = Document::read(json.path()).unwrap().parse().unwrap();
        let from_yaml: Tag = Document::read(yaml.path()).unwrap().parse().unwrap();

        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json.key(), Some("team"));
    }

    #[test]
    fn utest_document_read_missing_file() {
        let result = Document::read(Path::new("/does/not/exist.yaml"));

        assert!(matches!(result, Err(CliError::ReadDocument(_))));
    }
}

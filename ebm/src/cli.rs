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

use std::path::PathBuf;

use beanstalk_model::{API_VERSION, ENDPOINT_PREFIX, Operation, SERVICE_NAME};
use clap::{Parser, Subcommand};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub const EBM_CONFIG_ENV_KEY: &str = "EBM_CONFIG";

static LONG_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}\nmodel of {SERVICE_NAME} API version {API_VERSION} (endpoint prefix '{ENDPOINT_PREFIX}')",
        env!("CARGO_PKG_VERSION")
    )
});

fn parse_operation(value: &str) -> Result<Operation, String> {
    Operation::from_value(value).map_err(|err| err.to_string())
}

#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "ebm")]
#[command(bin_name = "ebm")]
#[command(version)]
#[command(long_version = LONG_VERSION.as_str())]
/// Work with AWS Elastic Beanstalk API requests offline
pub struct EbmCli {
    #[command(subcommand)]
    pub command: Commands,
    #[clap(long = "config", env = EBM_CONFIG_ENV_KEY)]
    /// The path to the ebm configuration file.
    pub config_path: Option<String>,
    #[clap(short = 'v', long = "verbose", global = true)]
    /// Enable debug traces
    pub verbose: bool,
}

#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Supported actions
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all operations with their request, result and declared errors
    Operations,
    /// Print the JSON Schema of the request (or result) of an operation
    Schema {
        /// Name of the operation, e.g. 'CreateEnvironment'
        #[arg(value_parser = parse_operation)]
        operation: Operation,
        /// Print the schema of the result instead of the request
        #[arg(long = "output-type")]
        output_type: bool,
    },
    /// Check a YAML or JSON request document against the documented constraints
    Validate {
        /// Name of the operation, e.g. 'CreateEnvironment'
        #[arg(value_parser = parse_operation)]
        operation: Operation,
        /// Request document, read as JSON for '.json' files and as YAML otherwise
        file: PathBuf,
    },
    /// Re-emit a request document, leaving out unset fields
    Render {
        /// Name of the operation, e.g. 'CreateEnvironment'
        #[arg(value_parser = parse_operation)]
        operation: Operation,
        /// Request document, read as JSON for '.json' files and as YAML otherwise
        file: PathBuf,
        /// Specify the output format [default: from the config file, else yaml]
        #[arg(short = 'o', value_enum)]
        output_format: Option<OutputFormat>,
    },
    /// Classify a service error code and list the operations declaring it
    Error {
        /// Error code as returned by the service, e.g. 'TooManyTagsException'
        code: String,
        /// Error message returned together with the code
        message: Option<String>,
    },
}

pub fn parse() -> EbmCli {
    EbmCli::parse()
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
    use super::{Commands, EbmCli, OutputFormat};
    use beanstalk_model::Operation;
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn utest_parse_schema_command() {
        let args =
            EbmCli::try_parse_from(["ebm", "schema", "CheckDNSAvailability", "--output-type"])
                .unwrap();

        assert!(matches!(
            args.command,
            Commands::Schema {
                operation: Operation::CheckDnsAvailability,
                output_type: true
            }
        ));
        assert!(!args.verbose);
    }

    #[test]
    fn utest_parse_render_command_with_global_verbose() {
        let args = EbmCli::try_parse_from([
            "ebm",
            "render",
            "CreateEnvironment",
            "request.yaml",
            "-o",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        match args.command {
            Commands::Render {
                operation,
                file,
                output_format,
            } => {
                assert_eq!(operation, Operation::CreateEnvironment);
                assert_eq!(file, PathBuf::from("request.yaml"));
                assert_eq!(output_format, Some(OutputFormat::Json));
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn utest_parse_rejects_unknown_operation() {
        assert!(EbmCli::try_parse_from(["ebm", "validate", "CreateEnv", "request.yaml"]).is_err());
    }

    #[test]
    fn utest_parse_error_command_message_is_optional() {
        let args = EbmCli::try_parse_from(["ebm", "error", "TooManyTagsException"]).unwrap();

        assert!(matches!(
            args.command,
            Commands::Error { code, message: None } if code == "TooManyTagsException"
        ));
    }

    #[test]
    fn utest_long_version_names_modeled_api() {
        let command = EbmCli::command();
        let long_version = command.get_long_version().unwrap();

        assert!(long_version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(long_version.contains("AWSElasticBeanstalk API version 2010-12-01"));
        assert!(long_version.contains("'elasticbeanstalk'"));
        assert_eq!(command.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}

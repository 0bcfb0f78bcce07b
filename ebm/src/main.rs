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

mod cli;
mod cli_commands;
mod cli_error;
mod config;
mod ebm_config;
mod graceful_exit;

use cli::Commands;
use cli_commands::CliCommands;
use config::handle_config;
use ebm_config::{DEFAULT_EBM_CONFIG_FILE_PATH, EbmConfig};
use graceful_exit::ExitGracefully;

fn main() {
    let args = cli::parse();

    // The logger level depends on the config file, so it is set up after
    // loading and before reporting a broken config.
    let loaded_config = handle_config::<EbmConfig>(&args.config_path, &DEFAULT_EBM_CONFIG_FILE_PATH);
    let verbose = args.verbose
        || loaded_config
            .as_ref()
            .is_ok_and(|ebm_config| ebm_config.verbose);
    let default_filter = if verbose { "debug" } else { "error" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    let mut ebm_config = loaded_config.unwrap_or_exit("Config file could not be parsed");
    ebm_config.update_with_args(&args);
    log::debug!("Using config {ebm_config:?}");

    let cmd = CliCommands::init(&ebm_config);
    let output = match args.command {
        Commands::Operations => Ok(cmd.list_operations()),
        Commands::Schema {
            operation,
            output_type,
        } => cmd.get_schema(operation, output_type),
        Commands::Validate { operation, file } => {
            log::info!("Validating '{}' as input of '{operation}'", file.display());
            cmd.validate_document(operation, &file)
        }
        Commands::Render {
            operation,
            file,
            output_format,
        } => cmd.render_document(operation, &file, output_format),
        Commands::Error { code, message } => Ok(cmd.classify_error(&code, message)),
    };

    println!("{}", output.unwrap_or_exit("Command failed"));
}

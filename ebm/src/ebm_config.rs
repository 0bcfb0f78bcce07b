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

use crate::cli::{EbmCli, OutputFormat};
use crate::config::{CONFIG_VERSION, ConfigFile, ConversionErrors};
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::PathBuf;

#[cfg(not(test))]
use once_cell::sync::Lazy;
#[cfg(not(test))]
use std::env;

// Without HOME the default path is empty and never exists.
#[cfg(not(test))]
pub static DEFAULT_EBM_CONFIG_FILE_PATH: Lazy<String> = Lazy::new(|| {
    env::var("HOME")
        .map(|home_dir| format!("{home_dir}/.config/ebm/ebm.conf"))
        .unwrap_or_default()
});

#[cfg(test)]
pub const DEFAULT_EBM_CONFIG_FILE_PATH: &str = "/tmp/ebm/ebm.conf";

fn get_default_version() -> String {
    CONFIG_VERSION.to_string()
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EbmConfig {
    #[serde(default = "get_default_version")]
    pub version: String,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for EbmConfig {
    fn default() -> Self {
        EbmConfig {
            version: get_default_version(),
            output_format: OutputFormat::default(),
            verbose: bool::default(),
        }
    }
}

impl ConfigFile for EbmConfig {
    fn from_file(file_path: PathBuf) -> Result<EbmConfig, ConversionErrors> {
        let ebm_config_content = read_to_string(&file_path).map_err(|err| {
            ConversionErrors::InvalidConfig(format!("'{}': {err}", file_path.display()))
        })?;
        let ebm_config: EbmConfig = toml::from_str(&ebm_config_content)
            .map_err(|err| ConversionErrors::InvalidConfig(err.to_string()))?;

        if ebm_config.version != CONFIG_VERSION {
            return Err(ConversionErrors::WrongVersion(ebm_config.version));
        }

        Ok(ebm_config)
    }
}

impl EbmConfig {
    pub fn update_with_args(&mut self, args: &EbmCli) {
        if args.verbose {
            self.verbose = true;
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

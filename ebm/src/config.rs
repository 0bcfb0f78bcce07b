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

use std::fmt;
use std::path::PathBuf;

pub const CONFIG_VERSION: &str = "v1";

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ConversionErrors {
    WrongVersion(String),
    InvalidConfig(String),
}

pub trait ConfigFile: Default + Sized {
    fn from_file(file_path: PathBuf) -> Result<Self, ConversionErrors>;
}

impl fmt::Display for ConversionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionErrors::WrongVersion(msg) => write!(f, "Wrong version: {msg}"),
            ConversionErrors::InvalidConfig(msg) => {
                write!(f, "Config file could not have been parsed due to: {msg}")
            }
        }
    }
}

/// Loads the config from the user provided path, or from the default path if
/// a file exists there. Falls back to the defaults otherwise.
pub fn handle_config<T: ConfigFile>(
    config_path: &Option<String>,
    default_path: &str,
) -> Result<T, ConversionErrors> {
    match config_path {
        Some(config_path) => T::from_file(PathBuf::from(config_path)),
        None => {
            let default_path = PathBuf::from(default_path);
            if default_path.try_exists().unwrap_or(false) {
                T::from_file(default_path)
            } else {
                Ok(T::default())
            }
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
mod tests {
    use super::{ConfigFile, ConversionErrors, handle_config};
    use serde::Deserialize;
    use std::fs::read_to_string;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct TestConfig {
        name: String,
    }

    impl ConfigFile for TestConfig {
        fn from_file(file_path: PathBuf) -> Result<Self, ConversionErrors> {
            let content = read_to_string(file_path)
                .map_err(|err| ConversionErrors::InvalidConfig(err.to_string()))?;
            toml::from_str(&content).map_err(|err| ConversionErrors::InvalidConfig(err.to_string()))
        }
    }

    #[test]
    fn utest_conversion_errors_display() {
        assert_eq!(
            ConversionErrors::WrongVersion("v0".to_string()).to_string(),
            "Wrong version: v0"
        );
        assert_eq!(
            ConversionErrors::InvalidConfig("parse error".to_string()).to_string(),
            "Config file could not have been parsed due to: parse error"
        );
    }

    #[test]
    fn utest_handle_config_user_path() {
        let mut tmp_config_file = NamedTempFile::new().unwrap();
        write!(tmp_config_file, "name = 'from file'").unwrap();
        let config_path = Some(tmp_config_file.path().to_string_lossy().to_string());

        let config: TestConfig = handle_config(&config_path, "/does/not/exist.conf").unwrap();

        assert_eq!(config.name, "from file");
    }

    #[test]
    fn utest_handle_config_missing_user_path_fails() {
        let config_path = Some("/does/not/exist.conf".to_string());

        let result = handle_config::<TestConfig>(&config_path, "/does/not/exist.conf");

        assert!(matches!(result, Err(ConversionErrors::InvalidConfig(_))));
    }

    #[test]
    fn utest_handle_config_default_path() {
        let mut tmp_config_file = NamedTempFile::new().unwrap();
        write!(tmp_config_file, "name = 'default file'").unwrap();
        let default_path = tmp_config_file.path().to_string_lossy().to_string();

        let config: TestConfig = handle_config(&None, &default_path).unwrap();

        assert_eq!(config.name, "default file");
    }

    #[test]
    fn utest_handle_config_falls_back_to_default() {
        let config: TestConfig = handle_config(&None, "/does/not/exist.conf").unwrap();

        assert_eq!(config, TestConfig::default());
    }
}

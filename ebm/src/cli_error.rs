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

use beanstalk_model::ModelError;

#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    ReadDocument(String),
    YamlSerialization(String),
    JsonSerialization(String),
    Validation(ModelError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::ReadDocument(message) => {
                write!(f, "Could not read document: {message}")
            }
            CliError::YamlSerialization(message) => {
                write!(f, "Could not process YAML document: '{message}'")
            }
            CliError::JsonSerialization(message) => {
                write!(f, "Could not process JSON document: '{message}'")
            }
            CliError::Validation(error) => {
                write!(f, "Validation failed: {error}")
            }
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(value: serde_yaml::Error) -> Self {
        CliError::YamlSerialization(format!("{value}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        CliError::JsonSerialization(format!("{value}"))
    }
}

impl From<ModelError> for CliError {
    fn from(value: ModelError) -> Self {
        CliError::Validation(value)
    }
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

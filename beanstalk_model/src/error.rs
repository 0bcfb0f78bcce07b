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

/// Failure of an enumeration lookup or of a constraint check on a model object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidEnumValue {
        type_name: String,
        value: String,
    },
    MissingField {
        field: String,
    },
    LengthOutOfBounds {
        field: String,
        length: usize,
        min: Option<usize>,
        max: Option<usize>,
    },
    ValueOutOfRange {
        field: String,
        value: i64,
        min: Option<i64>,
        max: Option<i64>,
    },
    PatternMismatch {
        field: String,
        pattern: String,
    },
}

impl ModelError {
    /// Path of the offending field, e.g. `CreateEnvironmentRequest.Tags[1].Key`.
    pub fn field(&self) -> Option<&str> {
        match self {
            ModelError::InvalidEnumValue { .. } => None,
            ModelError::MissingField { field }
            | ModelError::LengthOutOfBounds { field, .. }
            | ModelError::ValueOutOfRange { field, .. }
            | ModelError::PatternMismatch { field, .. } => Some(field),
        }
    }
}

fn describe_bounds<T: fmt::Display>(min: &Option<T>, max: &Option<T>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("between {min} and {max}"),
        (Some(min), None) => format!("at least {min}"),
        (None, Some(max)) => format!("at most {max}"),
        (None, None) => "any".to_string(),
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ModelError::InvalidEnumValue { type_name, value } if value.is_empty() => {
                write!(f, "Value cannot be empty for enumeration '{type_name}'")
            }
            ModelError::InvalidEnumValue { type_name, value } => {
                write!(f, "Cannot create enumeration '{type_name}' from value '{value}'")
            }
            ModelError::MissingField { field } => {
                write!(f, "Missing mandatory field '{field}'")
            }
            ModelError::LengthOutOfBounds {
                field,
                length,
                min,
                max,
            } => write!(
                f,
                "Field '{field}' has length {length}, expected {}",
                describe_bounds(min, max)
            ),
            ModelError::ValueOutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "Field '{field}' has value {value}, expected {}",
                describe_bounds(min, max)
            ),
            ModelError::PatternMismatch { field, pattern } => {
                write!(f, "Field '{field}' does not match the pattern '{pattern}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelError;

    #[test]
    fn utest_model_error_display_invalid_enum_value() {
        let empty = ModelError::InvalidEnumValue {
            type_name: "ApplicationVersionStatus".into(),
            value: String::new(),
        };
        assert_eq!(
            empty.to_string(),
            "Value cannot be empty for enumeration 'ApplicationVersionStatus'"
        );

        let unknown = ModelError::InvalidEnumValue {
            type_name: "ApplicationVersionStatus".into(),
            value: "Bogus".into(),
        };
        assert_eq!(
            unknown.to_string(),
            "Cannot create enumeration 'ApplicationVersionStatus' from value 'Bogus'"
        );
        assert_eq!(unknown.field(), None);
    }

    #[test]
    fn utest_model_error_display_bounds() {
        let length = ModelError::LengthOutOfBounds {
            field: "CreateEnvironmentRequest.EnvironmentName".into(),
            length: 2,
            min: Some(4),
            max: Some(40),
        };
        assert_eq!(
            length.to_string(),
            "Field 'CreateEnvironmentRequest.EnvironmentName' has length 2, expected between 4 and 40"
        );
        assert_eq!(
            length.field(),
            Some("CreateEnvironmentRequest.EnvironmentName")
        );

        let range = ModelError::ValueOutOfRange {
            field: "DescribeEventsRequest.MaxRecords".into(),
            value: 0,
            min: Some(1),
            max: None,
        };
        assert_eq!(
            range.to_string(),
            "Field 'DescribeEventsRequest.MaxRecords' has value 0, expected at least 1"
        );
    }
}

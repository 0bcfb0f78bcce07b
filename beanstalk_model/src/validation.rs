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

//! Constraint checks used by the generated `validate_at` implementations.

use crate::ModelError;
use once_cell::sync::OnceCell;
use regex::Regex;

pub fn field_path(path: &str, name: &str) -> String {
    format!("{path}.{name}")
}

/// Size of a value as counted by `length` constraints.
pub trait Measured {
    fn measure(&self) -> usize;
}

impl Measured for String {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl<T> Measured for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

pub fn check_length<T: Measured + ?Sized>(
    field: &str,
    value: &T,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), ModelError> {
    let length = value.measure();
    if min.is_some_and(|min| length < min) || max.is_some_and(|max| length > max) {
        return Err(ModelError::LengthOutOfBounds {
            field: field.to_string(),
            length,
            min,
            max,
        });
    }
    Ok(())
}

pub fn check_range(
    field: &str,
    value: i64,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<(), ModelError> {
    if min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max) {
        return Err(ModelError::ValueOutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// A `pattern` constraint whose regex is compiled on first use and then
/// shared by every later check of the same field.
pub struct Pattern {
    source: &'static str,
    regex: OnceCell<Option<Regex>>,
}

impl Pattern {
    pub const fn new(source: &'static str) -> Self {
        Pattern {
            source,
            regex: OnceCell::new(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.source
    }

    fn compiled(&self, field: &str) -> Option<&Regex> {
        self.regex
            .get_or_init(|| match Regex::new(self.source) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    log::warn!("Cannot compile the pattern of '{field}': {err}");
                    None
                }
            })
            .as_ref()
    }
}

// An invalid pattern never matches.
pub fn check_pattern(field: &str, value: &str, pattern: &Pattern) -> Result<(), ModelError> {
    if pattern
        .compiled(field)
        .is_some_and(|regex| regex.is_match(value))
    {
        Ok(())
    } else {
        Err(ModelError::PatternMismatch {
            field: field.to_string(),
            pattern: pattern.as_str().to_string(),
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
    use super::{Pattern, check_length, check_pattern, check_range, field_path};
    use crate::ModelError;

    const FIELD: &str = "CreateEnvironmentRequest.EnvironmentName";

    #[test]
    fn utest_field_path() {
        assert_eq!(
            field_path("CreateEnvironmentRequest", "Tier"),
            "CreateEnvironmentRequest.Tier"
        );
    }

    #[test]
    fn utest_check_length_counts_characters() {
        assert!(check_length(FIELD, &"äöüß".to_string(), Some(4), Some(4)).is_ok());
        assert!(check_length(FIELD, &"my-env".to_string(), Some(4), Some(40)).is_ok());
        assert!(check_length(FIELD, &"x".repeat(40), None, Some(40)).is_ok());

        assert_eq!(
            check_length(FIELD, &"env".to_string(), Some(4), Some(40)),
            Err(ModelError::LengthOutOfBounds {
                field: FIELD.into(),
                length: 3,
                min: Some(4),
                max: Some(40),
            })
        );
        assert!(check_length(FIELD, &"x".repeat(41), None, Some(40)).is_err());
    }

    #[test]
    fn utest_check_length_counts_list_items() {
        let items = vec![1, 2, 3];
        assert!(check_length("Request.Items", &items, Some(1), Some(3)).is_ok());
        assert!(check_length("Request.Items", &Vec::<i32>::new(), Some(1), None).is_err());
    }

    #[test]
    fn utest_check_range() {
        assert!(check_range("Request.MaxRecords", 1, Some(1), Some(1000)).is_ok());
        assert!(check_range("Request.MaxRecords", 1000, Some(1), Some(1000)).is_ok());
        assert!(check_range("Request.MaxRecords", 0, Some(1), Some(1000)).is_err());
        assert!(check_range("Request.MaxRecords", 1001, None, Some(1000)).is_err());
    }

    #[test]
    fn utest_check_pattern() {
        static ENVIRONMENT_NAME: Pattern =
            Pattern::new("^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?$");
        assert!(check_pattern(FIELD, "my-env-1", &ENVIRONMENT_NAME).is_ok());
        assert_eq!(
            check_pattern(FIELD, "-my-env", &ENVIRONMENT_NAME),
            Err(ModelError::PatternMismatch {
                field: FIELD.into(),
                pattern: ENVIRONMENT_NAME.as_str().into(),
            })
        );
        assert!(check_pattern(FIELD, "my-env-", &ENVIRONMENT_NAME).is_err());
    }

    #[test]
    fn utest_check_pattern_compiles_regex_once() {
        static CNAME_PREFIX: Pattern = Pattern::new("^[a-z0-9-]+$");
        assert!(CNAME_PREFIX.regex.get().is_none());

        assert!(check_pattern(FIELD, "my-prefix", &CNAME_PREFIX).is_ok());
        let first = CNAME_PREFIX.compiled(FIELD).unwrap() as *const _;
        assert!(check_pattern(FIELD, "My_Prefix", &CNAME_PREFIX).is_err());
        let second = CNAME_PREFIX.compiled(FIELD).unwrap() as *const _;

        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn utest_check_pattern_invalid_pattern_never_matches() {
        static UNCLOSED: Pattern = Pattern::new("(unclosed");
        assert!(check_pattern(FIELD, "anything", &UNCLOSED).is_err());
        assert!(check_pattern(FIELD, "(unclosed", &UNCLOSED).is_err());
        assert!(matches!(UNCLOSED.regex.get(), Some(None)));
    }
}

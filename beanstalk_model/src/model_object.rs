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

use crate::{ModelError, Timestamp};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use std::fmt;

const HASH_SEED: i32 = 1;
const HASH_MULTIPLIER: i32 = 31;
const TRUE_HASH: i32 = 1231;
const FALSE_HASH: i32 = 1237;
const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// A value that can be held by a model object field.
pub trait ModelField {
    /// Writes the value the way it appears in a model object rendering.
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Deterministic 32 bit hash, stable across processes and platforms.
    fn hash_code(&self) -> i32;

    /// Checks the declared constraints, reporting violations under `path`.
    fn validate_at(&self, _path: &str) -> Result<(), ModelError> {
        Ok(())
    }
}

/// Common contract of all generated request, result and nested objects.
pub trait ModelObject:
    ModelField
    + fmt::Display
    + fmt::Debug
    + Clone
    + Default
    + PartialEq
    + Serialize
    + DeserializeOwned
    + JsonSchema
    + Send
    + Sync
    + 'static
{
    /// Name of the type in the service API.
    const TYPE_NAME: &'static str;
    type Builder: Default;

    fn builder() -> Self::Builder;

    fn validate(&self) -> Result<(), ModelError> {
        self.validate_at(Self::TYPE_NAME)
    }
}

/// Hash of a text value over its UTF-16 code units.
pub fn string_hash_code(value: &str) -> i32 {
    value.encode_utf16().fold(0, |hash: i32, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
    })
}

/// Adds one field to a running hash, unset fields count as zero.
pub fn combine_hash<T: ModelField>(hash: i32, value: &Option<T>) -> i32 {
    hash.wrapping_mul(HASH_MULTIPLIER)
        .wrapping_add(value.as_ref().map_or(0, ModelField::hash_code))
}

fn fold_hash(value: u64) -> i32 {
    (value ^ (value >> 32)) as i32
}

/// Runs the constraint checks of a freshly built object.
pub fn validated<T: ModelObject>(value: T) -> Result<T, ModelError> {
    match value.validate() {
        Ok(()) => Ok(value),
        Err(err) => {
            log::debug!("Rejected '{}': {err}", T::TYPE_NAME);
            Err(err)
        }
    }
}

/// Writes `{Name: value,Name: value}` skipping unset fields.
pub struct FieldRenderer<'a, 'b> {
    formatter: &'a mut fmt::Formatter<'b>,
    has_fields: bool,
}

impl<'a, 'b> FieldRenderer<'a, 'b> {
    pub fn new(formatter: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        formatter.write_str("{")?;
        Ok(FieldRenderer {
            formatter,
            has_fields: false,
        })
    }

    pub fn field<T: ModelField>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if self.has_fields {
            self.formatter.write_str(",")?;
        }
        self.has_fields = true;
        write!(self.formatter, "{name}: ")?;
        value.fmt_field(self.formatter)
    }

    pub fn finish(self) -> fmt::Result {
        self.formatter.write_str("}")
    }
}

impl ModelField for String {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn hash_code(&self) -> i32 {
        string_hash_code(self)
    }
}

impl ModelField for bool {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn hash_code(&self) -> i32 {
        if *self { TRUE_HASH } else { FALSE_HASH }
    }
}

impl ModelField for i32 {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn hash_code(&self) -> i32 {
        *self
    }
}

impl ModelField for i64 {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn hash_code(&self) -> i32 {
        fold_hash(*self as u64)
    }
}

impl ModelField for f64 {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }

    fn hash_code(&self) -> i32 {
        // -0.0 == 0.0, so both have to hash alike
        let bits = if self.is_nan() {
            CANONICAL_NAN_BITS
        } else if *self == 0.0 {
            0
        } else {
            self.to_bits()
        };
        fold_hash(bits)
    }
}

impl ModelField for Timestamp {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }

    fn hash_code(&self) -> i32 {
        self.timestamp_millis().hash_code()
    }
}

impl<T: ModelField> ModelField for Vec<T> {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.fmt_field(f)?;
        }
        f.write_str("]")
    }

    fn hash_code(&self) -> i32 {
        self.iter().fold(HASH_SEED, |hash, item| {
            hash.wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(item.hash_code())
        })
    }

    fn validate_at(&self, path: &str) -> Result<(), ModelError> {
        self.iter()
            .enumerate()
            .try_for_each(|(index, item)| item.validate_at(&format!("{path}[{index}]")))
    }
}

impl<K: ModelField, V: ModelField> ModelField for BTreeMap<K, V> {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            key.fmt_field(f)?;
            f.write_str("=")?;
            value.fmt_field(f)?;
        }
        f.write_str("}")
    }

    fn hash_code(&self) -> i32 {
        self.iter().fold(0, |hash: i32, (key, value)| {
            hash.wrapping_add(key.hash_code() ^ value.hash_code())
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
    use super::{ModelField, combine_hash, string_hash_code};
    use crate::Timestamp;
    use chrono::TimeZone;
    use std::collections::BTreeMap;
    use std::fmt;

    struct Rendered<'a, T>(&'a T);

    impl<T: ModelField> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_field(f)
        }
    }

    fn render<T: ModelField>(value: &T) -> String {
        Rendered(value).to_string()
    }

    #[test]
    fn utest_string_hash_code_matches_utf16_polynomial() {
        assert_eq!(string_hash_code(""), 0);
        assert_eq!(string_hash_code("a"), 97);
        assert_eq!(string_hash_code("hello"), 99162322);
        assert_eq!("i-1234".to_string().hash_code(), string_hash_code("i-1234"));
    }

    #[test]
    fn utest_scalar_hash_codes() {
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!((1i64 << 32).hash_code(), 1);
        assert_eq!((-1i64).hash_code(), 0);
        assert_eq!(1.0f64.hash_code(), 1072693248);
        assert_eq!(0.0f64.hash_code(), (-0.0f64).hash_code());
        assert_eq!(f64::NAN.hash_code(), (-f64::NAN).hash_code());
    }

    #[test]
    fn utest_list_hash_code_and_rendering() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(list.hash_code(), 4066);
        assert_eq!(render(&list), "[a, b]");
        assert_eq!(Vec::<String>::new().hash_code(), 1);
        assert_eq!(render(&Vec::<String>::new()), "[]");
    }

    #[test]
    fn utest_map_hash_code_and_rendering() {
        let map = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        assert_eq!(render(&map), "{a=1, b=2}");
        assert_eq!(map.hash_code(), (97 ^ 49) + (98 ^ 50));
    }

    #[test]
    fn utest_timestamp_rendering_and_hash() {
        let timestamp: Timestamp = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(render(&timestamp), "2024-05-01T12:00:00+00:00");
        assert_eq!(
            timestamp.hash_code(),
            timestamp.timestamp_millis().hash_code()
        );
    }

    #[test]
    fn utest_scalar_rendering() {
        assert_eq!(render(&true), "true");
        assert_eq!(render(&7i32), "7");
        assert_eq!(render(&-3i64), "-3");
        assert_eq!(render(&1.0f64), "1.0");
        assert_eq!(render(&0.25f64), "0.25");
    }

    #[test]
    fn utest_combine_hash_treats_unset_as_zero() {
        assert_eq!(combine_hash::<String>(1, &None), 31);
        assert_eq!(combine_hash(1, &Some("a".to_string())), 31 + 97);
        assert_eq!(combine_hash(i32::MAX, &Some(1)), i32::MAX.wrapping_mul(31) + 1);
    }
}

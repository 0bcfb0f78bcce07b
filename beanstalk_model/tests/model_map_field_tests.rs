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


#[cfg(test)]
mod tests {
    use beanstalk_model::{ModelField, ModelObject, model_object};
    use std::collections::BTreeMap;

    #[model_object]
    struct EnvironmentSettings {
        settings: Option<BTreeMap<String, String>>,
    }

    #[test]
    fn itest_insert_creates_map_on_first_entry() {
        let builder = EnvironmentSettings::builder();
        assert_eq!(builder.settings(), None);

        let value = builder
            .insert_settings("a", "1")
            .insert_settings("b", "2")
            .build()
            .unwrap();

        let expected = BTreeMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);
        assert_eq!(value.settings(), Some(&expected));
    }

    #[test]
    fn itest_insert_replaces_existing_key() {
        let value = EnvironmentSettings::builder()
            .insert_settings("a", "1")
            .insert_settings("a", "3")
            .build()
            .unwrap();

        assert_eq!(value.settings().map(BTreeMap::len), Some(1));
        assert_eq!(value.to_string(), "{Settings: {a=3}}");
    }

    #[test]
    fn itest_map_field_rendering_and_hash() {
        let first = EnvironmentSettings::builder()
            .insert_settings("a", "1")
            .insert_settings("b", "2")
            .build()
            .unwrap();
        let second = EnvironmentSettings::builder()
            .insert_settings("b", "2")
            .insert_settings("a", "1")
            .build()
            .unwrap();

        assert_eq!(first.to_string(), "{Settings: {a=1, b=2}}");
        assert_eq!(first, second);
        assert_eq!(first.hash_code(), second.hash_code());
        assert_eq!(EnvironmentSettings::TYPE_NAME, "EnvironmentSettings");
        assert_eq!(EnvironmentSettings::default().to_string(), "{}");
    }
}

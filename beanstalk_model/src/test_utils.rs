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

use crate::Timestamp;
use crate::model::{
    ConfigurationOptionSetting, CreateEnvironmentRequest, EnvironmentDescription,
    EnvironmentHealth, EnvironmentStatus, EnvironmentTier, EventDescription, EventSeverity, Tag,
};

pub const APPLICATION_NAME: &str = "my-app";
pub const ENVIRONMENT_NAME: &str = "my-env";
pub const ENVIRONMENT_ID: &str = "e-abcdef1234";
pub const VERSION_LABEL: &str = "v1";
pub const SOLUTION_STACK_NAME: &str = "64bit Amazon Linux 2023 v4.0.0 running Python 3.11";
const TEST_TIMESTAMP_MILLIS: i64 = 1_735_689_600_000;

pub fn generate_test_timestamp() -> Timestamp {
    Timestamp::from_timestamp_millis(TEST_TIMESTAMP_MILLIS).expect("valid test timestamp")
}

pub fn generate_test_tag(key: &str, value: &str) -> Tag {
    Tag::builder()
        .with_key(key)
        .with_value(value)
        .build()
        .expect("valid test tag")
}

pub fn generate_test_option_setting(
    namespace: &str,
    option_name: &str,
    value: &str,
) -> ConfigurationOptionSetting {
    ConfigurationOptionSetting::builder()
        .with_namespace(namespace)
        .with_option_name(option_name)
        .with_value(value)
        .build()
        .expect("valid test option setting")
}

pub fn generate_test_web_server_tier() -> EnvironmentTier {
    EnvironmentTier::builder()
        .with_name("WebServer")
        .with_type("Standard")
        .with_version("1.0")
        .build()
        .expect("valid test tier")
}

pub fn generate_test_create_environment_request() -> CreateEnvironmentRequest {
    CreateEnvironmentRequest::builder()
        .with_application_name(APPLICATION_NAME)
        .with_environment_name(ENVIRONMENT_NAME)
        .with_version_label(VERSION_LABEL)
        .with_solution_stack_name(SOLUTION_STACK_NAME)
        .with_tier(generate_test_web_server_tier())
        .with_tags(vec![generate_test_tag("team", "platform")])
        .with_option_settings(vec![generate_test_option_setting(
            "aws:autoscaling:asg",
            "MinSize",
            "1",
        )])
        .build()
        .expect("valid test request")
}

pub fn generate_test_environment_description() -> EnvironmentDescription {
    EnvironmentDescription::builder()
        .with_environment_name(ENVIRONMENT_NAME)
        .with_environment_id(ENVIRONMENT_ID)
        .with_application_name(APPLICATION_NAME)
        .with_version_label(VERSION_LABEL)
        .with_solution_stack_name(SOLUTION_STACK_NAME)
        .with_date_created(generate_test_timestamp())
        .with_status(EnvironmentStatus::Ready)
        .with_health(EnvironmentHealth::Green)
        .with_tier(generate_test_web_server_tier())
        .build()
        .expect("valid test environment")
}

pub fn generate_test_event(severity: EventSeverity, message: &str) -> EventDescription {
    EventDescription::builder()
        .with_event_date(generate_test_timestamp())
        .with_application_name(APPLICATION_NAME)
        .with_environment_name(ENVIRONMENT_NAME)
        .with_severity(severity)
        .with_message(message)
        .build()
        .expect("valid test event")
}

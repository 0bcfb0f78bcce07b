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

use super::{EnvironmentHealth, EnvironmentHealthAttribute, InstancesHealthAttribute};
use crate::Timestamp;
use model_macros::model_object;

/// Application request metrics for an environment or an instance.
#[model_object]
pub struct ApplicationMetrics {
    /// The amount of time that the metrics cover (usually 10 seconds).
    duration: Option<i32>,
    /// Average number of requests handled by the web server per second over
    /// the last 10 seconds.
    request_count: Option<i32>,
    status_codes: Option<StatusCodes>,
    latency: Option<Latency>,
}

/// The percentage of requests over the last 10 seconds that resulted in each
/// type of status code response.
#[model_object]
pub struct StatusCodes {
    status_2xx: Option<i32>,
    status_3xx: Option<i32>,
    status_4xx: Option<i32>,
    status_5xx: Option<i32>,
}

/// The average latency for the slowest X percent of requests over the last
/// 10 seconds.
#[model_object]
pub struct Latency {
    p999: Option<f64>,
    p99: Option<f64>,
    p95: Option<f64>,
    p90: Option<f64>,
    p85: Option<f64>,
    p75: Option<f64>,
    p50: Option<f64>,
    p10: Option<f64>,
}

/// Number of instances in each health state.
#[model_object]
pub struct InstanceHealthSummary {
    no_data: Option<i32>,
    unknown: Option<i32>,
    pending: Option<i32>,
    ok: Option<i32>,
    info: Option<i32>,
    warning: Option<i32>,
    degraded: Option<i32>,
    severe: Option<i32>,
}

/// CPU utilization metrics for an instance.
#[model_object(name = "CPUUtilization")]
pub struct CpuUtilization {
    user: Option<f64>,
    nice: Option<f64>,
    system: Option<f64>,
    idle: Option<f64>,
    #[model(name = "IOWait")]
    io_wait: Option<f64>,
    #[model(name = "IRQ")]
    irq: Option<f64>,
    #[model(name = "SoftIRQ")]
    soft_irq: Option<f64>,
    privileged: Option<f64>,
}

#[model_object]
pub struct SystemStatus {
    #[model(name = "CPUUtilization")]
    cpu_utilization: Option<CpuUtilization>,
    /// Load average in the last 1-minute, 5-minute, and 15-minute periods.
    load_average: Option<Vec<f64>>,
}

/// Information about an application version deployment.
#[model_object]
pub struct Deployment {
    version_label: Option<String>,
    /// The ID of the deployment. This number increases by one each time that
    /// you deploy source code or change instance configuration settings.
    deployment_id: Option<i64>,
    /// The status of the deployment, `In Progress`, `Deployed` or `Failed`.
    status: Option<String>,
    deployment_time: Option<Timestamp>,
}

/// Detailed health information about an Amazon EC2 instance in your
/// environment.
#[model_object]
pub struct SingleInstanceHealth {
    instance_id: Option<String>,
    health_status: Option<String>,
    color: Option<String>,
    /// Represents the causes, which provide more information about the
    /// current health status.
    causes: Option<Vec<String>>,
    launched_at: Option<Timestamp>,
    application_metrics: Option<ApplicationMetrics>,
    system: Option<SystemStatus>,
    deployment: Option<Deployment>,
    availability_zone: Option<String>,
    instance_type: Option<String>,
}

/// Request to return the overall health of an environment.
#[model_object]
pub struct DescribeEnvironmentHealthRequest {
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    environment_id: Option<String>,
    /// Specify the response elements to return. If no attribute names are
    /// specified, only the health status is returned.
    attribute_names: Option<Vec<EnvironmentHealthAttribute>>,
}

#[model_object]
pub struct DescribeEnvironmentHealthResult {
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    health_status: Option<String>,
    status: Option<EnvironmentHealth>,
    color: Option<String>,
    causes: Option<Vec<String>>,
    application_metrics: Option<ApplicationMetrics>,
    instances_health: Option<InstanceHealthSummary>,
    /// The date and time that the health information was retrieved.
    refreshed_at: Option<Timestamp>,
}

/// Request to return detailed health information for the instances of an
/// environment.
#[model_object]
pub struct DescribeInstancesHealthRequest {
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    environment_id: Option<String>,
    attribute_names: Option<Vec<InstancesHealthAttribute>>,
    #[model(length(min = 1, max = 100))]
    next_token: Option<String>,
}

#[model_object]
pub struct DescribeInstancesHealthResult {
    instance_health_list: Option<Vec<SingleInstanceHealth>>,
    refreshed_at: Option<Timestamp>,
    #[model(length(min = 1, max = 100))]
    next_token: Option<String>,
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
    use super::{CpuUtilization, StatusCodes, SystemStatus};
    use crate::ModelField;

    #[test]
    fn utest_status_codes_field_names() {
        let status_codes = StatusCodes::builder()
            .with_status_2xx(97)
            .with_status_5xx(3)
            .build()
            .unwrap();

        assert_eq!(status_codes.to_string(), "{Status2xx: 97,Status5xx: 3}");
        assert_eq!(
            serde_json::to_value(&status_codes).unwrap(),
            serde_json::json!({"Status2xx": 97, "Status5xx": 3})
        );
    }

    #[test]
    fn utest_system_status_renders_nested_floats() {
        let system = SystemStatus::builder()
            .with_cpu_utilization(
                CpuUtilization::builder()
                    .with_user(12.5)
                    .with_io_wait(0.0)
                    .build()
                    .unwrap(),
            )
            .append_load_average([0.5, 0.25])
            .build()
            .unwrap();

        assert_eq!(
            system.to_string(),
            "{CPUUtilization: {User: 12.5,IOWait: 0.0},LoadAverage: [0.5, 0.25]}"
        );
    }

    #[test]
    fn utest_negative_zero_hashes_like_zero() {
        let positive = CpuUtilization::builder().with_idle(0.0).build().unwrap();
        let negative = CpuUtilization::builder().with_idle(-0.0).build().unwrap();

        assert_eq!(positive, negative);
        assert_eq!(positive.hash_code(), negative.hash_code());
    }
}

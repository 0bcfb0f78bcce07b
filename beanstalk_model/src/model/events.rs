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

use super::EventSeverity;
use crate::Timestamp;
use model_macros::model_object;

/// Describes an event.
#[model_object]
pub struct EventDescription {
    event_date: Option<Timestamp>,
    message: Option<String>,
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(min = 1, max = 100))]
    version_label: Option<String>,
    #[model(length(min = 1, max = 100))]
    template_name: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    platform_arn: Option<String>,
    /// The web service request ID for the activity of this event.
    request_id: Option<String>,
    severity: Option<EventSeverity>,
}

/// Request to retrieve a list of events for an environment.
#[model_object]
pub struct DescribeEventsRequest {
    #[model(length(min = 1, max = 100))]
    application_name: Option<String>,
    #[model(length(min = 1, max = 100))]
    version_label: Option<String>,
    #[model(length(min = 1, max = 100))]
    template_name: Option<String>,
    environment_id: Option<String>,
    #[model(length(min = 4, max = 40))]
    environment_name: Option<String>,
    platform_arn: Option<String>,
    request_id: Option<String>,
    /// If specified, limits the events returned from this call to include
    /// only those with the specified severity or higher.
    severity: Option<EventSeverity>,
    /// If specified, limits the events returned from this call to include
    /// only those that occur on or after this time.
    start_time: Option<Timestamp>,
    /// If specified, limits the events returned from this call to include
    /// only those that occur up to, but not including, the `EndTime`.
    end_time: Option<Timestamp>,
    #[model(range(min = 1, max = 1000))]
    max_records: Option<i32>,
    next_token: Option<String>,
}

#[model_object]
pub struct DescribeEventsResult {
    events: Option<Vec<EventDescription>>,
    /// If returned, this indicates that there are more results to obtain.
    next_token: Option<String>,
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

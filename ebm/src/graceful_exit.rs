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

pub trait ExitGracefully<T, E> {
    fn unwrap_or_exit_func<F>(self, op: F, exit_code: i32) -> T
    where
        F: FnOnce(E);

    fn unwrap_or_exit(self, message: &str) -> T;
}

impl<T, E: std::fmt::Display> ExitGracefully<T, E> for Result<T, E> {
    /// Returns the contained [`Ok`] value or runs `op` with the error and
    /// exits with `exit_code`.
    fn unwrap_or_exit_func<F>(self, op: F, exit_code: i32) -> T
    where
        F: FnOnce(E),
    {
        match self {
            Ok(value) => value,
            Err(error) => {
                op(error);
                std::process::exit(exit_code);
            }
        }
    }

    /// Returns the contained [`Ok`] value or logs the error and exits with
    /// code 1.
    fn unwrap_or_exit(self, message: &str) -> T {
        self.unwrap_or_exit_func(|error| log::error!("{message}: {error}"), 1)
    }
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

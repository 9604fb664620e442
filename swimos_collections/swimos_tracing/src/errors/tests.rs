// Copyright 2015-2024 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::*;

#[test]
fn logging_absent_errors_passes_through() {
    let none: Option<IndexedErrors<String>> = None;
    assert!(none.log_debug("failures in batch").is_none());
}

#[test]
fn logging_present_errors_passes_through() {
    let mut errors = IndexedErrors::new();
    errors.push(2, "bad record".to_string());

    let logged = Some(errors.clone()).log_warn("failures in batch");
    assert_eq!(logged, Some(errors.clone()));

    let logged = Some(errors.clone()).log_debug("failures in batch");
    assert_eq!(logged, Some(errors));
}

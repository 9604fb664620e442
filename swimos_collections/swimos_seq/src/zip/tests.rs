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

use swimos_algebra::Zero;

use super::*;

#[test]
fn zip_pairs_by_position() {
    let pairs = zip(&[1, 2, 3], &[4, 5, 6]).expect("lengths match");
    assert_eq!(
        pairs,
        vec![Pair::new(1, 4), Pair::new(2, 5), Pair::new(3, 6)]
    );
}

#[test]
fn zip_combines_distinct_element_types() {
    let pairs = zip(&[1, 2], &["one", "two"]).expect("lengths match");
    assert_eq!(pairs, vec![Pair::new(1, "one"), Pair::new(2, "two")]);
}

#[test]
fn zip_rejects_length_mismatch() {
    assert_eq!(
        zip(&[1, 2, 3, 4, 5], &[5, 4, 3, 2]),
        Err(SeqError::LengthMismatch { left: 5, right: 4 })
    );
}

#[test]
fn zip_rejects_one_sided_emptiness() {
    let empty: [i32; 0] = [];
    assert_eq!(
        zip(&empty, &[1]),
        Err(SeqError::LengthMismatch { left: 0, right: 1 })
    );
}

#[test]
fn zip_of_two_empty_sequences_succeeds() {
    let left: [i32; 0] = [];
    let right: [bool; 0] = [];
    assert_eq!(zip(&left, &right), Ok(Vec::new()));
}

#[test]
fn length_mismatch_display() {
    let message = SeqError::LengthMismatch { left: 5, right: 4 }.to_string();
    assert_eq!(message, "sequences must be of equal length (5 != 4)");
}

#[test]
fn not_found_display() {
    assert_eq!(SeqError::NotFound.to_string(), "no matching element was found");
}

#[test]
fn pair_zero_is_componentwise() {
    assert_eq!(Pair::<i32, String>::zero(), Pair::new(0, String::new()));
    assert!(Pair::new(0, String::new()).is_zero());
    assert!(!Pair::new(1, String::new()).is_zero());
    assert!(!Pair::new(0, "x".to_string()).is_zero());
}

#[test]
fn pair_from_tuple() {
    assert_eq!(Pair::from((1, 'a')), Pair::new(1, 'a'));
}

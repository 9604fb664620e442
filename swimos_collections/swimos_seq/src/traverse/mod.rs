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

use crate::SeqError;


/// The elements of `seq` satisfying `predicate`, preserving their relative order. An empty
/// input allocates nothing and never invokes the predicate.
pub fn filter<A, P>(seq: &[A], mut predicate: P) -> Vec<A>
where
    A: Clone,
    P: FnMut(&A) -> bool,
{
    if seq.is_empty() {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(seq.len());
    for a in seq {
        if predicate(a) {
            result.push(a.clone());
        }
    }
    result
}

/// Left fold of `seq`, starting from `init` and combining the accumulator with each element in
/// order. An empty input returns `init` unchanged.
pub fn reduce<A, B, F>(seq: &[A], init: B, mut f: F) -> B
where
    F: FnMut(B, &A) -> B,
{
    let mut acc = init;
    for a in seq {
        acc = f(acc, a);
    }
    acc
}

/// Whether any element of `seq` satisfies `predicate`. Stops at the first match; `false` for
/// an empty input.
pub fn contains<A, P>(seq: &[A], mut predicate: P) -> bool
where
    P: FnMut(&A) -> bool,
{
    seq.iter().any(|a| predicate(a))
}

/// Apply a fallible function to each element of `seq` in order, stopping at the first failure
/// and returning it.
///
/// Unlike [`apply`](crate::apply), elements after a failure are not attempted.
pub fn for_each<A, E, F>(seq: &[A], mut f: F) -> Result<(), E>
where
    F: FnMut(&A) -> Result<(), E>,
{
    for a in seq {
        f(a)?;
    }
    Ok(())
}

/// The elements of `seq` that are not the zero value of their type, preserving order.
pub fn compact<A>(seq: &[A]) -> Vec<A>
where
    A: Zero + Clone,
{
    filter(seq, |a| !a.is_zero())
}

/// The first element of `seq` satisfying `predicate`, or [`SeqError::NotFound`] if none does.
pub fn select_one<A, P>(seq: &[A], mut predicate: P) -> Result<A, SeqError>
where
    A: Clone,
    P: FnMut(&A) -> bool,
{
    for a in seq {
        if predicate(a) {
            return Ok(a.clone());
        }
    }
    Err(SeqError::NotFound)
}

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
use swimos_seq_errors::IndexedErrors;


/// Apply `f` to every element of `seq`, in order, collecting the results.
pub fn safe_map<A, B, F>(seq: &[A], mut f: F) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    seq.iter().map(|a| f(a)).collect()
}

/// Apply `f` to every element of `seq`, in order, purely for its side effect.
pub fn safe_apply<A, F>(seq: &[A], mut f: F)
where
    F: FnMut(&A),
{
    for a in seq {
        f(a);
    }
}

/// Apply a fallible transform to every element of `seq`, continuing through failures.
///
/// The output vector always has exactly `seq.len()` entries. Where `f` failed, the entry holds
/// the zero value of the output type and the failure is recorded against the element's index in
/// the returned collector; membership in the collector is how callers distinguish placeholder
/// entries from genuine results. The error slot is `None` exactly when every invocation
/// succeeded, so callers branch on its presence rather than inspecting an empty collector.
pub fn map<A, B, E, F>(seq: &[A], mut f: F) -> (Vec<B>, Option<IndexedErrors<E>>)
where
    B: Zero,
    F: FnMut(&A) -> Result<B, E>,
{
    let mut results = Vec::with_capacity(seq.len());
    let mut errors = IndexedErrors::new();
    for (index, a) in seq.iter().enumerate() {
        match f(a) {
            Ok(b) => results.push(b),
            Err(error) => {
                results.push(B::zero());
                errors.push(index, error);
            }
        }
    }
    if errors.has_errors() {
        (results, Some(errors))
    } else {
        (results, None)
    }
}

/// Apply a fallible function to every element of `seq`, continuing through failures and
/// discarding successful results.
///
/// Every element is attempted regardless of earlier failures; the failures are reported
/// together, keyed by element index. `None` is returned exactly when every invocation
/// succeeded. The short-circuiting counterpart is [`for_each`](crate::for_each).
pub fn apply<A, E, F>(seq: &[A], mut f: F) -> Option<IndexedErrors<E>>
where
    F: FnMut(&A) -> Result<(), E>,
{
    let mut errors = IndexedErrors::new();
    for (index, a) in seq.iter().enumerate() {
        if let Err(error) = f(a) {
            errors.push(index, error);
        }
    }
    if errors.has_errors() {
        Some(errors)
    } else {
        None
    }
}

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

//! # SwimOS Sequence Operations
//!
//! Eager, higher-order operations over in-memory sequences. This crate contains:
//!
//! - Error-aggregating transforms ([`map`], [`apply`]) that attempt every element and report
//!   the failures together, keyed by element position.
//! - Short-circuiting traversals ([`for_each`], [`contains`], [`select_one`]).
//! - Structural operations ([`filter`], [`reduce`], [`zip`], [`compact`]).
//!
//! Every operation is synchronous, borrows its input without mutating it and allocates fresh
//! output owned by the caller.

use thiserror::Error;

mod transform;
mod traverse;
mod zip;

pub use swimos_seq_errors::IndexedErrors;
pub use transform::{apply, map, safe_apply, safe_map};
pub use traverse::{compact, contains, filter, for_each, reduce, select_one};
pub use zip::{zip, Pair};

/// Errors produced by sequence operations that terminate at the first failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// Two sequences that are required to be of equal length were not.
    #[error("sequences must be of equal length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },
    /// No element satisfied the predicate.
    #[error("no matching element was found")]
    NotFound,
}

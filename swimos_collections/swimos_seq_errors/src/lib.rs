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

//! # Error Accumulation
//!
//! A function that returns a [`Result`] may fail with a single error. In contrast, a traversal
//! that attempts every element of a sequence can produce any number of failures that do not
//! cause it to terminate. [`IndexedErrors`] collects those failures, keyed by the position of
//! the element that produced each of them, and is returned by value to the caller once the
//! traversal is complete.

mod accumulator;

pub use accumulator::IndexedErrors;

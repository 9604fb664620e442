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

//! # SwimOS Algebraic Traits
//!
//! This crate contains the [`Zero`] trait for types with a distinguished zero (default)
//! element and implementations for the standard types that have one. Types with no
//! well-defined zero simply do not implement the trait and are rejected by the compiler
//! wherever a zero element is required.

mod zero;

pub use zero::Zero;

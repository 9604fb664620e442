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

use core::fmt::Debug;

use swimos_seq_errors::IndexedErrors;
use tracing::{event, Level};

#[cfg(test)]
mod tests;

/// Provides extension methods for aggregated traversal failures that log them.
pub trait AggregateErrorsExt: Sized {
    /// Log the number of recorded failures, if there are any, at debug level, passing the
    /// value through unchanged.
    fn log_debug<M: tracing::Value + Debug>(self, message: M) -> Self;

    /// Log the number of recorded failures, if there are any, at warning level, passing the
    /// value through unchanged.
    fn log_warn<M: tracing::Value + Debug>(self, message: M) -> Self;
}

impl<E> AggregateErrorsExt for Option<IndexedErrors<E>> {
    fn log_debug<M: tracing::Value + Debug>(self, message: M) -> Self {
        if let Some(errors) = &self {
            event!(Level::DEBUG, errors = errors.len(), message);
        }
        self
    }

    fn log_warn<M: tracing::Value + Debug>(self, message: M) -> Self {
        if let Some(errors) = &self {
            event!(Level::WARN, errors = errors.len(), message);
        }
        self
    }
}

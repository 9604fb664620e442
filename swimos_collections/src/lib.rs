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

#[cfg(feature = "algebra")]
pub mod algebra {
    pub use swimos_algebra::*;
}

#[cfg(feature = "errors")]
pub use swimos_seq_errors as errors;

#[cfg(feature = "seq")]
pub use swimos_seq as seq;

#[cfg(feature = "tracing")]
pub use swimos_tracing as tracing;

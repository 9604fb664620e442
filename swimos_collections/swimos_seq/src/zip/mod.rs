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

#[cfg(test)]
mod tests;

/// An ordered pair of values, one from each of two sequences combined by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair { first, second }
    }
}

impl<A: Zero, B: Zero> Zero for Pair<A, B> {
    fn zero() -> Self {
        Pair {
            first: A::zero(),
            second: B::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.first.is_zero() && self.second.is_zero()
    }
}

/// Combine two sequences element-wise into a vector of [`Pair`]s.
///
/// Fails with [`SeqError::LengthMismatch`] when the inputs differ in length (including one
/// being empty and the other not); no pairs are produced in that case.
pub fn zip<A, B>(left: &[A], right: &[B]) -> Result<Vec<Pair<A, B>>, SeqError>
where
    A: Clone,
    B: Clone,
{
    if left.len() != right.len() {
        return Err(SeqError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left
        .iter()
        .zip(right.iter())
        .map(|(a, b)| Pair::new(a.clone(), b.clone()))
        .collect())
}

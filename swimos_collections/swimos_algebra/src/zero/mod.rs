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

use std::collections::{BTreeMap, HashMap};


/// Trait for types with a distinguished zero element. Implementors are responsible for
/// ensuring that:
/// * `zero()` always produces the same value.
/// * `is_zero` holds exactly for values indistinguishable from `zero()`.
pub trait Zero: Sized {
    /// The zero element of the type.
    fn zero() -> Self;

    /// Whether this value is indistinguishable from [`Zero::zero`].
    fn is_zero(&self) -> bool;
}

macro_rules! number_zero {
    ($t:ty, $z:expr) => {
        impl Zero for $t {
            fn zero() -> Self {
                $z
            }

            fn is_zero(&self) -> bool {
                *self == $z
            }
        }
    };
}

number_zero!(i8, 0);
number_zero!(i16, 0);
number_zero!(i32, 0);
number_zero!(i64, 0);
number_zero!(u8, 0);
number_zero!(u16, 0);
number_zero!(u32, 0);
number_zero!(u64, 0);
number_zero!(usize, 0);
number_zero!(isize, 0);
number_zero!(f32, 0.0);
number_zero!(f64, 0.0);

impl Zero for bool {
    fn zero() -> Self {
        false
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Zero for char {
    fn zero() -> Self {
        '\0'
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Zero for () {
    fn zero() -> Self {}

    fn is_zero(&self) -> bool {
        true
    }
}

impl Zero for String {
    fn zero() -> Self {
        String::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<'a> Zero for &'a str {
    fn zero() -> Self {
        ""
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// Absence alone is the zero value; a present but empty payload is not.
impl<T> Zero for Option<T> {
    fn zero() -> Self {
        None
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> Zero for Vec<T> {
    fn zero() -> Self {
        vec![]
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Zero for HashMap<K, V> {
    fn zero() -> Self {
        HashMap::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Ord + Eq, V> Zero for BTreeMap<K, V> {
    fn zero() -> Self {
        BTreeMap::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

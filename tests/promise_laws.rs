//! Property-based law checks for Promise.
//!
//! Promises are observed through `block_on`, so both the resolved value and
//! the rejection reason take part in the comparison.

#![cfg(all(feature = "laws", feature = "promise"))]

use monadic::effect::{Promise, PromiseError, PromiseFamily};
use monadic::law_tests;

law_tests! {
    promise,
    family: PromiseFamily,
    input: proptest::prelude::any::<()>(),
    sample: |n: i32| {
        if n % 4 == 0 {
            Promise::rejected(PromiseError::rejected(format!("sample {n}")))
        } else {
            Promise::resolved(n)
        }
    },
    kleisli: |n: i32| {
        if n % 3 == 0 {
            Promise::rejected(PromiseError::rejected("step"))
        } else {
            Promise::resolved(n.wrapping_add(10))
        }
    },
}

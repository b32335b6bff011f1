/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! Test support for busbridge.
//!
//! The [`busbridge_test`](prelude::busbridge_test) attribute turns an `async fn`
//! into a regular `#[test]` that runs on its own multi-thread tokio runtime,
//! inside a tracing span named after the test.

/// Commonly used test items.
pub mod prelude {
    pub use busbridge_test_macro::busbridge_test;
}

/// Paths used by the code that `#[busbridge_test]` expands to.
///
/// Tests only need to depend on `busbridge_test`; the expansion reaches its
/// runtime dependencies through here.
#[doc(hidden)]
pub mod __private {
    use std::fmt::Debug;

    pub use tokio;
    pub use tracing;

    /// Turns the return value of a test body into a pass or a panic.
    pub trait TestOutcome {
        /// Panics if the value represents a failed test.
        fn check(self, test: &str);
    }

    impl TestOutcome for () {
        fn check(self, _test: &str) {}
    }

    impl<E: Debug> TestOutcome for Result<(), E> {
        fn check(self, test: &str) {
            if let Err(e) = self {
                tracing::error!(test, error = ?e, "test returned an error");
                panic!("{test} returned an error: {e:?}");
            }
        }
    }
}

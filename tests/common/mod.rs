#![allow(dead_code, unused_imports)]

pub use plandag_test_utils::{builders, init_tracing};

//! Fuzz target: JSON deserialization of `SampleBody`.
//!
//! Verifies that arbitrary byte sequences fed to the request-body
//! JSON parser never cause panics, UB, or unbounded resource
//! consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sample_gateway::routes::SampleBody;

fuzz_target!(|data: &[u8]| {
    // Treat arbitrary bytes as a JSON payload for SampleBody.
    // Errors are expected; panics are not.
    let _ = serde_json::from_slice::<SampleBody>(data);
});

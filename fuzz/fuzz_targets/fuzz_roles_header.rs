//! Fuzz target: parsing of the `x-roles` header value.
//!
//! Verifies that arbitrary strings fed to the roles-header parser
//! never cause panics or UB.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sample_gateway::guard::roles_from_header;

fuzz_target!(|data: &[u8]| {
    // Unknown role names are ignored; only panics would be a bug.
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = roles_from_header(raw);
    }
});

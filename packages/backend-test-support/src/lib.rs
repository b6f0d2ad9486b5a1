//! Test support shared by the backend's unit and integration tests.
//!
//! Kept free of backend types so assertions check the wire contract rather
//! than the crate's own structs.

pub mod logging;
pub mod problem_details;

//! High-level operations.
//!
//! This module contains the implementation of aklink commands.

pub mod aklink_doctor;
pub mod aklink_resolve;

pub use aklink_doctor::{doctor, format_report, CheckResult, DoctorReport};
pub use aklink_resolve::{
    resolve_linkage, resolve_options, resolve_with_probe, ResolveRequest, DEFAULT_SDK_DIR,
};

//! aklink - Linkage resolver for a prebuilt audio engine SDK
//!
//! This crate computes, for a target platform and build configuration, the
//! include directories, library directories, libraries, definitions and
//! engine module dependencies a host build needs to link the SDK.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod toolchain;
pub mod util;

/// Test utilities and mocks for aklink unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory SDK install.
#[cfg(test)]
pub mod test_support;

pub use core::{BuildConfiguration, LinkError, LinkagePlan, PlatformId};
pub use resolver::{resolve, ArtifactProbe, ResolveOptions};
pub use util::context::GlobalContext;

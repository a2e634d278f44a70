//! Core data structures for aklink.
//!
//! This module contains the foundational types used throughout aklink:
//! - Target platforms and build configurations
//! - The linkage plan handed back to the host build
//! - Engine module dependency declarations

pub mod configuration;
pub mod error;
pub mod modules;
pub mod plan;
pub mod platform;

pub use configuration::BuildConfiguration;
pub use error::LinkError;
pub use modules::{ModuleDeps, ModuleRules};
pub use plan::{AddonStatus, Define, LinkagePlan};
pub use platform::{ArtifactStyle, PlatformId};

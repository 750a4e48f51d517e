//! Runtime detection of OpenGL and OpenGL ES capabilities.
//!
//! A graphics driver may expose a given GPU capability through core GL of
//! some minimum version, through a GLES version, or through one of several
//! vendor/ARB/EXT extension spellings whose extension-string suffix and
//! function-name suffix don't always agree. This crate resolves every
//! capability in its catalog to a concrete set of function pointers at
//! context-creation time — or nulls the whole group out — so that consumers
//! can test availability with a single pointer check and never need to know
//! which path satisfied it.
//!
//! The only collaborator a windowing backend must supply is a
//! resolve-symbol-by-name primitive (see [`GlLoader`]), plus the raw facts
//! about the context: API flavor, reported version, and the reported
//! extension strings. This crate never calls into GL itself.

mod capability;
pub use crate::capability::{
    check_all_capabilities, check_capability, Capability, GlesAvailability, NEVER_IN_CORE_GL,
};

mod catalog;

pub mod error;
pub use crate::error::Error;

mod extensions;
pub use crate::extensions::ExtensionSet;

mod entry_points;
pub use crate::entry_points::{EntryPoint, EntryPointTable};

mod features;
pub use crate::features::{FeatureFlags, PrivateFeatureFlags};

mod info;
pub use crate::info::{GLApi, GLVersion};

mod loader;
pub use crate::loader::{GlLoader, SystemLoader};

mod device;
pub use crate::device::{DeviceCapabilities, DriverInfo};

mod driver;

#[cfg(test)]
mod tests;

// glcaps/src/capability.rs
//
//! Capability descriptors and the resolution pass.

use crate::catalog;
use crate::entry_points::{EntryPoint, EntryPointTable};
use crate::extensions::ExtensionSet;
use crate::info::{GLApi, GLVersion};
use crate::loader::GlLoader;

use log::{debug, warn};

bitflags::bitflags! {
    /// The GLES versions that include a capability in core.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GlesAvailability: u8 {
        /// Core in GLES 2.
        const GLES2 = 0x01;
        /// Core in GLES 3.
        const GLES3 = 0x02;
    }
}

/// The minimum-version sentinel meaning "never part of core desktop GL".
pub const NEVER_IN_CORE_GL: GLVersion = GLVersion::new(255, 255);

/// The prefix used to build GL extension name strings.
const GL_EXTENSION_PREFIX: &str = "GL";

/// Describes one group of related driver entry points that are available (or
/// unavailable) together.
///
/// A capability may be satisfied by core GL of some minimum version, by some
/// GLES version, or by one of several extension spellings; the descriptor
/// enumerates every spelling to try and the functions that must all resolve
/// for the capability to count as present.
#[derive(Clone, Copy, Debug)]
pub struct Capability {
    /// Name used in diagnostics and hard-requirement errors.
    pub name: &'static str,
    /// The minimum desktop GL version that has this group in core, or
    /// `NEVER_IN_CORE_GL`.
    pub min_gl: GLVersion,
    /// The GLES versions that have this group in core.
    pub gles: GlesAvailability,
    /// Extension namespace tags to try, in priority order. A tag may carry a
    /// separate function-name suffix after a `:` (so `"ARB:"` checks for
    /// `GL_ARB_*` extension strings but leaves function names unsuffixed).
    /// Empty when the group is not gated on any extension.
    pub namespaces: &'static [&'static str],
    /// Extension base names to try within each namespace, in priority order.
    pub extension_names: &'static [&'static str],
    /// Function base names and the slots their addresses land in.
    pub functions: &'static [(&'static str, EntryPoint)],
}

/// Resolves one capability against the active driver.
///
/// On success every slot in `capability.functions` holds a non-null address
/// and the return value is true. On failure, including the case where the
/// driver advertises a matching extension string but fails to resolve one of
/// the entry points, every slot is nulled so that callers can test
/// availability with a single pointer check.
pub fn check_capability(
    capability: &Capability,
    prefix: &str,
    api: GLApi,
    version: GLVersion,
    extensions: &ExtensionSet,
    loader: &dyn GlLoader,
    table: &mut EntryPointTable,
) -> bool {
    let gles_availability = if api == GLApi::GLES {
        // GLES 3 contexts satisfy GLES2-level requirements as well.
        let mut availability = GlesAvailability::GLES2;
        if version >= GLVersion::new(3, 0) {
            availability |= GlesAvailability::GLES3;
        }
        availability
    } else {
        GlesAvailability::empty()
    };

    // First check whether the functions are provided directly by core GL.
    let in_core = (api.is_desktop_gl() && version >= capability.min_gl)
        || capability.gles.intersects(gles_availability);

    let suffix = if in_core {
        Some("")
    } else {
        find_extension_suffix(capability, prefix, extensions)
    };

    let suffix = match suffix {
        Some(suffix) => suffix,
        None => {
            clear_entry_points(capability, table);
            return false;
        }
    };

    // Try to get all of the entry points. A single missing symbol fails the
    // whole group, even if the extension string was advertised.
    for &(function_name, slot) in capability.functions {
        let full_name = [function_name, suffix].concat();
        let address = loader.get_proc_address(&full_name, in_core);
        if address.is_null() {
            if !in_core {
                warn!(
                    "{}: driver advertises the extension but doesn't export {}",
                    capability.name, full_name
                );
            }
            clear_entry_points(capability, table);
            return false;
        }
        table.set(slot, address);
    }

    if in_core {
        debug!("{}: in core", capability.name);
    } else if suffix.is_empty() {
        debug!("{}: via extension", capability.name);
    } else {
        debug!("{}: via {} extension", capability.name, suffix);
    }
    true
}

/// Searches the descriptor's extension spellings in priority order and
/// returns the function-name suffix of the first one the driver reports.
fn find_extension_suffix(
    capability: &Capability,
    prefix: &str,
    extensions: &ExtensionSet,
) -> Option<&'static str> {
    for namespace in capability.namespaces {
        // A ':' in the namespace separates the extension tag from the suffix
        // used when building function names.
        let (tag, function_suffix) = match namespace.split_once(':') {
            Some((tag, function_suffix)) => (tag, function_suffix),
            None => (*namespace, *namespace),
        };
        for extension_name in capability.extension_names {
            let full_extension_name = format!("{prefix}_{tag}_{extension_name}");
            if extensions.contains(&full_extension_name) {
                return Some(function_suffix);
            }
        }
    }
    None
}

fn clear_entry_points(capability: &Capability, table: &mut EntryPointTable) {
    for &(_, slot) in capability.functions {
        table.clear(slot);
    }
}

/// Runs the resolution pass for every capability in the catalog.
///
/// Capabilities resolve independently; the pass is a pure function of the
/// driver facts and is run exactly once per context at setup time.
pub fn check_all_capabilities(
    api: GLApi,
    version: GLVersion,
    extensions: &ExtensionSet,
    loader: &dyn GlLoader,
    table: &mut EntryPointTable,
) {
    for capability in catalog::CAPABILITIES {
        check_capability(
            capability,
            GL_EXTENSION_PREFIX,
            api,
            version,
            extensions,
            loader,
            table,
        );
    }
}

// glcaps/src/device.rs
//
//! Whole-device capability detection.

use crate::capability::check_all_capabilities;
use crate::driver;
use crate::entry_points::EntryPointTable;
use crate::error::Error;
use crate::extensions::ExtensionSet;
use crate::features::{FeatureFlags, PrivateFeatureFlags};
use crate::info::{GLApi, GLVersion};
use crate::loader::GlLoader;

use log::debug;
use std::env;

/// The facts about the active driver that detection consumes.
///
/// Every field comes straight from the windowing backend; this crate makes no
/// GL calls of its own.
#[derive(Clone, Debug)]
pub struct DriverInfo {
    /// The API flavor of the context.
    pub api: GLApi,
    /// The version the driver reports (`glGetString(GL_VERSION)`).
    pub version: GLVersion,
    /// The GLSL version the driver reports
    /// (`glGetString(GL_SHADING_LANGUAGE_VERSION)`), if the backend queried
    /// it. Only consulted for desktop GL contexts of version 2.0 or later.
    pub glsl_version: Option<GLVersion>,
    /// The extensions the driver reports.
    pub extensions: ExtensionSet,
}

/// The resolved capabilities of one device/context.
///
/// Built by a single detection pass at context-setup time and immutable
/// afterward. Each context gets its own instance; nothing here is shared
/// between contexts.
pub struct DeviceCapabilities {
    /// The API flavor detection ran against.
    pub api: GLApi,
    /// The driver version.
    pub version: GLVersion,
    /// The GLSL version the driver reports.
    pub glsl_version: GLVersion,
    /// The GLSL version shaders should be written against, in
    /// `#version`-directive form (e.g. 120).
    pub glsl_version_to_use: u16,
    /// Features the device supports.
    pub features: FeatureFlags,
    /// Internal mechanism bits.
    pub private_features: PrivateFeatureFlags,
    table: EntryPointTable,
}

impl DeviceCapabilities {
    /// Runs the one-shot detection pass: gates the driver version, resolves
    /// every catalog capability, and derives the feature flags.
    ///
    /// An individual capability being unavailable never fails detection; only
    /// an unusable driver (version too old, or a hard-required capability
    /// missing) produces an error.
    pub fn detect(info: &DriverInfo, loader: &dyn GlLoader) -> Result<DeviceCapabilities, Error> {
        let mut extensions = info.extensions.clone();
        if let Ok(disabled) = env::var("GLCAPS_DISABLE_GL_EXTENSIONS") {
            extensions.remove_disabled(&disabled);
        }

        match info.api {
            GLApi::GL | GLApi::GLCore => driver::gl::check_version(info.version, &extensions)?,
            GLApi::GLES => driver::gles::check_version(info.version)?,
        }

        debug!(
            "checking features: {:?} {}.{}, {} extensions reported",
            info.api,
            info.version.major,
            info.version.minor,
            extensions.len()
        );

        let mut table = EntryPointTable::new();
        check_all_capabilities(info.api, info.version, &extensions, loader, &mut table);

        let (glsl_version, glsl_version_to_use, flag_sets) = match info.api {
            GLApi::GL | GLApi::GLCore => {
                let reported_glsl = if info.version >= GLVersion::new(2, 0) {
                    info.glsl_version.unwrap_or(GLVersion::new(1, 1))
                } else {
                    GLVersion::new(1, 1)
                };
                let to_use = driver::gl::select_glsl_version(info.version, reported_glsl);
                (
                    reported_glsl,
                    version_directive(to_use),
                    driver::gl::update_features(info.version, reported_glsl, &extensions, &table)?,
                )
            }
            GLApi::GLES => (
                GLVersion::new(1, 0),
                100,
                driver::gles::update_features(&extensions, &table)?,
            ),
        };
        let (features, private_features) = flag_sets;

        Ok(DeviceCapabilities {
            api: info.api,
            version: info.version,
            glsl_version,
            glsl_version_to_use,
            features,
            private_features,
            table,
        })
    }

    /// Returns whether the device supports all of the given features.
    #[inline]
    pub fn has_features(&self, features: FeatureFlags) -> bool {
        self.features.contains(features)
    }

    /// The resolved entry-point table.
    #[inline]
    pub fn entry_points(&self) -> &EntryPointTable {
        &self.table
    }
}

fn version_directive(version: GLVersion) -> u16 {
    version.major as u16 * 100 + version.minor as u16 * 10
}

// glcaps/src/error.rs
//
//! Various errors that capability detection can produce.

/// Various errors that capability detection can produce.
///
/// An individual capability being unavailable is *not* an error:
/// unavailability is reported through null entry-point slots and is an
/// entirely normal outcome. These errors only arise from the device-level
/// gates that decide whether the driver is usable at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The OpenGL version could not be determined.
    UnknownGLVersion,
    /// The system doesn't support the requested OpenGL API version.
    UnsupportedGLVersion,
    /// An extension necessary for this library to function isn't supported.
    RequiredExtensionUnavailable(&'static str),
    /// A capability the driver must provide could not be resolved.
    RequiredCapabilityUnavailable(&'static str),
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
}

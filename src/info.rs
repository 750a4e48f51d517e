// glcaps/src/info.rs
//
//! OpenGL driver information.

use crate::error::Error;

/// The API flavor of the active context (OpenGL or OpenGL ES).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GLApi {
    /// Desktop OpenGL with the compatibility profile.
    GL,
    /// Desktop OpenGL with the core profile.
    GLCore,
    /// OpenGL ES (embedded OpenGL), version 2 or later.
    GLES,
}

impl GLApi {
    /// Returns true for either desktop OpenGL profile.
    #[inline]
    pub fn is_desktop_gl(self) -> bool {
        match self {
            GLApi::GL | GLApi::GLCore => true,
            GLApi::GLES => false,
        }
    }
}

/// Describes the OpenGL version that the active driver reports.
///
/// Since OpenGL and OpenGL ES have different version numbering schemes, the
/// meaning of a given value depends on the associated `GLApi`. Versions order
/// by major, then minor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GLVersion {
    /// The major OpenGL version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor OpenGL version (e.g. 2 in 4.2).
    pub minor: u8,
}

impl GLVersion {
    /// Creates a GL version structure with the given major and minor version numbers.
    #[inline]
    pub const fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Parses a `glGetString(GL_VERSION)`-style string.
    ///
    /// Accepts both the desktop form (`"2.1 Mesa 20.0.8"`) and the embedded
    /// form (`"OpenGL ES 3.0 V@415"`). Anything after the minor number is
    /// vendor information and is ignored.
    pub fn parse(version_string: &str) -> Result<GLVersion, Error> {
        let version_string = version_string
            .trim_start_matches("OpenGL ES")
            .trim_start_matches("-CM")
            .trim_start();
        let mut parts = version_string.split(|c| c == '.' || c == ' ');
        let major = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or(Error::UnknownGLVersion)?;
        let minor = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or(Error::UnknownGLVersion)?;
        Ok(GLVersion { major, minor })
    }
}

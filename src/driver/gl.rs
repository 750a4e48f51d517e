// glcaps/src/driver/gl.rs
//
//! Version gate and feature derivation for the desktop GL flavors.

use crate::entry_points::{EntryPoint, EntryPointTable};
use crate::error::Error;
use crate::extensions::ExtensionSet;
use crate::features::{FeatureFlags, PrivateFeatureFlags};
use crate::info::GLVersion;

/// GL 1.3 supports all of the required functionality in core; GL 1.2 is
/// accepted when the multitexture extension fills the gap.
pub(crate) fn check_version(
    version: GLVersion,
    extensions: &ExtensionSet,
) -> Result<(), Error> {
    if version >= GLVersion::new(1, 3) {
        return Ok(());
    }
    if !extensions.contains("GL_ARB_multitexture") {
        return Err(Error::RequiredExtensionUnavailable("GL_ARB_multitexture"));
    }
    if version < GLVersion::new(1, 2) {
        return Err(Error::UnsupportedGLVersion);
    }
    Ok(())
}

/// Picks the GLSL version to write shaders against.
///
/// Version 120 is preferred when the driver has it so that gl_PointCoord can
/// be used. GL 3 contexts are created as 3.1 core profile, which corresponds
/// to GLSL >= 1.3.
pub(crate) fn select_glsl_version(
    version: GLVersion,
    reported_glsl_version: GLVersion,
) -> GLVersion {
    if version.major >= 3 {
        GLVersion::new(1, 3)
    } else if reported_glsl_version >= GLVersion::new(1, 2) {
        GLVersion::new(1, 2)
    } else {
        GLVersion::new(1, 1)
    }
}

pub(crate) fn update_features(
    version: GLVersion,
    reported_glsl_version: GLVersion,
    extensions: &ExtensionSet,
    table: &EntryPointTable,
) -> Result<(FeatureFlags, PrivateFeatureFlags), Error> {
    let mut features = FeatureFlags::UNSIGNED_INT_INDICES;
    let mut private = PrivateFeatureFlags::ANY_GL
        | PrivateFeatureFlags::ALPHA_TEXTURES
        | PrivateFeatureFlags::BLEND_CONSTANT
        | PrivateFeatureFlags::READ_PIXELS_ANY_FORMAT;

    if version >= GLVersion::new(1, 4) {
        features |= FeatureFlags::MIRRORED_REPEAT;
    }

    if version >= GLVersion::new(2, 0)
        || extensions.contains("GL_ARB_texture_non_power_of_two")
    {
        features |= FeatureFlags::TEXTURE_NPOT
            | FeatureFlags::TEXTURE_NPOT_BASIC
            | FeatureFlags::TEXTURE_NPOT_MIPMAP
            | FeatureFlags::TEXTURE_NPOT_REPEAT;
    }

    if extensions.contains("GL_MESA_pack_invert") {
        private |= PrivateFeatureFlags::MESA_PACK_INVERT;
    }

    if !table.has(EntryPoint::GenRenderbuffers) {
        return Err(Error::RequiredCapabilityUnavailable("framebuffer objects"));
    }
    private |= PrivateFeatureFlags::QUERY_FRAMEBUFFER_BITS;

    if table.has(EntryPoint::BlitFramebuffer) {
        private |= PrivateFeatureFlags::OFFSCREEN_BLIT;
    }

    if table.has(EntryPoint::RenderbufferStorageMultisample) {
        features |= FeatureFlags::OFFSCREEN_MULTISAMPLE;
    }

    if version >= GLVersion::new(3, 0) || extensions.contains("GL_ARB_depth_texture") {
        features |= FeatureFlags::DEPTH_TEXTURE;
    }

    if version >= GLVersion::new(2, 1)
        || extensions.contains("GL_EXT_pixel_buffer_object")
    {
        private |= PrivateFeatureFlags::PBOS;
    }

    if !table.has(EntryPoint::CreateProgram) {
        return Err(Error::RequiredCapabilityUnavailable("GLSL"));
    }
    features |= FeatureFlags::GLSL;

    // Point sprites additionally depend on GLSL >= 1.2 for the gl_PointCoord
    // builtin the shader backend relies on.
    if (version >= GLVersion::new(2, 0) || extensions.contains("GL_ARB_point_sprite"))
        && reported_glsl_version >= GLVersion::new(1, 2)
    {
        features |= FeatureFlags::POINT_SPRITE;
    }

    if table.has(EntryPoint::GenBuffers) {
        private |= PrivateFeatureFlags::VBOS;
        features |= FeatureFlags::MAP_BUFFER_FOR_READ | FeatureFlags::MAP_BUFFER_FOR_WRITE;
    }

    if table.has(EntryPoint::TexImage3D) {
        features |= FeatureFlags::TEXTURE_3D;
    }

    if table.has(EntryPoint::EGLImageTargetTexture2D) {
        private |= PrivateFeatureFlags::TEXTURE_2D_FROM_EGL_IMAGE;
    }

    if extensions.contains("GL_EXT_packed_depth_stencil") {
        private |= PrivateFeatureFlags::EXT_PACKED_DEPTH_STENCIL;
    }

    if !table.has(EntryPoint::GenSamplers) {
        return Err(Error::RequiredCapabilityUnavailable("sampler objects"));
    }
    private |= PrivateFeatureFlags::SAMPLER_OBJECTS;

    if version < GLVersion::new(3, 3)
        && !extensions.contains("GL_ARB_texture_swizzle")
        && !extensions.contains("GL_EXT_texture_swizzle")
    {
        return Err(Error::RequiredExtensionUnavailable("GL_ARB_texture_swizzle"));
    }
    private |= PrivateFeatureFlags::TEXTURE_SWIZZLE;

    // The per-vertex point size is only available through the gl_PointSize
    // builtin, which needs GL 2.0 (not the GLSL extensions).
    if version >= GLVersion::new(2, 0) {
        features |= FeatureFlags::PER_VERTEX_POINT_SIZE;
        private |= PrivateFeatureFlags::ENABLE_PROGRAM_POINT_SIZE;
    }

    if table.has(EntryPoint::FenceSync) {
        features |= FeatureFlags::FENCE;
    }

    if table.has(EntryPoint::DrawArraysInstanced) {
        features |= FeatureFlags::INSTANCES;
    }

    if version < GLVersion::new(3, 0) && !extensions.contains("GL_ARB_texture_rg") {
        return Err(Error::RequiredExtensionUnavailable("GL_ARB_texture_rg"));
    }
    features |= FeatureFlags::TEXTURE_RG;

    Ok((features, private))
}

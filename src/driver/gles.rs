// glcaps/src/driver/gles.rs
//
//! Version gate and feature derivation for the GLES flavor.

use crate::entry_points::{EntryPoint, EntryPointTable};
use crate::error::Error;
use crate::extensions::ExtensionSet;
use crate::features::{FeatureFlags, PrivateFeatureFlags};
use crate::info::GLVersion;

pub(crate) fn check_version(version: GLVersion) -> Result<(), Error> {
    if version < GLVersion::new(2, 0) {
        return Err(Error::UnsupportedGLVersion);
    }
    Ok(())
}

pub(crate) fn update_features(
    extensions: &ExtensionSet,
    table: &EntryPointTable,
) -> Result<(FeatureFlags, PrivateFeatureFlags), Error> {
    // GLES 2 core doesn't support mipmaps for npot textures or repeat modes
    // other than CLAMP_TO_EDGE.
    let mut features = FeatureFlags::GLSL
        | FeatureFlags::TEXTURE_NPOT_BASIC
        | FeatureFlags::MIRRORED_REPEAT
        | FeatureFlags::PER_VERTEX_POINT_SIZE
        | FeatureFlags::POINT_SPRITE;
    let mut private = PrivateFeatureFlags::ANY_GL
        | PrivateFeatureFlags::ALPHA_TEXTURES
        | PrivateFeatureFlags::BLEND_CONSTANT
        | PrivateFeatureFlags::VBOS;

    if !table.has(EntryPoint::GenRenderbuffers) {
        return Err(Error::RequiredCapabilityUnavailable("framebuffer objects"));
    }
    if !table.has(EntryPoint::CreateProgram) {
        return Err(Error::RequiredCapabilityUnavailable("GLSL"));
    }

    if table.has(EntryPoint::BlitFramebuffer) {
        private |= PrivateFeatureFlags::OFFSCREEN_BLIT;
    }

    if extensions.contains("GL_OES_element_index_uint") {
        features |= FeatureFlags::UNSIGNED_INT_INDICES;
    }

    if extensions.contains("GL_OES_depth_texture") {
        features |= FeatureFlags::DEPTH_TEXTURE;
    }

    if extensions.contains("GL_OES_texture_npot") {
        features |= FeatureFlags::TEXTURE_NPOT
            | FeatureFlags::TEXTURE_NPOT_BASIC
            | FeatureFlags::TEXTURE_NPOT_MIPMAP
            | FeatureFlags::TEXTURE_NPOT_REPEAT;
    } else if extensions.contains("GL_IMG_texture_npot") {
        features |= FeatureFlags::TEXTURE_NPOT_BASIC | FeatureFlags::TEXTURE_NPOT_MIPMAP;
    }

    if table.has(EntryPoint::TexImage3D) {
        features |= FeatureFlags::TEXTURE_3D;
    }

    // The GL_OES_mapbuffer extension doesn't support mapping for read.
    if table.has(EntryPoint::MapBuffer) {
        features |= FeatureFlags::MAP_BUFFER_FOR_WRITE;
    }

    if table.has(EntryPoint::EGLImageTargetTexture2D) {
        private |= PrivateFeatureFlags::TEXTURE_2D_FROM_EGL_IMAGE;
    }

    if extensions.contains("GL_OES_packed_depth_stencil") {
        private |= PrivateFeatureFlags::OES_PACKED_DEPTH_STENCIL;
    }

    if extensions.contains("GL_EXT_texture_format_BGRA8888") {
        private |= PrivateFeatureFlags::TEXTURE_FORMAT_BGRA8888;
    }

    if extensions.contains("GL_EXT_unpack_subimage") {
        private |= PrivateFeatureFlags::UNPACK_SUBIMAGE;
    }

    // At least one vendor shipped the extension with the wrong case.
    if extensions.contains("GL_OES_EGL_sync") || extensions.contains("GL_OES_egl_sync") {
        private |= PrivateFeatureFlags::OES_EGL_SYNC;
    }

    if extensions.contains("GL_EXT_texture_rg") {
        features |= FeatureFlags::TEXTURE_RG;
    }

    if table.has(EntryPoint::DrawArraysInstanced) {
        features |= FeatureFlags::INSTANCES;
    }

    Ok((features, private))
}

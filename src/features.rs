// glcaps/src/features.rs
//
//! High-level feature flags derived after the resolution pass.

use bitflags::bitflags;

bitflags! {
    /// Features a context can be asked about once capability detection has
    /// run.
    ///
    /// Each bit is derived from some combination of the driver version, the
    /// reported extensions, and the resolved entry-point table; consumers
    /// never need to know which of those sources satisfied it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FeatureFlags: u32 {
        /// Basic support for non-power-of-two textures (no mipmapping, no
        /// repeat wrap modes).
        const TEXTURE_NPOT_BASIC = 1 << 0;
        /// Mipmapping of non-power-of-two textures.
        const TEXTURE_NPOT_MIPMAP = 1 << 1;
        /// Repeat wrap modes for non-power-of-two textures.
        const TEXTURE_NPOT_REPEAT = 1 << 2;
        /// Full non-power-of-two texture support (the three NPOT bits
        /// combined).
        const TEXTURE_NPOT = 1 << 3;
        /// 3D texture support.
        const TEXTURE_3D = 1 << 4;
        /// Single- and dual-component texture formats.
        const TEXTURE_RG = 1 << 5;
        /// GLSL shader support.
        const GLSL = 1 << 6;
        /// Multisample support for offscreen framebuffers.
        const OFFSCREEN_MULTISAMPLE = 1 << 7;
        /// 32-bit index buffers.
        const UNSIGNED_INT_INDICES = 1 << 8;
        /// Point sprite support.
        const POINT_SPRITE = 1 << 9;
        /// Per-vertex point size via the gl_PointSize builtin.
        const PER_VERTEX_POINT_SIZE = 1 << 10;
        /// Buffers can be mapped for reading.
        const MAP_BUFFER_FOR_READ = 1 << 11;
        /// Buffers can be mapped for writing.
        const MAP_BUFFER_FOR_WRITE = 1 << 12;
        /// The mirrored-repeat texture wrap mode.
        const MIRRORED_REPEAT = 1 << 13;
        /// Depth textures can be rendered to.
        const DEPTH_TEXTURE = 1 << 14;
        /// Instanced draw calls.
        const INSTANCES = 1 << 15;
        /// GPU fence sync objects.
        const FENCE = 1 << 16;
    }
}

bitflags! {
    /// Internal feature bits.
    ///
    /// These gate code paths inside a renderer rather than user-visible
    /// functionality, and generally name the mechanism rather than the
    /// feature.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PrivateFeatureFlags: u32 {
        /// Some flavor of desktop GL or GLES is active at all.
        const ANY_GL = 1 << 0;
        /// Framebuffer blits.
        const OFFSCREEN_BLIT = 1 << 1;
        /// Pixel buffer objects.
        const PBOS = 1 << 2;
        /// Vertex buffer objects.
        const VBOS = 1 << 3;
        /// The constant blend color.
        const BLEND_CONSTANT = 1 << 4;
        /// Framebuffer bit depths can be queried.
        const QUERY_FRAMEBUFFER_BITS = 1 << 5;
        /// Sampler objects.
        const SAMPLER_OBJECTS = 1 << 6;
        /// Texture component swizzling.
        const TEXTURE_SWIZZLE = 1 << 7;
        /// Packed depth/stencil renderbuffers (EXT spelling).
        const EXT_PACKED_DEPTH_STENCIL = 1 << 8;
        /// Packed depth/stencil renderbuffers (OES spelling).
        const OES_PACKED_DEPTH_STENCIL = 1 << 9;
        /// Pixel transfers can be vertically flipped by the driver.
        const MESA_PACK_INVERT = 1 << 10;
        /// BGRA8888 texture uploads.
        const TEXTURE_FORMAT_BGRA8888 = 1 << 11;
        /// Sub-region pixel unpacking.
        const UNPACK_SUBIMAGE = 1 << 12;
        /// EGL sync objects reachable from GLES.
        const OES_EGL_SYNC = 1 << 13;
        /// 2D textures can be created from EGL images.
        const TEXTURE_2D_FROM_EGL_IMAGE = 1 << 14;
        /// Alpha-only texture formats.
        const ALPHA_TEXTURES = 1 << 15;
        /// glReadPixels accepts any format/type combination.
        const READ_PIXELS_ANY_FORMAT = 1 << 16;
        /// GL_PROGRAM_POINT_SIZE must be enabled for gl_PointSize to work.
        const ENABLE_PROGRAM_POINT_SIZE = 1 << 17;
    }
}

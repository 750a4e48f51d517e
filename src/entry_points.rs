// glcaps/src/entry_points.rs
//
//! Entry-point slots and the resolved function-pointer table.

use std::os::raw::c_void;
use std::ptr;

/// Identifies one slot in the entry-point table.
///
/// Each variant corresponds to a driver function the capability catalog may
/// resolve. The variant name is the GL function name without its `gl` prefix
/// and without any vendor suffix; which suffixed symbol actually backs the
/// slot depends on how the owning capability resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    // Framebuffer and renderbuffer objects.
    GenRenderbuffers,
    DeleteRenderbuffers,
    BindRenderbuffer,
    RenderbufferStorage,
    GenFramebuffers,
    BindFramebuffer,
    FramebufferTexture2D,
    FramebufferRenderbuffer,
    IsRenderbuffer,
    CheckFramebufferStatus,
    DeleteFramebuffers,
    GenerateMipmap,
    GetFramebufferAttachmentParameteriv,
    GetRenderbufferParameteriv,
    IsFramebuffer,

    // Blending.
    BlendEquation,
    BlendColor,
    BlendFuncSeparate,
    BlendEquationSeparate,

    // The GLES2-only part of the API (ES2_compatibility on big GL).
    ReleaseShaderCompiler,
    GetShaderPrecisionFormat,
    ShaderBinary,
    DepthRangef,
    ClearDepthf,

    // Compressed textures and multisample coverage.
    CompressedTexImage2D,
    CompressedTexSubImage2D,
    SampleCoverage,

    // Multitexturing.
    ActiveTexture,
    ClientActiveTexture,

    // Buffer objects.
    GetBufferParameteriv,
    GenBuffers,
    BindBuffer,
    BufferData,
    BufferSubData,
    DeleteBuffers,
    IsBuffer,
    MapBuffer,
    UnmapBuffer,
    MapBufferRange,

    // Separate stencil state.
    StencilFuncSeparate,
    StencilMaskSeparate,
    StencilOpSeparate,

    // GLSL shader and program objects.
    CreateProgram,
    CreateShader,
    DeleteShader,
    AttachShader,
    UseProgram,
    DeleteProgram,
    GetShaderInfoLog,
    GetProgramInfoLog,
    GetShaderiv,
    GetProgramiv,
    DetachShader,
    GetAttachedShaders,
    IsShader,
    IsProgram,
    ShaderSource,
    CompileShader,
    LinkProgram,
    GetUniformLocation,
    Uniform1f,
    Uniform2f,
    Uniform3f,
    Uniform4f,
    Uniform1i,
    Uniform4fv,
    UniformMatrix4fv,
    ValidateProgram,

    // Vertex attributes.
    VertexAttribPointer,
    EnableVertexAttribArray,
    DisableVertexAttribArray,
    VertexAttrib1f,
    VertexAttrib2fv,
    VertexAttrib3fv,
    VertexAttrib4fv,
    GetAttribLocation,

    // Functions only available in big GL.
    GetTexLevelParameteriv,
    GetTexImage,
    ClipPlane,
    DepthRange,
    DrawBuffer,

    // 3D textures.
    TexImage3D,
    TexSubImage3D,

    // Framebuffer blit and discard.
    BlitFramebuffer,
    DiscardFramebuffer,

    // EGL images.
    EGLImageTargetTexture2D,
    EGLImageTargetRenderbufferStorage,

    // Multisampled render to texture.
    RenderbufferStorageMultisample,
    FramebufferTexture2DMultisample,

    // Sampler objects.
    GenSamplers,
    DeleteSamplers,
    BindSampler,
    SamplerParameteri,

    // Indexed string queries (GL 3).
    GetStringi,

    // Vertex array objects.
    BindVertexArray,
    DeleteVertexArrays,
    GenVertexArrays,

    // Fence sync objects.
    FenceSync,
    ClientWaitSync,
    DeleteSync,

    // Multiple draw buffers.
    DrawBuffers,

    // Instanced drawing.
    VertexAttribDivisor,
    DrawArraysInstanced,
    DrawElementsInstanced,
}

impl EntryPoint {
    // Keep in sync with the last variant above.
    pub(crate) const COUNT: usize = EntryPoint::DrawElementsInstanced as usize + 1;
}

/// The table of resolved driver entry points for one context.
///
/// Every slot is null until the resolution pass populates it. After the pass,
/// a capability is available exactly when its slots are non-null, and the
/// all-or-nothing policy of the resolver means null-checking any single slot
/// of a capability answers for the whole group. The table is written only
/// during the one resolution pass at context setup and treated as read-only
/// by consumers afterward.
#[derive(Clone, PartialEq, Eq)]
pub struct EntryPointTable {
    entries: [*const c_void; EntryPoint::COUNT],
}

impl EntryPointTable {
    /// Creates a table with every slot null.
    #[inline]
    pub fn new() -> EntryPointTable {
        EntryPointTable {
            entries: [ptr::null(); EntryPoint::COUNT],
        }
    }

    /// Returns the resolved address in the given slot, or null.
    #[inline]
    pub fn get(&self, entry_point: EntryPoint) -> *const c_void {
        self.entries[entry_point as usize]
    }

    /// Returns whether the given slot was resolved.
    #[inline]
    pub fn has(&self, entry_point: EntryPoint) -> bool {
        !self.get(entry_point).is_null()
    }

    #[inline]
    pub(crate) fn set(&mut self, entry_point: EntryPoint, address: *const c_void) {
        self.entries[entry_point as usize] = address;
    }

    #[inline]
    pub(crate) fn clear(&mut self, entry_point: EntryPoint) {
        self.entries[entry_point as usize] = ptr::null();
    }
}

impl Default for EntryPointTable {
    fn default() -> EntryPointTable {
        EntryPointTable::new()
    }
}

// glcaps/src/catalog.rs
//
//! The static capability catalog.
//!
//! Each entry names the minimum core GL version, the GLES versions that carry
//! the group in core, and the extension spellings to try, in priority order,
//! when neither applies. Entries are self-describing data; the resolver never
//! special-cases any of them.

use crate::capability::{Capability, GlesAvailability, NEVER_IN_CORE_GL};
use crate::entry_points::EntryPoint;
use crate::info::GLVersion;

pub(crate) static CAPABILITIES: &[Capability] = &[
    Capability {
        name: "framebuffer_objects",
        min_gl: GLVersion::new(3, 0),
        gles: GlesAvailability::GLES2,
        // The ARB version of this extension has no ARB suffix on the
        // function names.
        namespaces: &["ARB:", "EXT", "OES"],
        extension_names: &["framebuffer_object"],
        functions: &[
            ("glGenRenderbuffers", EntryPoint::GenRenderbuffers),
            ("glDeleteRenderbuffers", EntryPoint::DeleteRenderbuffers),
            ("glBindRenderbuffer", EntryPoint::BindRenderbuffer),
            ("glRenderbufferStorage", EntryPoint::RenderbufferStorage),
            ("glGenFramebuffers", EntryPoint::GenFramebuffers),
            ("glBindFramebuffer", EntryPoint::BindFramebuffer),
            ("glFramebufferTexture2D", EntryPoint::FramebufferTexture2D),
            ("glFramebufferRenderbuffer", EntryPoint::FramebufferRenderbuffer),
            ("glIsRenderbuffer", EntryPoint::IsRenderbuffer),
            ("glCheckFramebufferStatus", EntryPoint::CheckFramebufferStatus),
            ("glDeleteFramebuffers", EntryPoint::DeleteFramebuffers),
            ("glGenerateMipmap", EntryPoint::GenerateMipmap),
            (
                "glGetFramebufferAttachmentParameteriv",
                EntryPoint::GetFramebufferAttachmentParameteriv,
            ),
            ("glGetRenderbufferParameteriv", EntryPoint::GetRenderbufferParameteriv),
            ("glIsFramebuffer", EntryPoint::IsFramebuffer),
        ],
    },
    Capability {
        name: "blending",
        min_gl: GLVersion::new(1, 2),
        gles: GlesAvailability::GLES2,
        namespaces: &[],
        extension_names: &[],
        functions: &[
            ("glBlendEquation", EntryPoint::BlendEquation),
            ("glBlendColor", EntryPoint::BlendColor),
        ],
    },
    Capability {
        name: "blend_func_separate",
        min_gl: GLVersion::new(1, 4),
        gles: GlesAvailability::GLES2,
        namespaces: &["EXT"],
        extension_names: &["blend_func_separate"],
        functions: &[("glBlendFuncSeparate", EntryPoint::BlendFuncSeparate)],
    },
    Capability {
        name: "blend_equation_separate",
        min_gl: GLVersion::new(2, 0),
        gles: GlesAvailability::GLES2,
        namespaces: &["EXT"],
        extension_names: &["blend_equation_separate"],
        functions: &[("glBlendEquationSeparate", EntryPoint::BlendEquationSeparate)],
    },
    Capability {
        name: "gles2_only_api",
        min_gl: GLVersion::new(4, 1),
        gles: GlesAvailability::GLES2,
        namespaces: &["ARB:"],
        extension_names: &["ES2_compatibility"],
        functions: &[
            ("glReleaseShaderCompiler", EntryPoint::ReleaseShaderCompiler),
            ("glGetShaderPrecisionFormat", EntryPoint::GetShaderPrecisionFormat),
            ("glShaderBinary", EntryPoint::ShaderBinary),
            ("glDepthRangef", EntryPoint::DepthRangef),
            ("glClearDepthf", EntryPoint::ClearDepthf),
        ],
    },
    Capability {
        name: "only_in_gles2_and_gl_1_3",
        min_gl: GLVersion::new(1, 3),
        gles: GlesAvailability::GLES2,
        namespaces: &[],
        extension_names: &[],
        functions: &[
            ("glCompressedTexImage2D", EntryPoint::CompressedTexImage2D),
            ("glCompressedTexSubImage2D", EntryPoint::CompressedTexSubImage2D),
            ("glSampleCoverage", EntryPoint::SampleCoverage),
        ],
    },
    // The multitexture check is split in two because GLES2 has
    // glActiveTexture() but not glClientActiveTexture().
    Capability {
        name: "multitexture_part0",
        min_gl: GLVersion::new(1, 3),
        gles: GlesAvailability::GLES2,
        namespaces: &["ARB"],
        extension_names: &["multitexture"],
        functions: &[("glActiveTexture", EntryPoint::ActiveTexture)],
    },
    Capability {
        name: "multitexture_part1",
        min_gl: GLVersion::new(1, 3),
        gles: GlesAvailability::empty(),
        namespaces: &["ARB"],
        extension_names: &["multitexture"],
        functions: &[("glClientActiveTexture", EntryPoint::ClientActiveTexture)],
    },
    Capability {
        name: "only_in_gles2_and_gl_1_5",
        min_gl: GLVersion::new(1, 5),
        gles: GlesAvailability::GLES2,
        namespaces: &[],
        extension_names: &[],
        functions: &[("glGetBufferParameteriv", EntryPoint::GetBufferParameteriv)],
    },
    Capability {
        name: "vbos",
        min_gl: GLVersion::new(1, 5),
        gles: GlesAvailability::GLES2,
        namespaces: &["ARB"],
        extension_names: &["vertex_buffer_object"],
        functions: &[
            ("glGenBuffers", EntryPoint::GenBuffers),
            ("glBindBuffer", EntryPoint::BindBuffer),
            ("glBufferData", EntryPoint::BufferData),
            ("glBufferSubData", EntryPoint::BufferSubData),
            ("glDeleteBuffers", EntryPoint::DeleteBuffers),
            ("glIsBuffer", EntryPoint::IsBuffer),
        ],
    },
    // GLES doesn't support mapping buffers in core so this has to be a
    // separate check.
    Capability {
        name: "map_vbos",
        min_gl: GLVersion::new(1, 5),
        gles: GlesAvailability::empty(),
        namespaces: &["ARB", "OES"],
        extension_names: &["vertex_buffer_object", "mapbuffer"],
        functions: &[
            ("glMapBuffer", EntryPoint::MapBuffer),
            ("glUnmapBuffer", EntryPoint::UnmapBuffer),
        ],
    },
    Capability {
        name: "map_region",
        min_gl: GLVersion::new(3, 0),
        gles: GlesAvailability::empty(),
        namespaces: &["ARB:"],
        extension_names: &["map_buffer_range"],
        functions: &[("glMapBufferRange", EntryPoint::MapBufferRange)],
    },
    Capability {
        name: "two_point_zero_api",
        min_gl: GLVersion::new(2, 0),
        gles: GlesAvailability::GLES2,
        namespaces: &[],
        extension_names: &[],
        functions: &[
            ("glStencilFuncSeparate", EntryPoint::StencilFuncSeparate),
            ("glStencilMaskSeparate", EntryPoint::StencilMaskSeparate),
            ("glStencilOpSeparate", EntryPoint::StencilOpSeparate),
        ],
    },
    Capability {
        name: "shaders_glsl_2_only",
        min_gl: GLVersion::new(2, 0),
        gles: GlesAvailability::GLES2,
        namespaces: &[],
        extension_names: &[],
        functions: &[
            ("glCreateProgram", EntryPoint::CreateProgram),
            ("glCreateShader", EntryPoint::CreateShader),
            ("glDeleteShader", EntryPoint::DeleteShader),
            ("glAttachShader", EntryPoint::AttachShader),
            ("glUseProgram", EntryPoint::UseProgram),
            ("glDeleteProgram", EntryPoint::DeleteProgram),
            ("glGetShaderInfoLog", EntryPoint::GetShaderInfoLog),
            ("glGetProgramInfoLog", EntryPoint::GetProgramInfoLog),
            ("glGetShaderiv", EntryPoint::GetShaderiv),
            ("glGetProgramiv", EntryPoint::GetProgramiv),
            ("glDetachShader", EntryPoint::DetachShader),
            ("glGetAttachedShaders", EntryPoint::GetAttachedShaders),
            ("glIsShader", EntryPoint::IsShader),
            ("glIsProgram", EntryPoint::IsProgram),
        ],
    },
    Capability {
        name: "shader_objects_or_gl2",
        min_gl: GLVersion::new(2, 0),
        gles: GlesAvailability::GLES2,
        namespaces: &["ARB"],
        extension_names: &["shader_objects"],
        functions: &[
            ("glShaderSource", EntryPoint::ShaderSource),
            ("glCompileShader", EntryPoint::CompileShader),
            ("glLinkProgram", EntryPoint::LinkProgram),
            ("glGetUniformLocation", EntryPoint::GetUniformLocation),
            ("glUniform1f", EntryPoint::Uniform1f),
            ("glUniform2f", EntryPoint::Uniform2f),
            ("glUniform3f", EntryPoint::Uniform3f),
            ("glUniform4f", EntryPoint::Uniform4f),
            ("glUniform1i", EntryPoint::Uniform1i),
            ("glUniform4fv", EntryPoint::Uniform4fv),
            ("glUniformMatrix4fv", EntryPoint::UniformMatrix4fv),
            ("glValidateProgram", EntryPoint::ValidateProgram),
        ],
    },
    Capability {
        name: "vertex_shaders",
        min_gl: GLVersion::new(2, 0),
        gles: GlesAvailability::GLES2,
        namespaces: &["ARB"],
        extension_names: &["vertex_shader"],
        functions: &[
            ("glVertexAttribPointer", EntryPoint::VertexAttribPointer),
            ("glEnableVertexAttribArray", EntryPoint::EnableVertexAttribArray),
            ("glDisableVertexAttribArray", EntryPoint::DisableVertexAttribArray),
            ("glVertexAttrib1f", EntryPoint::VertexAttrib1f),
            ("glVertexAttrib2fv", EntryPoint::VertexAttrib2fv),
            ("glVertexAttrib3fv", EntryPoint::VertexAttrib3fv),
            ("glVertexAttrib4fv", EntryPoint::VertexAttrib4fv),
            ("glGetAttribLocation", EntryPoint::GetAttribLocation),
        ],
    },
    Capability {
        name: "only_in_big_gl",
        min_gl: GLVersion::new(0, 0),
        gles: GlesAvailability::empty(),
        namespaces: &[],
        extension_names: &[],
        functions: &[
            ("glGetTexLevelParameteriv", EntryPoint::GetTexLevelParameteriv),
            ("glGetTexImage", EntryPoint::GetTexImage),
            ("glClipPlane", EntryPoint::ClipPlane),
            ("glDepthRange", EntryPoint::DepthRange),
            ("glDrawBuffer", EntryPoint::DrawBuffer),
        ],
    },
    Capability {
        name: "texture_3d",
        min_gl: GLVersion::new(1, 2),
        gles: GlesAvailability::empty(),
        namespaces: &["OES"],
        extension_names: &["texture_3D"],
        functions: &[
            ("glTexImage3D", EntryPoint::TexImage3D),
            ("glTexSubImage3D", EntryPoint::TexSubImage3D),
        ],
    },
    Capability {
        name: "offscreen_blit",
        min_gl: GLVersion::new(3, 0),
        gles: GlesAvailability::empty(),
        namespaces: &["EXT", "ANGLE"],
        extension_names: &["framebuffer_blit"],
        functions: &[("glBlitFramebuffer", EntryPoint::BlitFramebuffer)],
    },
    Capability {
        name: "framebuffer_discard",
        min_gl: NEVER_IN_CORE_GL,
        gles: GlesAvailability::empty(),
        namespaces: &["EXT"],
        extension_names: &["framebuffer_discard"],
        functions: &[("glDiscardFramebuffer", EntryPoint::DiscardFramebuffer)],
    },
    Capability {
        name: "egl_image",
        min_gl: NEVER_IN_CORE_GL,
        gles: GlesAvailability::empty(),
        namespaces: &["OES"],
        extension_names: &["EGL_image"],
        functions: &[
            ("glEGLImageTargetTexture2D", EntryPoint::EGLImageTargetTexture2D),
            (
                "glEGLImageTargetRenderbufferStorage",
                EntryPoint::EGLImageTargetRenderbufferStorage,
            ),
        ],
    },
    Capability {
        name: "multisampled_render_to_texture",
        min_gl: NEVER_IN_CORE_GL,
        gles: GlesAvailability::empty(),
        namespaces: &["IMG"],
        extension_names: &["multisampled_render_to_texture"],
        functions: &[
            (
                "glRenderbufferStorageMultisample",
                EntryPoint::RenderbufferStorageMultisample,
            ),
            (
                "glFramebufferTexture2DMultisample",
                EntryPoint::FramebufferTexture2DMultisample,
            ),
        ],
    },
    Capability {
        name: "sampler_objects",
        min_gl: GLVersion::new(3, 3),
        gles: GlesAvailability::empty(),
        namespaces: &["ARB:"],
        extension_names: &["sampler_objects"],
        functions: &[
            ("glGenSamplers", EntryPoint::GenSamplers),
            ("glDeleteSamplers", EntryPoint::DeleteSamplers),
            ("glBindSampler", EntryPoint::BindSampler),
            ("glSamplerParameteri", EntryPoint::SamplerParameteri),
        ],
    },
    Capability {
        name: "only_gl3",
        min_gl: GLVersion::new(3, 0),
        gles: GlesAvailability::empty(),
        namespaces: &[],
        extension_names: &[],
        functions: &[("glGetStringi", EntryPoint::GetStringi)],
    },
    Capability {
        name: "vertex_array_object",
        min_gl: GLVersion::new(3, 0),
        gles: GlesAvailability::empty(),
        namespaces: &["ARB", "OES"],
        extension_names: &["vertex_array_object"],
        functions: &[
            ("glBindVertexArray", EntryPoint::BindVertexArray),
            ("glDeleteVertexArrays", EntryPoint::DeleteVertexArrays),
            ("glGenVertexArrays", EntryPoint::GenVertexArrays),
        ],
    },
    Capability {
        name: "sync",
        min_gl: GLVersion::new(3, 2),
        gles: GlesAvailability::empty(),
        namespaces: &["ARB:"],
        extension_names: &["sync"],
        functions: &[
            ("glFenceSync", EntryPoint::FenceSync),
            ("glClientWaitSync", EntryPoint::ClientWaitSync),
            ("glDeleteSync", EntryPoint::DeleteSync),
        ],
    },
    Capability {
        name: "draw_buffers",
        min_gl: GLVersion::new(2, 0),
        gles: GlesAvailability::GLES3,
        namespaces: &["ARB", "EXT"],
        extension_names: &["draw_buffers"],
        functions: &[("glDrawBuffers", EntryPoint::DrawBuffers)],
    },
    Capability {
        name: "instanced_arrays",
        min_gl: GLVersion::new(3, 1),
        gles: GlesAvailability::GLES3,
        namespaces: &["ANGLE", "ARB", "EXT"],
        extension_names: &["instanced_arrays"],
        functions: &[
            ("glVertexAttribDivisor", EntryPoint::VertexAttribDivisor),
            ("glDrawArraysInstanced", EntryPoint::DrawArraysInstanced),
            ("glDrawElementsInstanced", EntryPoint::DrawElementsInstanced),
        ],
    },
];

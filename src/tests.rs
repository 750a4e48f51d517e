// glcaps/src/tests.rs
//
//! Unit tests.

use crate::capability::{
    check_all_capabilities, check_capability, Capability, GlesAvailability, NEVER_IN_CORE_GL,
};
use crate::catalog;
use crate::device::{DeviceCapabilities, DriverInfo};
use crate::driver;
use crate::entry_points::{EntryPoint, EntryPointTable};
use crate::error::Error;
use crate::extensions::ExtensionSet;
use crate::features::FeatureFlags;
use crate::info::{GLApi, GLVersion};
use crate::loader::GlLoader;

use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::RefCell;
use std::collections::HashSet;
use std::os::raw::c_void;
use std::ptr;

static ADDRESSES: [u8; 4096] = [0; 4096];

/// Hands out a distinct, stable, non-null address for every symbol except the
/// ones listed as missing, and records every lookup it sees.
struct FakeLoader {
    missing: HashSet<String>,
    interned: RefCell<Vec<String>>,
    lookups: RefCell<Vec<(String, bool)>>,
}

impl FakeLoader {
    fn new() -> FakeLoader {
        FakeLoader::with_missing(&[])
    }

    fn with_missing(missing: &[&str]) -> FakeLoader {
        FakeLoader {
            missing: missing.iter().map(|name| name.to_string()).collect(),
            interned: RefCell::new(Vec::new()),
            lookups: RefCell::new(Vec::new()),
        }
    }

    fn looked_up(&self, symbol_name: &str) -> bool {
        self.lookups
            .borrow()
            .iter()
            .any(|(name, _)| name == symbol_name)
    }
}

impl GlLoader for FakeLoader {
    fn get_proc_address(&self, symbol_name: &str, in_core: bool) -> *const c_void {
        self.lookups
            .borrow_mut()
            .push((symbol_name.to_owned(), in_core));
        if self.missing.contains(symbol_name) {
            return ptr::null();
        }
        let mut interned = self.interned.borrow_mut();
        let index = match interned.iter().position(|name| name == symbol_name) {
            Some(index) => index,
            None => {
                interned.push(symbol_name.to_owned());
                interned.len() - 1
            }
        };
        &ADDRESSES[index] as *const u8 as *const c_void
    }
}

const VBOS: Capability = Capability {
    name: "vbos",
    min_gl: GLVersion::new(1, 5),
    gles: GlesAvailability::empty(),
    namespaces: &["ARB"],
    extension_names: &["vertex_buffer_object"],
    functions: &[
        ("glGenBuffers", EntryPoint::GenBuffers),
        ("glBindBuffer", EntryPoint::BindBuffer),
    ],
};

fn extension_set(names: &[&str]) -> ExtensionSet {
    names.iter().collect()
}

fn check(
    capability: &Capability,
    api: GLApi,
    version: GLVersion,
    extensions: &[&str],
    loader: &FakeLoader,
    table: &mut EntryPointTable,
) -> bool {
    check_capability(
        capability,
        "GL",
        api,
        version,
        &extension_set(extensions),
        loader,
        table,
    )
}

// The driver is too old for core VBOs but advertises the ARB extension, so
// the suffixed symbols must be bound.
#[test]
fn test_resolves_via_extension() {
    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    let found = check(
        &VBOS,
        GLApi::GL,
        GLVersion::new(1, 4),
        &["GL_ARB_vertex_buffer_object"],
        &loader,
        &mut table,
    );
    assert!(found);
    assert!(table.has(EntryPoint::GenBuffers));
    assert!(table.has(EntryPoint::BindBuffer));
    assert!(loader.looked_up("glGenBuffersARB"));
    assert!(loader.looked_up("glBindBufferARB"));
    assert!(!loader.looked_up("glGenBuffers"));
    assert_eq!(
        loader.lookups.borrow()[0],
        ("glGenBuffersARB".to_owned(), false)
    );
}

#[test]
fn test_resolves_via_core() {
    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    let found = check(&VBOS, GLApi::GL, GLVersion::new(2, 1), &[], &loader, &mut table);
    assert!(found);
    assert!(table.has(EntryPoint::GenBuffers));
    assert!(table.has(EntryPoint::BindBuffer));
    assert!(loader.looked_up("glGenBuffers"));
    assert!(loader.looked_up("glBindBuffer"));
    assert_eq!(loader.lookups.borrow()[0], ("glGenBuffers".to_owned(), true));
}

// Core must win even when a matching extension string is also advertised: no
// suffix on the symbol names.
#[test]
fn test_core_takes_precedence_over_extensions() {
    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    let found = check(
        &VBOS,
        GLApi::GL,
        GLVersion::new(1, 5),
        &["GL_ARB_vertex_buffer_object"],
        &loader,
        &mut table,
    );
    assert!(found);
    assert!(loader.looked_up("glGenBuffers"));
    assert!(!loader.looked_up("glGenBuffersARB"));
}

#[test]
fn test_unavailable_leaves_slots_null() {
    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    let found = check(&VBOS, GLApi::GL, GLVersion::new(1, 4), &[], &loader, &mut table);
    assert!(!found);
    assert!(!table.has(EntryPoint::GenBuffers));
    assert!(!table.has(EntryPoint::BindBuffer));
    assert!(loader.lookups.borrow().is_empty());
}

// A driver that advertises the extension string but is missing one of its
// entry points gets the whole group rolled back, not just the failing slot.
#[test]
fn test_missing_entry_point_nulls_whole_group() {
    let loader = FakeLoader::with_missing(&["glBindBufferARB"]);
    let mut table = EntryPointTable::new();
    let found = check(
        &VBOS,
        GLApi::GL,
        GLVersion::new(1, 4),
        &["GL_ARB_vertex_buffer_object"],
        &loader,
        &mut table,
    );
    assert!(!found);
    assert!(!table.has(EntryPoint::GenBuffers));
    assert!(!table.has(EntryPoint::BindBuffer));
}

#[test]
fn test_namespace_order_is_first_match_wins() {
    let arb_first = Capability {
        namespaces: &["ARB", "EXT"],
        ..VBOS
    };
    let ext_first = Capability {
        namespaces: &["EXT", "ARB"],
        ..VBOS
    };
    let extensions = [
        "GL_ARB_vertex_buffer_object",
        "GL_EXT_vertex_buffer_object",
    ];

    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    assert!(check(&arb_first, GLApi::GL, GLVersion::new(1, 4), &extensions, &loader, &mut table));
    assert!(loader.looked_up("glGenBuffersARB"));
    assert!(!loader.looked_up("glGenBuffersEXT"));

    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    assert!(check(&ext_first, GLApi::GL, GLVersion::new(1, 4), &extensions, &loader, &mut table));
    assert!(loader.looked_up("glGenBuffersEXT"));
    assert!(!loader.looked_up("glGenBuffersARB"));
}

#[test]
fn test_basename_order_is_first_match_wins() {
    let two_names = Capability {
        namespaces: &["OES"],
        extension_names: &["vertex_buffer_object", "mapbuffer"],
        ..VBOS
    };
    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    assert!(check(
        &two_names,
        GLApi::GL,
        GLVersion::new(1, 4),
        &["GL_OES_mapbuffer"],
        &loader,
        &mut table,
    ));
    assert!(loader.looked_up("glGenBuffersOES"));
}

// A namespace spelled "ARB:" checks for GL_ARB_<basename> but leaves the
// function names unsuffixed.
#[test]
fn test_namespace_with_separate_function_suffix() {
    let unsuffixed = Capability {
        namespaces: &["ARB:"],
        ..VBOS
    };
    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    let found = check(
        &unsuffixed,
        GLApi::GL,
        GLVersion::new(1, 4),
        &["GL_ARB_vertex_buffer_object"],
        &loader,
        &mut table,
    );
    assert!(found);
    assert!(loader.looked_up("glGenBuffers"));
    assert!(loader.looked_up("glBindBuffer"));
    assert!(!loader.looked_up("glGenBuffersARB"));
}

#[test]
fn test_gles_availability_mask() {
    let in_gles2 = Capability {
        gles: GlesAvailability::GLES2,
        namespaces: &[],
        extension_names: &[],
        ..VBOS
    };
    let in_gles3 = Capability {
        gles: GlesAvailability::GLES3,
        namespaces: &[],
        extension_names: &[],
        ..VBOS
    };

    // A GLES 3 context satisfies both GLES2- and GLES3-level requirements.
    for (capability, version, expected) in [
        (&in_gles2, GLVersion::new(2, 0), true),
        (&in_gles2, GLVersion::new(3, 0), true),
        (&in_gles3, GLVersion::new(2, 0), false),
        (&in_gles3, GLVersion::new(3, 0), true),
        (&in_gles3, GLVersion::new(3, 1), true),
    ] {
        let loader = FakeLoader::new();
        let mut table = EntryPointTable::new();
        let found = check(capability, GLApi::GLES, version, &[], &loader, &mut table);
        assert_eq!(found, expected, "GLES {}.{}", version.major, version.minor);
    }

    // The GLES flags never apply to desktop contexts.
    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    assert!(!check(&in_gles2, GLApi::GL, GLVersion::new(1, 4), &[], &loader, &mut table));
}

// Property: however symbol lookup fails, a capability's slots end up all
// non-null or all null, never a mix.
#[test]
fn test_all_or_nothing() {
    const FIVE_FUNCTIONS: Capability = Capability {
        name: "five_functions",
        min_gl: NEVER_IN_CORE_GL,
        gles: GlesAvailability::empty(),
        namespaces: &["EXT"],
        extension_names: &["five_functions"],
        functions: &[
            ("glGenBuffers", EntryPoint::GenBuffers),
            ("glBindBuffer", EntryPoint::BindBuffer),
            ("glBufferData", EntryPoint::BufferData),
            ("glBufferSubData", EntryPoint::BufferSubData),
            ("glDeleteBuffers", EntryPoint::DeleteBuffers),
        ],
    };

    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let count = rng.gen_range(0..=FIVE_FUNCTIONS.functions.len());
        let missing: Vec<String> = FIVE_FUNCTIONS
            .functions
            .choose_multiple(&mut rng, count)
            .map(|&(name, _)| [name, "EXT"].concat())
            .collect();
        let missing: Vec<&str> = missing.iter().map(String::as_str).collect();

        let loader = FakeLoader::with_missing(&missing);
        let mut table = EntryPointTable::new();
        let found = check(
            &FIVE_FUNCTIONS,
            GLApi::GL,
            GLVersion::new(2, 1),
            &["GL_EXT_five_functions"],
            &loader,
            &mut table,
        );

        assert_eq!(found, count == 0);
        for &(_, slot) in FIVE_FUNCTIONS.functions {
            assert_eq!(table.has(slot), found);
        }
    }
}

// Resolution is a pure function of the driver facts: two passes over the
// catalog produce identical tables.
#[test]
fn test_resolution_is_idempotent() {
    let loader = FakeLoader::new();
    let extensions = extension_set(&["GL_OES_EGL_image", "GL_EXT_framebuffer_discard"]);

    let mut first = EntryPointTable::new();
    check_all_capabilities(GLApi::GL, GLVersion::new(3, 3), &extensions, &loader, &mut first);
    let mut second = EntryPointTable::new();
    check_all_capabilities(GLApi::GL, GLVersion::new(3, 3), &extensions, &loader, &mut second);

    assert!(first == second);
}

#[test]
fn test_catalog_functions_are_not_empty() {
    for capability in catalog::CAPABILITIES {
        assert!(
            !capability.functions.is_empty(),
            "{} has no functions",
            capability.name
        );
    }
}

#[test]
fn test_catalog_slots_are_unique() {
    let mut seen = HashSet::new();
    for capability in catalog::CAPABILITIES {
        for &(name, slot) in capability.functions {
            assert!(
                seen.insert(slot),
                "{} is bound twice (at {})",
                name,
                capability.name
            );
        }
    }
    // Every slot in the table belongs to exactly one catalog entry.
    assert_eq!(seen.len(), EntryPoint::COUNT);
}

// The core-profile flavor uses the same desktop version gates as the
// compatibility profile.
#[test]
fn test_core_profile_behaves_like_desktop_gl() {
    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    assert!(check(&VBOS, GLApi::GLCore, GLVersion::new(1, 5), &[], &loader, &mut table));
    assert!(loader.looked_up("glGenBuffers"));

    let loader = FakeLoader::new();
    let mut table = EntryPointTable::new();
    assert!(!check(&VBOS, GLApi::GLCore, GLVersion::new(1, 4), &[], &loader, &mut table));
}

// On a new enough desktop driver with the catalog's never-in-core extensions
// advertised, every slot in the table resolves.
#[test]
fn test_catalog_resolves_fully_on_capable_driver() {
    let loader = FakeLoader::new();
    let extensions = extension_set(&[
        "GL_OES_EGL_image",
        "GL_EXT_framebuffer_discard",
        "GL_IMG_multisampled_render_to_texture",
    ]);
    let mut table = EntryPointTable::new();
    check_all_capabilities(GLApi::GL, GLVersion::new(4, 6), &extensions, &loader, &mut table);

    for capability in catalog::CAPABILITIES {
        for &(name, slot) in capability.functions {
            assert!(table.has(slot), "{} did not resolve", name);
        }
    }
}

#[test]
fn test_version_parsing() {
    assert_eq!(GLVersion::parse("2.1 Mesa 20.0.8"), Ok(GLVersion::new(2, 1)));
    assert_eq!(
        GLVersion::parse("4.6.0 NVIDIA 510.47.03"),
        Ok(GLVersion::new(4, 6))
    );
    assert_eq!(
        GLVersion::parse("OpenGL ES 3.0 V@415"),
        Ok(GLVersion::new(3, 0))
    );
    assert_eq!(GLVersion::parse("OpenGL ES-CM 1.1"), Ok(GLVersion::new(1, 1)));
    assert_eq!(GLVersion::parse("hopeless"), Err(Error::UnknownGLVersion));
    assert_eq!(GLVersion::parse(""), Err(Error::UnknownGLVersion));
}

#[test]
fn test_version_ordering() {
    assert!(GLVersion::new(3, 0) > GLVersion::new(2, 1));
    assert!(GLVersion::new(2, 1) > GLVersion::new(2, 0));
    assert!(GLVersion::new(1, 5) >= GLVersion::new(1, 5));
}

#[test]
fn test_extension_set() {
    let mut extensions =
        ExtensionSet::from_extension_string("GL_ARB_sync  GL_EXT_blend_color GL_OES_mapbuffer");
    assert_eq!(extensions.len(), 3);
    assert!(extensions.contains("GL_EXT_blend_color"));
    assert!(!extensions.contains("GL_ARB_depth_texture"));

    extensions.remove_disabled("GL_EXT_blend_color, GL_ARB_sync");
    assert!(!extensions.contains("GL_EXT_blend_color"));
    assert!(!extensions.contains("GL_ARB_sync"));
    assert!(extensions.contains("GL_OES_mapbuffer"));

    extensions.insert("GL_ARB_depth_texture");
    assert!(extensions.contains("GL_ARB_depth_texture"));
}

#[test]
fn test_desktop_version_gate() {
    let none = ExtensionSet::new();
    let multitexture = extension_set(&["GL_ARB_multitexture"]);

    assert_eq!(driver::gl::check_version(GLVersion::new(1, 3), &none), Ok(()));
    assert_eq!(
        driver::gl::check_version(GLVersion::new(1, 2), &none),
        Err(Error::RequiredExtensionUnavailable("GL_ARB_multitexture"))
    );
    assert_eq!(
        driver::gl::check_version(GLVersion::new(1, 2), &multitexture),
        Ok(())
    );
    assert_eq!(
        driver::gl::check_version(GLVersion::new(1, 1), &multitexture),
        Err(Error::UnsupportedGLVersion)
    );
}

fn desktop_info(major: u8, minor: u8, extensions: &[&str]) -> DriverInfo {
    DriverInfo {
        api: GLApi::GL,
        version: GLVersion::new(major, minor),
        glsl_version: Some(GLVersion::new(1, 2)),
        extensions: extension_set(extensions),
    }
}

#[test]
fn test_detect_modern_desktop_gl() {
    let loader = FakeLoader::new();
    let caps = DeviceCapabilities::detect(&desktop_info(3, 3, &[]), &loader).unwrap();

    assert_eq!(caps.glsl_version_to_use, 130);
    assert!(caps.has_features(
        FeatureFlags::GLSL
            | FeatureFlags::TEXTURE_NPOT
            | FeatureFlags::DEPTH_TEXTURE
            | FeatureFlags::MAP_BUFFER_FOR_READ
            | FeatureFlags::MAP_BUFFER_FOR_WRITE
            | FeatureFlags::PER_VERTEX_POINT_SIZE
            | FeatureFlags::POINT_SPRITE
            | FeatureFlags::FENCE
            | FeatureFlags::INSTANCES
            | FeatureFlags::TEXTURE_RG
    ));
    assert!(caps.entry_points().has(EntryPoint::GenVertexArrays));
    assert!(caps.entry_points().has(EntryPoint::GenSamplers));
    // Nothing advertised the EGL image extension, so that group stayed null.
    assert!(!caps.entry_points().has(EntryPoint::EGLImageTargetTexture2D));
}

#[test]
fn test_detect_legacy_desktop_gl() {
    let loader = FakeLoader::new();
    let extensions = [
        "GL_ARB_framebuffer_object",
        "GL_ARB_sampler_objects",
        "GL_EXT_texture_swizzle",
        "GL_ARB_texture_rg",
    ];
    let caps = DeviceCapabilities::detect(&desktop_info(2, 1, &extensions), &loader).unwrap();

    assert_eq!(caps.glsl_version_to_use, 120);
    assert!(caps.has_features(FeatureFlags::GLSL | FeatureFlags::POINT_SPRITE));
    // 2.1 is not new enough for VAOs and nothing advertised the extension.
    assert!(!caps.entry_points().has(EntryPoint::BindVertexArray));
}

#[test]
fn test_detect_requires_sampler_objects_on_desktop_gl() {
    let loader = FakeLoader::new();
    let extensions = [
        "GL_ARB_framebuffer_object",
        "GL_EXT_texture_swizzle",
        "GL_ARB_texture_rg",
    ];
    assert_eq!(
        DeviceCapabilities::detect(&desktop_info(2, 1, &extensions), &loader).err(),
        Some(Error::RequiredCapabilityUnavailable("sampler objects"))
    );
}

#[test]
fn test_detect_gles2() {
    let loader = FakeLoader::new();
    let info = DriverInfo {
        api: GLApi::GLES,
        version: GLVersion::new(2, 0),
        glsl_version: None,
        extensions: extension_set(&["GL_OES_element_index_uint", "GL_OES_mapbuffer"]),
    };
    let caps = DeviceCapabilities::detect(&info, &loader).unwrap();

    assert_eq!(caps.glsl_version_to_use, 100);
    assert!(caps.has_features(
        FeatureFlags::GLSL
            | FeatureFlags::UNSIGNED_INT_INDICES
            | FeatureFlags::MAP_BUFFER_FOR_WRITE
    ));
    // GL_OES_mapbuffer can't map for reading.
    assert!(!caps.has_features(FeatureFlags::MAP_BUFFER_FOR_READ));
    // Big-GL-only functions must stay unresolved on GLES.
    assert!(!caps.entry_points().has(EntryPoint::GetTexImage));
}

#[test]
fn test_detect_gles3_gets_instancing_in_core() {
    let loader = FakeLoader::new();
    let info = DriverInfo {
        api: GLApi::GLES,
        version: GLVersion::new(3, 0),
        glsl_version: None,
        extensions: ExtensionSet::new(),
    };
    let caps = DeviceCapabilities::detect(&info, &loader).unwrap();
    assert!(caps.has_features(FeatureFlags::INSTANCES));
    assert!(caps.entry_points().has(EntryPoint::DrawBuffers));
}

#[test]
fn test_detect_rejects_gles1() {
    let loader = FakeLoader::new();
    let info = DriverInfo {
        api: GLApi::GLES,
        version: GLVersion::new(1, 1),
        glsl_version: None,
        extensions: ExtensionSet::new(),
    };
    assert_eq!(
        DeviceCapabilities::detect(&info, &loader).err(),
        Some(Error::UnsupportedGLVersion)
    );
}

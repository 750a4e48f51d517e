// glcaps/src/loader.rs
//
//! Resolution of driver entry points by name.

use crate::error::Error;
use crate::info::GLApi;

use std::ffi::CString;
use std::os::raw::c_void;

#[cfg(target_os = "windows")]
use winapi::shared::minwindef::HMODULE;
#[cfg(target_os = "windows")]
use winapi::um::libloaderapi;
#[cfg(target_os = "windows")]
use winapi::um::winnt::LPCSTR;

/// Resolves driver entry points by name.
///
/// This is the one collaborator the windowing backend must supply: a
/// dynamic-symbol-table lookup that maps a function name to its address, or
/// null when the driver doesn't provide it.
///
/// `in_core` is a hint that the requested symbol is known to be part of core
/// GL for the active context. Backends on platforms where core symbols are
/// statically linked but extension symbols require a runtime query may pick a
/// different lookup strategy based on it, but the hint must never change the
/// result, only how it is obtained.
pub trait GlLoader {
    /// Fetches the address of the named driver function.
    fn get_proc_address(&self, symbol_name: &str, in_core: bool) -> *const c_void;
}

impl<F> GlLoader for F
where
    F: Fn(&str, bool) -> *const c_void,
{
    fn get_proc_address(&self, symbol_name: &str, in_core: bool) -> *const c_void {
        self(symbol_name, in_core)
    }
}

/// A loader that resolves symbols directly from the system GL library.
///
/// This only sees symbols the library itself exports. Drivers that route
/// extension entry points through `eglGetProcAddress` and friends need a
/// backend-supplied loader instead.
pub struct SystemLoader {
    #[cfg(not(target_os = "windows"))]
    library: *mut c_void,
    #[cfg(target_os = "windows")]
    library: HMODULE,
}

#[cfg(not(target_os = "windows"))]
impl SystemLoader {
    /// Opens the system library for the given API flavor.
    pub fn open(api: GLApi) -> Result<SystemLoader, Error> {
        let library_name: &[u8] = match api {
            GLApi::GL | GLApi::GLCore => b"libGL.so.1\0",
            GLApi::GLES => b"libGLESv2.so.2\0",
        };
        let library =
            unsafe { libc::dlopen(library_name.as_ptr() as *const _, libc::RTLD_LAZY) };
        if library.is_null() {
            return Err(Error::NoGLLibraryFound);
        }
        Ok(SystemLoader { library })
    }
}

#[cfg(not(target_os = "windows"))]
impl GlLoader for SystemLoader {
    fn get_proc_address(&self, symbol_name: &str, _in_core: bool) -> *const c_void {
        unsafe {
            let symbol_name = CString::new(symbol_name).unwrap();
            libc::dlsym(self.library, symbol_name.as_ptr()) as *const c_void
        }
    }
}

#[cfg(target_os = "windows")]
impl SystemLoader {
    /// Opens the system library for the given API flavor.
    pub fn open(api: GLApi) -> Result<SystemLoader, Error> {
        let library_name: &[u8] = match api {
            GLApi::GL | GLApi::GLCore => b"opengl32.dll\0",
            GLApi::GLES => b"libGLESv2.dll\0",
        };
        let library =
            unsafe { libloaderapi::LoadLibraryA(&library_name[0] as *const u8 as LPCSTR) };
        if library.is_null() {
            return Err(Error::NoGLLibraryFound);
        }
        Ok(SystemLoader { library })
    }
}

#[cfg(target_os = "windows")]
impl GlLoader for SystemLoader {
    fn get_proc_address(&self, symbol_name: &str, _in_core: bool) -> *const c_void {
        unsafe {
            let symbol_name = CString::new(symbol_name).unwrap();
            let symbol_ptr = symbol_name.as_ptr() as *const u8 as LPCSTR;
            libloaderapi::GetProcAddress(self.library, symbol_ptr) as *const c_void
        }
    }
}

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_void};
use std::path::Path;
use std::ptr;

use crate::config::{MilkcatCursorHandle, MilkcatHandle, MilkcatItemRaw, MilkcatModelHandle};
use crate::error::{MilkcatError, Result};

pub(crate) type FnMilkcatModelNew = unsafe extern "C" fn(*const c_char) -> MilkcatModelHandle;
pub(crate) type FnMilkcatModelDestroy = unsafe extern "C" fn(MilkcatModelHandle);
pub(crate) type FnMilkcatModelSetUserdict =
    unsafe extern "C" fn(MilkcatModelHandle, *const c_char) -> c_int;
pub(crate) type FnMilkcatNew = unsafe extern "C" fn(MilkcatModelHandle, c_int) -> MilkcatHandle;
pub(crate) type FnMilkcatParserNew =
    unsafe extern "C" fn(MilkcatModelHandle, c_int, c_int) -> MilkcatHandle;
pub(crate) type FnMilkcatDestroy = unsafe extern "C" fn(MilkcatHandle);
pub(crate) type FnMilkcatCursorNew = unsafe extern "C" fn() -> MilkcatCursorHandle;
pub(crate) type FnMilkcatCursorDestroy = unsafe extern "C" fn(MilkcatCursorHandle);
pub(crate) type FnMilkcatAnalyze =
    unsafe extern "C" fn(MilkcatHandle, MilkcatCursorHandle, *const c_char);
pub(crate) type FnMilkcatCursorGetNext =
    unsafe extern "C" fn(MilkcatCursorHandle, *mut MilkcatItemRaw) -> c_int;
pub(crate) type FnMilkcatLastError = unsafe extern "C" fn() -> *const c_char;
pub(crate) type FnMilkcatVersion = unsafe extern "C" fn() -> *const c_char;

#[derive(Clone, Copy)]
pub(crate) struct MilkcatApi {
    pub(crate) milkcat_model_new: FnMilkcatModelNew,
    pub(crate) milkcat_model_destroy: FnMilkcatModelDestroy,
    pub(crate) milkcat_model_set_userdict: FnMilkcatModelSetUserdict,
    pub(crate) milkcat_new: FnMilkcatNew,
    pub(crate) milkcat_parser_new: Option<FnMilkcatParserNew>,
    pub(crate) milkcat_destroy: FnMilkcatDestroy,
    pub(crate) milkcat_cursor_new: FnMilkcatCursorNew,
    pub(crate) milkcat_cursor_destroy: FnMilkcatCursorDestroy,
    pub(crate) milkcat_analyze: FnMilkcatAnalyze,
    pub(crate) milkcat_cursor_get_next: FnMilkcatCursorGetNext,
    pub(crate) milkcat_last_error: FnMilkcatLastError,
    pub(crate) milkcat_version: Option<FnMilkcatVersion>,
}

impl MilkcatApi {
    pub(crate) unsafe fn load(library: &DynamicLibrary) -> Result<Self> {
        Ok(Self {
            milkcat_model_new: library.load_symbol("milkcat_model_new")?,
            milkcat_model_destroy: library.load_symbol("milkcat_model_destroy")?,
            milkcat_model_set_userdict: library.load_symbol("milkcat_model_set_userdict")?,
            milkcat_new: library.load_symbol("milkcat_new")?,
            milkcat_parser_new: library.load_symbol_optional("milkcat_parser_new")?,
            milkcat_destroy: library.load_symbol("milkcat_destroy")?,
            milkcat_cursor_new: library.load_symbol("milkcat_cursor_new")?,
            milkcat_cursor_destroy: library.load_symbol("milkcat_cursor_destroy")?,
            milkcat_analyze: library.load_symbol("milkcat_analyze")?,
            milkcat_cursor_get_next: library.load_symbol("milkcat_cursor_get_next")?,
            milkcat_last_error: library.load_symbol("milkcat_last_error")?,
            milkcat_version: library.load_symbol_optional("milkcat_version")?,
        })
    }
}

/// Resolved symbol table plus the library that keeps it alive.
///
/// `_library` is `None` only for in-process tables installed by tests.
pub(crate) struct LoadedLibrary {
    pub(crate) _library: Option<DynamicLibrary>,
    pub(crate) api: MilkcatApi,
}

#[derive(Debug)]
pub(crate) struct DynamicLibrary {
    handle: *mut c_void,
}

// The loader handle is process-global and only read after `open`.
unsafe impl Send for DynamicLibrary {}
unsafe impl Sync for DynamicLibrary {}

impl DynamicLibrary {
    pub(crate) fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_string = path.as_ref().to_string_lossy().to_string();
        let path_c = CString::new(path_string.clone())?;
        let handle = unsafe { platform_open(path_c.as_ptr()) };
        if handle.is_null() {
            return Err(MilkcatError::LibraryLoad(format!(
                "{} ({})",
                path_string,
                platform_last_error()
            )));
        }
        Ok(Self { handle })
    }

    pub(crate) unsafe fn load_symbol<T: Copy>(&self, symbol_name: &str) -> Result<T> {
        let symbol_c = CString::new(symbol_name)?;
        let symbol_ptr = platform_symbol(self.handle, symbol_c.as_ptr());
        if symbol_ptr.is_null() {
            return Err(MilkcatError::SymbolLoad(format!(
                "{} ({})",
                symbol_name,
                platform_last_error()
            )));
        }
        Ok(std::mem::transmute_copy::<*mut c_void, T>(&symbol_ptr))
    }

    pub(crate) unsafe fn load_symbol_optional<T: Copy>(
        &self,
        symbol_name: &str,
    ) -> Result<Option<T>> {
        let symbol_c = CString::new(symbol_name)?;
        let symbol_ptr = platform_symbol(self.handle, symbol_c.as_ptr());
        if symbol_ptr.is_null() {
            return Ok(None);
        }
        Ok(Some(std::mem::transmute_copy::<*mut c_void, T>(
            &symbol_ptr,
        )))
    }
}

impl Drop for DynamicLibrary {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe {
            platform_close(self.handle);
        }
        self.handle = ptr::null_mut();
    }
}

/// Reads `milkcat_last_error`, returning `None` when the engine has nothing to say.
pub(crate) fn read_last_error(api: &MilkcatApi) -> Option<String> {
    let message_ptr = unsafe { (api.milkcat_last_error)() };
    if message_ptr.is_null() {
        return None;
    }
    let message = unsafe { CStr::from_ptr(message_ptr) }
        .to_string_lossy()
        .trim()
        .to_string();
    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

pub(crate) fn last_error_or(api: &MilkcatApi, fallback: &str) -> String {
    read_last_error(api).unwrap_or_else(|| fallback.to_string())
}

/// Copies a borrowed C string out; invalid UTF-8 is replaced with U+FFFD.
pub(crate) fn cstr_to_string(pointer: *const c_char) -> String {
    if pointer.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(pointer) }
        .to_string_lossy()
        .to_string()
}

#[cfg(target_os = "windows")]
#[link(name = "kernel32")]
extern "system" {
    fn LoadLibraryA(lp_lib_file_name: *const c_char) -> *mut c_void;
    fn GetProcAddress(h_module: *mut c_void, lp_proc_name: *const c_char) -> *mut c_void;
    fn FreeLibrary(h_lib_module: *mut c_void) -> i32;
    fn GetLastError() -> u32;
}

#[cfg(target_os = "windows")]
unsafe fn platform_open(path: *const c_char) -> *mut c_void {
    LoadLibraryA(path)
}

#[cfg(target_os = "windows")]
unsafe fn platform_symbol(handle: *mut c_void, symbol: *const c_char) -> *mut c_void {
    GetProcAddress(handle, symbol)
}

#[cfg(target_os = "windows")]
unsafe fn platform_close(handle: *mut c_void) {
    let _ = FreeLibrary(handle);
}

#[cfg(target_os = "windows")]
fn platform_last_error() -> String {
    format!("GetLastError={}", unsafe { GetLastError() })
}

#[cfg(target_os = "linux")]
#[link(name = "dl")]
extern "C" {
    fn dlopen(filename: *const c_char, flags: c_int) -> *mut c_void;
    fn dlsym(handle: *mut c_void, symbol: *const c_char) -> *mut c_void;
    fn dlclose(handle: *mut c_void) -> c_int;
    fn dlerror() -> *const c_char;
}

#[cfg(target_os = "macos")]
extern "C" {
    fn dlopen(filename: *const c_char, flags: c_int) -> *mut c_void;
    fn dlsym(handle: *mut c_void, symbol: *const c_char) -> *mut c_void;
    fn dlclose(handle: *mut c_void) -> c_int;
    fn dlerror() -> *const c_char;
}

#[cfg(unix)]
unsafe fn platform_open(path: *const c_char) -> *mut c_void {
    const RTLD_NOW: c_int = 2;
    const RTLD_LOCAL: c_int = 0;
    dlopen(path, RTLD_NOW | RTLD_LOCAL)
}

#[cfg(unix)]
unsafe fn platform_symbol(handle: *mut c_void, symbol: *const c_char) -> *mut c_void {
    dlsym(handle, symbol)
}

#[cfg(unix)]
unsafe fn platform_close(handle: *mut c_void) {
    let _ = dlclose(handle);
}

#[cfg(unix)]
fn platform_last_error() -> String {
    let pointer = unsafe { dlerror() };
    if pointer.is_null() {
        "unknown error".to_string()
    } else {
        let full = unsafe { CStr::from_ptr(pointer) }
            .to_string_lossy()
            .to_string();
        full.split(": tried:").next().unwrap_or(&full).to_string()
    }
}

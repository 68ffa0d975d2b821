//! C ABI binding
//!
//! Entry points are plain `extern "C"` functions returning a 32-bit signed integer:
//!
//! | Category | Signature |
//! |---|---|
//! | unit test runner | `int32_t count_cases(void)`, `int32_t run_all(void)` |
//! | compressor | `int32_t run(void)` |
//! | decompressor | `int32_t run(const toolhost_bundle* bundle, const char* output_dir)` |
//! | regression tester | `int32_t run(const toolhost_bundle* bundle)` |
//!
//! The bundle reaches native code as an opaque pointer that is only valid for the
//! duration of the call. Entries are looked up with [`toolhost_bundle_entry_size`] and
//! [`toolhost_bundle_entry_read`] using NUL-terminated `/`-separated keys. The output
//! directory is a NUL-terminated absolute path.

use std::ffi::{CStr, CString, c_char};
use std::fs;
use std::path::Path;
use std::ptr;

use tracing::error;

use super::{Compressor, Decompressor, RegressionTester, UNREADABLE_RESULT, UnitTestRunner};
use crate::resources::{OutputLocation, ResourceBundle};

/// Returned by the bundle accessors when the handle, key or entry is invalid
pub const ENTRY_NOT_FOUND: i64 = -1;

/// Returned by [`toolhost_bundle_entry_read`] when the entry does not fit the buffer
pub const BUFFER_TOO_SMALL: i64 = -2;

/// Opaque bundle type seen by native code
#[repr(C)]
pub struct BundleHandle {
    _private: [u8; 0],
}

pub type CountCasesFn = unsafe extern "C" fn() -> i32;
pub type RunAllFn = unsafe extern "C" fn() -> i32;
pub type CompressorRunFn = unsafe extern "C" fn() -> i32;
pub type DecompressorRunFn =
    unsafe extern "C" fn(bundle: *const BundleHandle, output_dir: *const c_char) -> i32;
pub type RegressionRunFn = unsafe extern "C" fn(bundle: *const BundleHandle) -> i32;

/// Borrow a bundle as the opaque handle handed to native code
pub fn bundle_handle(bundle: &ResourceBundle) -> *const BundleHandle {
    ptr::from_ref(bundle).cast()
}

unsafe fn bundle_from_handle<'a>(handle: *const BundleHandle) -> Option<&'a ResourceBundle> {
    // SAFETY: non-null handles only ever come from `bundle_handle`
    unsafe { handle.cast::<ResourceBundle>().as_ref() }
}

unsafe fn key_from_ptr<'a>(key: *const c_char) -> Option<&'a str> {
    if key.is_null() {
        return None;
    }
    // SAFETY: caller passes a NUL-terminated string
    unsafe { CStr::from_ptr(key) }.to_str().ok()
}

/// Size in bytes of the entry named `key`, or [`ENTRY_NOT_FOUND`]
///
/// # Safety
///
/// `handle` must be a handle received by an entry point that has not yet returned, and
/// `key` a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn toolhost_bundle_entry_size(
    handle: *const BundleHandle,
    key: *const c_char,
) -> i64 {
    let (Some(bundle), Some(key)) = (unsafe { bundle_from_handle(handle) }, unsafe {
        key_from_ptr(key)
    }) else {
        return ENTRY_NOT_FOUND;
    };

    bundle
        .path_of(key)
        .ok()
        .and_then(|path| fs::metadata(path).ok())
        .filter(fs::Metadata::is_file)
        .map_or(ENTRY_NOT_FOUND, |meta| {
            i64::try_from(meta.len()).unwrap_or(i64::MAX)
        })
}

/// Copy the entry named `key` into `buffer`, returning the number of bytes written
///
/// # Safety
///
/// Same requirements as [`toolhost_bundle_entry_size`]; additionally `buffer` must be
/// valid for `capacity` bytes of writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn toolhost_bundle_entry_read(
    handle: *const BundleHandle,
    key: *const c_char,
    buffer: *mut u8,
    capacity: usize,
) -> i64 {
    let (Some(bundle), Some(key)) = (unsafe { bundle_from_handle(handle) }, unsafe {
        key_from_ptr(key)
    }) else {
        return ENTRY_NOT_FOUND;
    };

    let Ok(bytes) = bundle.read(key) else {
        return ENTRY_NOT_FOUND;
    };

    if bytes.len() > capacity || (buffer.is_null() && !bytes.is_empty()) {
        return BUFFER_TOO_SMALL;
    }

    if !bytes.is_empty() {
        // SAFETY: buffer holds at least `capacity >= bytes.len()` bytes
        unsafe { ptr::copy_nonoverlapping(bytes.as_ptr(), buffer, bytes.len()) };
    }

    i64::try_from(bytes.len()).unwrap_or(i64::MAX)
}

fn path_to_cstring(path: &Path) -> Option<CString> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        CString::new(path.as_os_str().as_bytes()).ok()
    }
    #[cfg(not(unix))]
    {
        CString::new(path.to_string_lossy().into_owned()).ok()
    }
}

/// Unit test runner reached through two C entry points
pub struct FfiUnitTestRunner {
    count_cases: CountCasesFn,
    run_all: RunAllFn,
}

impl FfiUnitTestRunner {
    /// # Safety
    ///
    /// Both functions must be safe to call from any thread with no arguments.
    pub unsafe fn new(count_cases: CountCasesFn, run_all: RunAllFn) -> Self {
        Self {
            count_cases,
            run_all,
        }
    }
}

impl UnitTestRunner for FfiUnitTestRunner {
    fn count_cases(&self) -> i32 {
        // SAFETY: upheld by the constructor contract
        unsafe { (self.count_cases)() }
    }

    fn run_all(&self) -> i32 {
        // SAFETY: upheld by the constructor contract
        unsafe { (self.run_all)() }
    }
}

/// Compressor reached through a C entry point
pub struct FfiCompressor {
    run: CompressorRunFn,
}

impl FfiCompressor {
    /// # Safety
    ///
    /// `run` must be safe to call from any thread with no arguments.
    pub unsafe fn new(run: CompressorRunFn) -> Self {
        Self { run }
    }
}

impl Compressor for FfiCompressor {
    fn run(&self) -> i32 {
        // SAFETY: upheld by the constructor contract
        unsafe { (self.run)() }
    }
}

/// Decompressor reached through a C entry point
pub struct FfiDecompressor {
    run: DecompressorRunFn,
}

impl FfiDecompressor {
    /// # Safety
    ///
    /// `run` must only use the bundle handle and output path for the duration of the
    /// call.
    pub unsafe fn new(run: DecompressorRunFn) -> Self {
        Self { run }
    }
}

impl Decompressor for FfiDecompressor {
    fn run(&self, bundle: &ResourceBundle, output: &OutputLocation) -> i32 {
        let Some(output_dir) = path_to_cstring(output.path()) else {
            error!(path = %output.path().display(), "output path cannot be passed to native code");
            return UNREADABLE_RESULT;
        };

        // SAFETY: both pointers outlive the call
        unsafe { (self.run)(bundle_handle(bundle), output_dir.as_ptr()) }
    }
}

/// Regression tester reached through a C entry point
pub struct FfiRegressionTester {
    run: RegressionRunFn,
}

impl FfiRegressionTester {
    /// # Safety
    ///
    /// `run` must only use the bundle handle for the duration of the call.
    pub unsafe fn new(run: RegressionRunFn) -> Self {
        Self { run }
    }
}

impl RegressionTester for FfiRegressionTester {
    fn run(&self, bundle: &ResourceBundle) -> i32 {
        // SAFETY: the handle outlives the call
        unsafe { (self.run)(bundle_handle(bundle)) }
    }
}

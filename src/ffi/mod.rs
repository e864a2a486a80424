//! FFI layer – each sub-module exposes one domain area of the C API.
//!
//! Types and helper functions that are shared across sub-modules live here
//! (macros, pointer helpers, status codes).

use std::ffi::{c_char, CStr};
use std::path::Path;

// Domain modules
pub mod engine;


// Re-export all public FFI symbols so `pub use ffi::*;` in lib.rs works.
pub use engine::*;

/// Call succeeded.
pub const DETRANS_OK: i32 = 0;
/// `detrans_init` or `detrans_set_settings` called after initialization.
pub const DETRANS_ALREADY_INITIALIZED: i32 = 1;
/// `detrans_shutdown` called without a live engine.
pub const DETRANS_NOT_INITIALIZED: i32 = 2;
/// The engine could not be built.
pub const DETRANS_INIT_FAILED: i32 = 3;
/// Null pointer, invalid UTF-8, or unparsable configuration.
pub const DETRANS_INVALID_ARGUMENT: i32 = 4;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Validate one or more FFI arguments and bind them as safe Rust values,
/// returning `$on_err` from the **calling** function if any check fails.
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `$ptr: *const c_char`, convert via [`cptr_to_str`] to `&str`, bind as `$name`. |
///
/// ```ignore
/// ffi_guard!(ptr::null_mut();
///     str: text_str = text,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

// Make macros available to sub-modules.
pub(crate) use ffi_guard;

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn detrans_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn detrans_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}

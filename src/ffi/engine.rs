use std::ffi::{c_char, CString};
use std::ptr;
use std::sync::{PoisonError, RwLock};

use detrans_core::settings;
use detrans_core::Engine;
use tracing::debug;

use super::{
    ffi_guard, DETRANS_ALREADY_INITIALIZED, DETRANS_INIT_FAILED, DETRANS_INVALID_ARGUMENT,
    DETRANS_NOT_INITIALIZED, DETRANS_OK,
};

/// Process-wide engine shared by every plugin entry point.
///
/// Conversions hold the read lock, so `detrans_shutdown` (write lock) waits
/// for in-flight conversions and a converted string never outlives a
/// half-dropped engine.
static ENGINE: RwLock<Option<Engine>> = RwLock::new(None);

// --- Lifecycle ---

/// Install a settings TOML document. Must precede the first `detrans_init`.
#[no_mangle]
pub extern "C" fn detrans_set_settings(toml: *const c_char) -> i32 {
    ffi_guard!(DETRANS_INVALID_ARGUMENT;
        str: toml_str = toml,
    );
    match settings::init_custom(toml_str.to_string()) {
        Ok(()) => DETRANS_OK,
        Err(settings::SettingsError::AlreadyInitialized) => DETRANS_ALREADY_INITIALIZED,
        Err(e) => {
            debug!("detrans_set_settings rejected: {e}");
            DETRANS_INVALID_ARGUMENT
        }
    }
}

#[no_mangle]
pub extern "C" fn detrans_init() -> i32 {
    let mut slot = ENGINE.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        debug!("detrans_init: already initialized");
        return DETRANS_ALREADY_INITIALIZED;
    }
    match Engine::initialize() {
        Ok(engine) => {
            *slot = Some(engine);
            DETRANS_OK
        }
        Err(e) => {
            debug!("detrans_init failed: {e}");
            DETRANS_INIT_FAILED
        }
    }
}

#[no_mangle]
pub extern "C" fn detrans_shutdown() -> i32 {
    let mut slot = ENGINE.write().unwrap_or_else(PoisonError::into_inner);
    match slot.take() {
        Some(engine) => {
            engine.shutdown();
            DETRANS_OK
        }
        None => DETRANS_NOT_INITIALIZED,
    }
}

#[no_mangle]
pub extern "C" fn detrans_is_initialized() -> u8 {
    let slot = ENGINE.read().unwrap_or_else(PoisonError::into_inner);
    slot.is_some() as u8
}

// --- Conversion ---

/// De-transliterate a NUL-terminated UTF-8 message.
///
/// Returns a newly allocated string owned by the caller (free it with
/// `detrans_string_free`), or null if the engine is not initialized, `text`
/// is null or not UTF-8, or the output could not be allocated.
#[no_mangle]
pub extern "C" fn detrans_convert(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    let slot = ENGINE.read().unwrap_or_else(PoisonError::into_inner);
    let Some(engine) = slot.as_ref() else {
        debug!("detrans_convert: not initialized");
        return ptr::null_mut();
    };
    let out = match engine.convert(text_str) {
        Ok(out) => out,
        Err(e) => {
            debug!("detrans_convert failed: {e}");
            return ptr::null_mut();
        }
    };
    match CString::new(out) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn detrans_string_free(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: non-null pointers passed here come from `CString::into_raw`
        // in `detrans_convert` and are freed at most once by contract.
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

//! C ABI over `detrans-core` for chat-client plugins.
//!
//! Plugins call `detrans_init` once on load, `detrans_convert` for each
//! message they route through de-transliteration, and `detrans_shutdown` on
//! unload. Strings returned by `detrans_convert` are released with
//! `detrans_string_free`.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use detrans_core::{Engine, EngineError};
pub use ffi::*;

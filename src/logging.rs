//! Console logging for the browser build.
//!
//! Imported web-sys functions panic when called off `wasm32`, so on native
//! targets these macros only type-check their arguments.

macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ::web_sys::console::log_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! console_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ::web_sys::console::debug_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ::web_sys::console::warn_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($arg)*);
    }};
}

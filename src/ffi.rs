//! C ABI.
//!
//! Every entry point catches panics and reports failure through its return
//! value (null, 0 or -1), so no unwind ever crosses into C. A handle is
//! owned by exactly one caller from [`pdf_create_simple`] until
//! [`pdf_free`]; the data pointer from [`pdf_get_data`] borrows from it.

use crate::api::SimpleDocument;
use std::ffi::{c_char, c_int, CStr};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Opaque document handle handed to C callers.
pub struct PdfHandle {
    doc: SimpleDocument,
}

/// Create a single-page PDF containing `text` at `font_size` points.
///
/// Returns null if `text` is null or not UTF-8, if the font size is not
/// finite or is below 0.00001, or if the text contains characters the font
/// cannot encode.
///
/// # Safety
///
/// `text` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn pdf_create_simple(text: *const c_char, font_size: f64) -> *mut PdfHandle {
    if text.is_null() {
        log::warn!("pdf_create_simple: text is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(AssertUnwindSafe(|| {
        let text = match CStr::from_ptr(text).to_str() {
            Ok(text) => text,
            Err(e) => {
                log::warn!("pdf_create_simple: text is not valid UTF-8: {}", e);
                return ptr::null_mut();
            },
        };
        match SimpleDocument::build(text, font_size) {
            Ok(doc) => Box::into_raw(Box::new(PdfHandle { doc })),
            Err(e) => {
                log::warn!("pdf_create_simple failed: {}", e);
                ptr::null_mut()
            },
        }
    }));

    result.unwrap_or_else(|_| {
        log::error!("pdf_create_simple panicked");
        ptr::null_mut()
    })
}

/// Expose the PDF bytes held by `handle`.
///
/// Stores a pointer to the bytes in `*out_data` and returns their length.
/// Returns 0 and leaves `*out_data` untouched if either argument is null.
/// The pointer stays valid until the handle is freed.
///
/// # Safety
///
/// `handle` must be null or a live handle from [`pdf_create_simple`];
/// `out_data` must be null or valid for a pointer-sized write.
#[no_mangle]
pub unsafe extern "C" fn pdf_get_data(handle: *const PdfHandle, out_data: *mut *const u8) -> usize {
    if handle.is_null() || out_data.is_null() {
        return 0;
    }

    catch_unwind(AssertUnwindSafe(|| {
        let bytes = (*handle).doc.as_bytes();
        *out_data = bytes.as_ptr();
        bytes.len()
    }))
    .unwrap_or(0)
}

/// Write the PDF held by `handle` to `path`, creating or truncating it.
///
/// Returns 0 on success and -1 on any failure.
///
/// # Safety
///
/// `handle` must be null or a live handle from [`pdf_create_simple`];
/// `path` must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn pdf_save_to_file(handle: *const PdfHandle, path: *const c_char) -> c_int {
    if handle.is_null() || path.is_null() {
        return -1;
    }

    let result = catch_unwind(AssertUnwindSafe(|| {
        let path = match CStr::from_ptr(path).to_str() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("pdf_save_to_file: path is not valid UTF-8: {}", e);
                return -1;
            },
        };
        match (*handle).doc.save(path) {
            Ok(()) => 0,
            Err(e) => {
                log::warn!("pdf_save_to_file: {}: {}", path, e);
                -1
            },
        }
    }));

    result.unwrap_or(-1)
}

/// Release a handle. Null is ignored.
///
/// # Safety
///
/// `handle` must be null or a handle from [`pdf_create_simple`] that has
/// not been freed yet. It must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn pdf_free(handle: *mut PdfHandle) {
    if handle.is_null() {
        return;
    }
    let _ = catch_unwind(AssertUnwindSafe(|| {
        drop(Box::from_raw(handle));
    }));
}

/// Library version as a static NUL-terminated string. Do not free it.
#[no_mangle]
pub extern "C" fn pdf_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

//! C FFI surface for catalog.
//!
//! Pattern: opaque MediaListHandle + C strings + JSON serialization.
//! Load outcomes are delivered through a C callback registered per load.
//!
//! Flutter/Dart calls these via `dart:ffi`. Any platform with C FFI
//! (Swift, Kotlin, Python, Node.js) can use this.

use std::cell::RefCell;
use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::sync::Arc;

use catalog_core::{LoadError, MediaList, MediaListListener, MediaTree};
use parking_lot::Mutex;

// ---------------------------------------------------------------------------
// Error handling (thread-local last error)
// ---------------------------------------------------------------------------

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_error(msg: String) {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(msg));
}

fn clear_error() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}

/// Returns the last error message (caller frees with `catalog_string_free`).
#[no_mangle]
pub extern "C" fn catalog_last_error() -> *mut c_char {
    LAST_ERROR.with(|cell| {
        cell.borrow_mut()
            .take()
            .map(|s| c_string(s).into_raw())
            .unwrap_or(ptr::null_mut())
    })
}

/// Frees a string returned from catalog FFI.
///
/// # Safety
/// Must be a pointer returned from this FFI and not already freed.
#[no_mangle]
pub unsafe extern "C" fn catalog_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

/// Installs env_logger (honours `RUST_LOG`). Safe to call more than once.
#[no_mangle]
pub extern "C" fn catalog_init_logging() {
    let _ = env_logger::try_init();
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

/// Load outcome callback.
///
/// `ok` is 1 with the tree as JSON, or 0 with an error message. `payload` is
/// only valid for the duration of the call. Invoked on a background thread.
pub type LoadCallback = extern "C" fn(user_data: *mut c_void, ok: i32, payload: *const c_char);

#[derive(Clone, Copy)]
struct Callback {
    func: LoadCallback,
    user_data: *mut c_void,
}

// The host owns `user_data` and promises it may be used from any thread.
unsafe impl Send for Callback {}
unsafe impl Sync for Callback {}

impl Callback {
    fn fire(&self, ok: bool, payload: String) {
        let payload = c_string(payload);
        (self.func)(self.user_data, ok as i32, payload.as_ptr());
    }
}

/// Routes listener events to whichever callback the latest `catalog_load`
/// registered.
#[derive(Default)]
struct CallbackListener {
    callback: Mutex<Option<Callback>>,
}

impl MediaListListener for CallbackListener {
    fn on_loaded(&self, tree: &MediaTree) {
        let Some(callback) = *self.callback.lock() else {
            return;
        };
        match serde_json::to_string(tree) {
            Ok(json) => callback.fire(true, json),
            Err(e) => callback.fire(false, format!("serialize tree: {}", e)),
        }
    }

    fn on_load_failed(&self, error: &LoadError) {
        let Some(callback) = *self.callback.lock() else {
            return;
        };
        callback.fire(false, error.to_string());
    }
}

// ---------------------------------------------------------------------------
// Opaque handle
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct MediaListHandle {
    _private: [u8; 0],
}

struct MediaListHandleInner {
    list: MediaList,
    listener: Arc<CallbackListener>,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Opens a media list over the HTTP transport. Returns an opaque handle.
#[no_mangle]
pub extern "C" fn catalog_open() -> *mut MediaListHandle {
    clear_error();
    let listener = Arc::new(CallbackListener::default());
    let list = MediaList::with_http(listener.clone());
    Box::into_raw(Box::new(MediaListHandleInner { list, listener })) as *mut MediaListHandle
}

/// Cancels any in-flight load and releases the handle.
#[no_mangle]
pub extern "C" fn catalog_close(handle: *mut MediaListHandle) {
    if !handle.is_null() {
        unsafe {
            let inner = Box::from_raw(handle as *mut MediaListHandleInner);
            inner.list.cancel_load();
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Starts loading `url`, superseding any in-flight load. `callback` fires at
/// most once, unless the load is cancelled or superseded first.
/// Returns 1 if the load started, 0 on error.
#[no_mangle]
pub extern "C" fn catalog_load(
    handle: *mut MediaListHandle,
    url: *const c_char,
    callback: LoadCallback,
    user_data: *mut c_void,
) -> i32 {
    clear_error();
    let inner = match inner_ref(handle) {
        Ok(i) => i,
        Err(e) => return err_zero(e),
    };
    let url = match read_cstr(url) {
        Ok(u) => u,
        Err(e) => return err_zero(e),
    };

    // Cancel first so the old request can never see the new callback.
    inner.list.cancel_load();
    *inner.listener.callback.lock() = Some(Callback {
        func: callback,
        user_data,
    });
    inner.list.load(&url);
    1
}

/// Cancels the in-flight load, if any.
#[no_mangle]
pub extern "C" fn catalog_cancel(handle: *mut MediaListHandle) -> i32 {
    clear_error();
    match inner_ref(handle) {
        Ok(inner) => {
            inner.list.cancel_load();
            1
        }
        Err(e) => err_zero(e),
    }
}

/// 1 if a tree has been loaded, 0 if not, -1 on error.
#[no_mangle]
pub extern "C" fn catalog_is_loaded(handle: *mut MediaListHandle) -> i32 {
    clear_error();
    match inner_ref(handle) {
        Ok(inner) => inner.list.is_loaded() as i32,
        Err(e) => {
            set_error(e);
            -1
        }
    }
}

/// Current tree as JSON (caller frees), or NULL if nothing is loaded.
#[no_mangle]
pub extern "C" fn catalog_tree(handle: *mut MediaListHandle) -> *mut c_char {
    clear_error();
    let inner = match inner_ref(handle) {
        Ok(i) => i,
        Err(e) => return err_null(e),
    };
    match inner.list.tree() {
        Some(tree) => json_to_cstr(&*tree),
        None => ptr::null_mut(),
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decodes a feed document synchronously. Returns the tree as JSON (caller
/// frees), or NULL with the reason in `catalog_last_error`.
#[no_mangle]
pub extern "C" fn catalog_decode(json: *const c_char) -> *mut c_char {
    clear_error();
    let text = match read_cstr(json) {
        Ok(t) => t,
        Err(e) => return err_null(e),
    };
    match catalog_core::decode_slice(text.as_bytes()) {
        Ok(tree) => json_to_cstr(&tree),
        Err(e) => err_null(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn inner_ref<'a>(handle: *mut MediaListHandle) -> Result<&'a MediaListHandleInner, String> {
    if handle.is_null() {
        return Err("null media list handle".into());
    }
    Ok(unsafe { &*(handle as *mut MediaListHandleInner) })
}

fn read_cstr(ptr: *const c_char) -> Result<String, String> {
    if ptr.is_null() {
        return Err("null string pointer".into());
    }
    unsafe {
        CStr::from_ptr(ptr)
            .to_str()
            .map(String::from)
            .map_err(|_| "invalid utf-8".into())
    }
}

fn json_to_cstr<T: serde::Serialize>(value: &T) -> *mut c_char {
    match serde_json::to_string(value) {
        Ok(json) => to_cstr(json),
        Err(e) => err_null(e.to_string()),
    }
}

fn to_cstr(s: String) -> *mut c_char {
    c_string(s).into_raw()
}

/// Feed text may carry NULs (`"\u0000"` in JSON). They become U+FFFD so the
/// rest of the string still reaches the host.
fn c_string(s: String) -> CString {
    let s = if s.contains('\0') {
        log::debug!("catalog: replacing interior nul in string for host");
        s.replace('\0', "\u{FFFD}")
    } else {
        s
    };
    CString::new(s).unwrap_or_default()
}

fn err_null(msg: String) -> *mut c_char {
    set_error(msg);
    ptr::null_mut()
}

fn err_zero(msg: String) -> i32 {
    set_error(msg);
    0
}

// ---------------------------------------------------------------------------
// FFI Integration Tests
// ---------------------------------------------------------------------------

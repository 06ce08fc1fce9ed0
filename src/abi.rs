//! C ABI for hosts that load the plugin as a shared library.
//!
//! JSON strings in, JSON strings out. Every returned pointer must be released
//! with [`autotask_plugin_string_free`].

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use serde_json::{json, Value};

use crate::host::{manifest, registry, NodeInputs, NodeOutputs, TracingLogger};
use crate::utils::{ConvertError, NodeError};

/// Returns the plugin manifest as JSON.
#[unsafe(no_mangle)]
pub extern "C" fn autotask_plugin_manifest() -> *mut c_char {
    let value = serde_json::to_value(manifest()).unwrap_or_else(|e| {
        failure(&NodeError::new("Manifest", ConvertError::processing(e.to_string())))
    });
    into_c_string(&value)
}

/// Runs node `node_id` with a JSON object of inputs.
///
/// Returns `{"ok":true,"outputs":…}` or `{"ok":false,"error":"…","detail":…}`.
#[unsafe(no_mangle)]
pub extern "C" fn autotask_plugin_execute(node_id: *const c_char, inputs_json: *const c_char) -> *mut c_char {
    let envelope = match execute(node_id, inputs_json) {
        Ok(outputs) => json!({ "ok": true, "outputs": outputs }),
        Err(err) => failure(&err),
    };
    into_c_string(&envelope)
}

/// Releases a string returned by this library. Null is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn autotask_plugin_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr));
    }
}

fn execute(node_id: *const c_char, inputs_json: *const c_char) -> Result<NodeOutputs, NodeError> {
    let id = read_str(node_id, "node_id").map_err(|e| NodeError::new("Plugin call", e))?;
    let inputs = read_str(inputs_json, "inputs_json")
        .and_then(NodeInputs::from_json)
        .map_err(|e| NodeError::new(format!("Node '{id}'"), e))?;
    registry().execute(id, &inputs, &TracingLogger::new(id))
}

fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, ConvertError> {
    if ptr.is_null() {
        return Err(ConvertError::host(format!("{what} is null")));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| ConvertError::host(format!("{what} is not valid UTF-8")))
}

fn failure(err: &NodeError) -> Value {
    json!({
        "ok": false,
        "error": err.message,
        "detail": serde_json::to_value(&err.source).unwrap_or(Value::Null),
    })
}

fn into_c_string(value: &Value) -> *mut c_char {
    // serde_json escapes control characters, so interior NULs cannot occur
    match CString::new(value.to_string()) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

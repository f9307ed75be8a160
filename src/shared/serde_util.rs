//! Custom serde helpers for backend wire formats.

use crate::error::DecodeError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::error::Category;
use serde_json::Value;
use std::cell::RefCell;

thread_local! {
    static DECIMAL_FAILURE: RefCell<Option<(String, String)>> = const { RefCell::new(None) };
}

/// Remember a decimal string that did not parse during the current decode.
///
/// serde only keeps the message of a custom error; [`decode_slice`] reads this
/// back to report [`DecodeError::DecimalConversion`] wherever the amount sits.
pub fn record_decimal_failure(input: &str, reason: &str) {
    DECIMAL_FAILURE.with(|f| *f.borrow_mut() = Some((input.to_string(), reason.to_string())));
}

fn take_decimal_failure() -> Option<(String, String)> {
    DECIMAL_FAILURE.with(|f| f.borrow_mut().take())
}

/// Decode `T` from JSON bytes. A bad decimal anywhere in the document is reported
/// as `DecimalConversion`, every other failure as `Json`.
pub fn decode_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    take_decimal_failure();
    serde_json::from_slice(bytes).map_err(|e| match take_decimal_failure() {
        Some((input, reason)) if e.classify() == Category::Data => {
            DecodeError::DecimalConversion { input, reason }
        }
        _ => DecodeError::Json(e),
    })
}

/// Attempt a sub-decode of `T` from an already-parsed JSON value, discarding the error.
///
/// Used where the backend may omit the fields of an optional descriptor: a failed
/// decode means "absent", not "malformed".
pub fn probe<T: DeserializeOwned>(value: &Value) -> Option<T> {
    T::deserialize(value).ok()
}

/// Decode `T` from the same JSON object another decoder already consumed, keeping the error.
pub fn decode_in_place<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

/// Merge the fields of `extra` into `target`. Both must be JSON objects; anything else
/// is left untouched.
pub fn merge_object(target: &mut Value, extra: Value) {
    if let (Value::Object(target), Value::Object(extra)) = (target, extra) {
        target.extend(extra);
    }
}

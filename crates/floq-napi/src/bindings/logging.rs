//! Logging binding: `initTracing()`.

use napi_derive::napi;

/// Install the tracing subscriber. Returns false if one was already set.
///
/// @param filter - Optional `EnvFilter` directive; falls back to `FLOQ_LOG`, then `info`.
#[napi(js_name = "initTracing")]
pub fn init_tracing(filter: Option<String>) -> bool {
    floq_core::logging::init_tracing(filter.as_deref())
}

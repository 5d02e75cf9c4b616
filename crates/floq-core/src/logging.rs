//! Tracing subscriber setup for hosts embedding the engine.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Install a global fmt subscriber.
///
/// Filter precedence: explicit `filter`, then `FLOQ_LOG`, then `info`.
/// Safe to call more than once; only the first call installs a subscriber.
/// Returns `false` if another subscriber was already installed by the host.
pub fn init_tracing(filter: Option<&str>) -> bool {
    *INITIALIZED.get_or_init(|| {
        let env_filter = match filter {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
        };

        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init_tracing(Some("debug"));
        let second = init_tracing(None);
        assert_eq!(first, second);
    }
}

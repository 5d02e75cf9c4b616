//! Config resolution shared by the handle constructors.

use floq_core::config::FloqConfig;

use super::error_codes;

/// Parse optional TOML (defaults when absent), then apply env overrides.
pub fn resolve(config_toml: Option<&str>) -> napi::Result<FloqConfig> {
    let mut config = match config_toml {
        Some(toml_str) => FloqConfig::from_toml(toml_str)
            .map_err(|e| error_codes::error(error_codes::CONFIG_ERROR, e))?,
        None => FloqConfig::default(),
    };
    config.apply_env_overrides();
    Ok(config)
}

/// Minutes east of UTC as a chrono offset.
pub fn utc_offset(minutes: i32) -> napi::Result<chrono::FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(chrono::FixedOffset::east_opt)
        .ok_or_else(|| {
            error_codes::error(
                error_codes::INVALID_INPUT,
                format!("utc offset out of range: {minutes} minutes"),
            )
        })
}

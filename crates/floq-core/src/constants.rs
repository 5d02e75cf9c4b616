//! Engine-wide constants.

/// Hard ceiling on reported confidence; the engine never claims certainty.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Per-call latency target for `evaluate`, in milliseconds.
pub const DEFAULT_LATENCY_BUDGET_MS: f64 = 80.0;

/// Tolerance used when checking that a vibe vector sums to 1.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-5;

/// Hours in a day; circadian tables carry one entry per hour.
pub const HOURS_PER_DAY: usize = 24;

/// Environment variable that overrides `engine.patterns_enabled`.
pub const PATTERNS_ENV_VAR: &str = "FLOQ_USE_PATTERNS";

/// Environment variable read by `init_tracing` for the log filter.
pub const LOG_ENV_VAR: &str = "FLOQ_LOG";

/// Upper bound on the learning event log; the UI never shows more.
pub const MAX_LEARNING_EVENTS: usize = 50;

//! Debugging feature flags.
//!
//! The page glue is silent by contract (missing elements are skipped, never
//! reported), so these flags are the only way to see what it skipped. Keep
//! the chatty ones `false` for deployed builds.

/// Emit a one-line summary of the resolved link plan at boot.
pub const PRINT_LINK_SUMMARY: bool = true;

/// Emit a line for each expected element that was missing from the markup.
pub const PRINT_SKIPPED_LOOKUPS: bool = true;

/// Emit each disclosure transition as it happens (per click; dev builds only,
/// further gated by `cfg(debug_assertions)` in the expander).
pub const PRINT_EXPANDER_EVENTS: bool = false;

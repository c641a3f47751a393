// Browser-side wiring: DOM lookups, attribute mutations, the ready barrier.
// Everything in here compiles only for wasm32; the decisions being applied
// come from `crate::domain`, which is testable without a browser.
pub mod configure;
pub mod expander;
pub mod ready;

// Re-export the three operations the entry point runs
pub use configure::apply_link_plan;
pub use expander::init_expander;
pub use ready::run_when_ready;

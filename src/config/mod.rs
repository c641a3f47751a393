//! Configuration for the Pages deployment.
//!
//! Everything here is compiled into the .wasm artefact; nothing is read from
//! the environment at runtime.

pub mod debug;
pub mod markup;
pub mod site;

// Re-export commonly used items
pub use site::{SITE, SiteConfig};

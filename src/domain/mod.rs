// Domain types and value objects. Everything here is platform-neutral so the
// behaviour can be tested natively, without a browser in the loop.
pub mod disclosure;
pub mod link_plan;

// Re-export commonly used types
pub use disclosure::Disclosure;
pub use link_plan::{LinkPlan, SlotAction};

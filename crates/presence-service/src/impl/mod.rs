//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `presence_service.rs`).

pub mod activity_bridge_impl;
pub mod overview_service_impl;
pub mod presence_service_impl;

pub use activity_bridge_impl::ActivityPresenceBridgeImpl;
pub use overview_service_impl::{OverviewServiceImpl, OverviewServiceImplParameters};
pub use presence_service_impl::PresenceServiceImpl;

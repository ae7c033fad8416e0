//! # Presence Service
//!
//! Application services of the monthly presence engine:
//!
//! - [`PresenceService`]: mark, unmark and read one user's month
//! - [`OverviewService`]: bounded, failure-isolated roster snapshot
//! - [`ActivityPresenceBridge`]: idempotent marking from event participation
//!
//! [`di::PresenceModule`] wires them over the in-memory store.

pub mod activity_bridge;
pub mod di;
pub mod dto;
pub mod r#impl;
pub mod overview_service;
pub mod presence_service;
pub mod roster;

pub use activity_bridge::*;
pub use di::{build_presence_module, PresenceModule, PresenceResolver};
pub use dto::*;
pub use overview_service::*;
pub use presence_service::*;
pub use r#impl::{ActivityPresenceBridgeImpl, OverviewServiceImpl, PresenceServiceImpl};
pub use roster::*;

//! Data transfer objects exchanged with outer collaborators.

pub mod overview_dto;
pub mod presence_dto;

pub use overview_dto::*;
pub use presence_dto::*;

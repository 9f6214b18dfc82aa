//! Service layer for business logic and orchestration.
//!
//! Services sit between external collaborators (HTTP layer, bot layer,
//! scheduler trigger) and the data layer. They are responsible for:
//!
//! - **Business Logic**: Validation policy, conflict detection, lifecycle rules
//! - **Orchestration**: Coordinating repositories and notification dispatch
//! - **Transaction Management**: Keeping conflict checks atomic with writes

pub mod booking;
pub mod cleanup;
pub mod conflict;
pub mod notification;
pub mod policy;
pub mod settings;
pub mod telegram;

#[cfg(test)]
mod test;

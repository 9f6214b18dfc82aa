//! Parameter types and audit snapshot models.
//!
//! These types sit between external collaborators (HTTP layer, bot layer,
//! scheduler trigger) and the service layer. Entities never leave the data
//! layer unwrapped in DTOs here; services accept parameter structs and return
//! entity models.

pub mod booking;

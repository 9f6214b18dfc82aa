//! Database repository layer.
//!
//! Repository structs wrap SeaORM queries for each aggregate. They are generic
//! over `ConnectionTrait` so services can run them either on the shared
//! connection pool or inside a transaction — the booking conflict check and
//! insert must share one transaction to stay atomic.

pub mod booking;
pub mod history;
pub mod setting;

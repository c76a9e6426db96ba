//! Domain layer: the `PaymentTransaction` entity and the storage port it is
//! persisted through.

pub mod ports;
pub mod transaction;

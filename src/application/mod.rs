//! Application layer containing the record-keeping operations.
//!
//! `TransactionService` is the single entry point for the five operations of
//! the API. It validates request commands before touching storage and talks to
//! the backend exclusively through the `TransactionStore` port.

pub mod service;

//! Service layer for contactbook
//!
//! Sits between the HTTP handlers and storage: takes snapshots from the
//! store, runs the query pipeline and validates writes.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod contact_service;
mod error;

pub use contact_service::ContactService;
pub use error::ServiceError;

//! Core types for contactbook
//!
//! Contact records, schema resolution and the pure list query pipeline shared
//! by the storage, service and HTTP crates.

mod constants;
mod contact;
mod env_config;
mod error;
mod field;
pub mod query;

pub use constants::*;
pub use contact::*;
pub use env_config::*;
pub use error::*;
pub use field::*;
pub use query::{
    FilterSpec, ListQuery, Page, PageLimits, PageMeta, PageSpec, SortDirection, SortSpec, query,
};

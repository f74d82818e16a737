//! Domain core for a personal bookshelf backend: catalogue books by
//! ISBN-13, track per-user reading reviews through a small state machine,
//! and manage tags and accounts. Modules follow a domain / application /
//! infrastructure split; the infrastructure layer here ships in-memory
//! repositories backed by [`dashmap`].

pub mod modules;
pub mod shared;

pub use shared::errors::{AppError, AppResult};

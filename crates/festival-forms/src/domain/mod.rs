//! Domain model for festival records.

pub mod commands;
pub mod record;
pub mod requests;

//! Route modules.

pub mod festivals;
pub mod health;

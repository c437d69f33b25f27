//! Festival Core: shared domain abstractions.
//!
//! This crate defines the traits and error types every domain crate depends
//! on. It contains no infrastructure code.

pub mod command;
pub mod entity;
pub mod error;
pub mod repository;

//! Festival forms: festival announcement records.
//!
//! Responsible for the festival record itself (creation from a request,
//! full-replace updates) and the handlers that persist it through an
//! `EntityRepository`.

pub mod application;
pub mod domain;

//! PostgreSQL-backed storage for festival records.

pub mod pg_festival_repository;

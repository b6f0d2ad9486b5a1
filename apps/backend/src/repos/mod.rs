//! Repository functions for the domain layer.
//!
//! Free functions generic over `ConnectionTrait`, so the same call works on a
//! pooled connection or inside a transaction. All return `DomainError`.

pub mod assignments;
pub mod players;
pub mod questions;

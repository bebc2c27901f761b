//! # Repositories
//!
//! Table readers for the database catalog source. Each repository holds a
//! pool handle and converts raw rows into check-core domain types.

pub mod discount_card;
pub mod product;

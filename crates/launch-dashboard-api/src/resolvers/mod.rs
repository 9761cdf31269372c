//! # GraphQL Resolvers Module
//!
//! Read-only query resolvers. The dataset is loaded once and never mutated.

pub mod query;

pub use query::QueryRoot;

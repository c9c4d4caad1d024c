//! Shared extractors for the HTTP layer

pub mod validated_query;

pub use validated_query::ValidatedQuery;

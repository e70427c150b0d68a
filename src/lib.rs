//! Bulk synthetic JSON book records for load testing.
//!
//! Library half of the `bookgen` binary: [`titles`] draws fixed-length
//! random alphanumeric strings, [`catalog`] builds full library entries on
//! top of them, and [`output`] streams either shape to a sink as one JSON
//! array.

pub mod catalog;
pub mod output;
pub mod titles;

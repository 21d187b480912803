//! Parsers for manifest input.

pub mod yaml;

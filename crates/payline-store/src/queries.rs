//! Database query functions.

pub mod collections;

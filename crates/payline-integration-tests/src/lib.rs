//! Integration test crate for payline.
//!
//! This crate has no library code. It only contains tests that run the
//! payout engine against affiliates loaded from the SQLite sale store.
//!
//! ```sh
//! cargo test -p payline-integration-tests
//! ```

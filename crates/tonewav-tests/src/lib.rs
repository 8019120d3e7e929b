//! tonewav End-to-End Test Infrastructure
//!
//! This crate holds the cross-crate tests for tonewav:
//!
//! - Generation: config -> WAVE bytes -> file on disk
//! - Conformance: strict canonical layout checks plus decoding with `hound`
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tonewav-tests
//! ```

pub mod conformance;
pub mod determinism;

// Re-export commonly used items
pub use conformance::{check_canonical_layout, decode_with_hound, CanonicalLayout, LayoutError};
pub use determinism::{
    assert_deterministic, compute_hash, verify_determinism, DeterminismResult, DiffInfo,
};

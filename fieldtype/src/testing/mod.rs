//! Testing utilities for field types.
//!
//! This module provides:
//! - Assertions over accepted and rejected values
//! - Value fixtures covering every variant
//! - A recording validator for custom field types

mod assertions;
mod fixtures;
mod recording;

pub use assertions::{assert_accepts, assert_optional_rule, assert_rejects};
pub use fixtures::{sample_values, signed_zero_pair};
pub use recording::RecordingValidator;

//! Tests for the composer
//!
//! Organized by concern, sharing in-memory collaborators from `helpers`.

use super::*;

mod helpers;

mod failures;
mod ordering;

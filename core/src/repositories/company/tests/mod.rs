//! Tests for the in-memory company repository

//! Tests for the in-memory tag repository

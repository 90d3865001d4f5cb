//! Tests for the in-memory user repository

mod mock_tests;

//! Tests for the in-memory job repository

mod mock_tests;

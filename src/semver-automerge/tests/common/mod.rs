//! Shared test doubles.

#![allow(dead_code)]

pub mod mock_client;

pub use mock_client::{pull_request, MergeCall, MockRepositoryClient, RecordingSleeper};

//! Shared fixtures for the integration tests
//!
//! - [`builders`] writes record sequences as binary or text logs
//! - [`mock_helpers`] collects notices through a channel
//! - [`assertions`] compares float summary values

#![allow(dead_code)] // Each test binary uses a different subset

pub mod assertions;
pub mod builders;
pub mod mock_helpers;

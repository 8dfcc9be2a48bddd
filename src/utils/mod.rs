//! Utility modules for common functionality
//!
//! This module provides the utilities shared by the CLI commands.

pub mod logger;

//! Platform module for Qovery integration
//!
//! This module provides the API client used to read and create projects,
//! repositories and regions, and to list deployed storage.

pub mod api;

//! Authentication module for the Qovery API
//!
//! Tokens are issued by the Qovery console and cached locally.

pub mod credentials;

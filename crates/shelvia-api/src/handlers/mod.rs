//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod audit;
pub mod defects;
pub mod files;
pub mod health;
pub mod stats;

//! Core engine — recipe catalog, stage plans, inference and sessions.

pub mod catalog;
pub mod error;
pub mod infer;
pub mod items;
pub mod overlay;
pub mod recipients;
pub mod session;
pub mod stages;
pub mod types;

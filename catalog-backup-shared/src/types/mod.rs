//! Record types persisted by the exporter.

pub mod asset;
pub mod community;
pub mod domain;
pub mod summary;

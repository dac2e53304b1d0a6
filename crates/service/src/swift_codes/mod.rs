//! Swift code module: domain, validation, repository and service layers.
//!
//! The service holds no state between requests; the only shared resource is
//! the repository handed to it at construction.

pub mod domain;
pub mod validation;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::SwiftCodeService;

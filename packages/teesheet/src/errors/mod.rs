//! Error handling for the teesheet contract library.

pub mod domain;

pub use domain::DomainError;

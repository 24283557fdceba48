//! Defecttrack Core Library
//!
//! This crate provides the domain models, permission evaluator, 8D workflow
//! calculations, and error types shared across all defecttrack components.

pub mod constants;
pub mod error;
pub mod models;
pub mod permissions;
pub mod registry;
pub mod workflow;

// Re-export commonly used types
pub use error::{AppError, LogLevel};
pub use models::{Actor, DefectDates, DefectRef, PermissionSet, UserRole};
pub use permissions::{can, evaluate, query, Decision};
pub use registry::PermissionRegistry;

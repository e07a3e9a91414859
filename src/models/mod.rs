//! Core data models for the Staffing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employee;
mod matricule;
mod role;

pub use audit::AuditStep;
pub use employee::{Employee, PartTimeRatio};
pub use matricule::{MATRICULE_SUFFIX_DIGITS, MAX_MATRICULE_SUFFIX, Matricule, format_suffix};
pub use role::{EducationLevel, Role};

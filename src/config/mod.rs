//! Configuration loading and management for the Staffing Engine.
//!
//! This module loads the company configuration from YAML files: the base
//! salary, the salary coefficient tables and the commercial scoring tiers.
//! Keeping these in reviewable files rather than inline arithmetic lets the
//! tables change without a rebuild.
//!
//! # Example
//!
//! ```no_run
//! use staffing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded company: {}", config.config().company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanyConfig, CompanyMetadata, EducationCoefficients, RoleCoefficients, SalaryConfig,
    ScoringConfig, TierRatings,
};

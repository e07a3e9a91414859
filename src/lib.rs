//! Staffing Engine
//!
//! This crate provides the business rules of an employee staffing system:
//! matricule allocation and starting salary at hiring time, and periodic
//! performance scoring of commercial employees from their sales results.
//! Persistence is abstracted behind the [`ledger::Ledger`] trait.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod workflow;

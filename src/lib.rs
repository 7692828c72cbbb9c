//! ACH Workbench - Analysis of Competing Hypotheses
//!
//! This crate implements the ACH structured-analysis technique: rate how
//! consistent each piece of evidence is with each competing hypothesis,
//! then derive which hypothesis best survives the evidence and how fragile
//! that conclusion is.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

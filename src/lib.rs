//! Behaviour-driven test report generator library.
//!
//! This library turns parsed test results into page contexts for a template
//! renderer: sorted overviews of features, tags and steps, and a trends page
//! built from the persisted history of previous builds.

pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod services;

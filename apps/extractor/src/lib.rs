//! Skill matrix extraction from free-form job descriptions.
//!
//! `fallback_extract` is the deterministic, always-valid pipeline.
//! `SkillMatrixExtractor` layers an optional model backend on top of it.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod extractor;
pub mod model;
pub mod models;
pub mod validation;

pub use extraction::fallback_extract;
pub use extractor::{Extraction, ExtractionSource, SkillMatrixExtractor};
pub use models::skill_matrix::{Currency, Salary, Seniority, SkillBuckets, SkillMatrix};

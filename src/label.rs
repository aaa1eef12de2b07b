//! Garment label composition extraction
//!
//! The pipeline runs in three stages, each a pure function of its input:
//!
//! 1. [`canonical`]: rewrite a raw label into canonical `component: N% material` form
//! 2. [`segment`]: split the canonical label into per-component blocks
//! 3. [`grammar`]: match `(proportion, material)` items in each block
//!
//! [`pipeline`] composes them. [`corpus`] and [`report`] load and validate
//! against a gold corpus; [`format`] renders results.

pub mod canonical;
pub mod corpus;
pub mod format;
pub mod grammar;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod segment;

//! Estimate how likely a new venture is to succeed from the skills it brings.
//!
//! Ventures, their evaluations, and their skills are read from an external
//! service; three factors (quality, prevalence, coverage) are computed over
//! them and combined into a weighted percentage, which is then explained in
//! plain text.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod credentials;
pub mod explain;
pub mod fetch;
pub mod output;
pub mod scoring;

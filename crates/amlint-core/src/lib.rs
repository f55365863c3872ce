//! Amlint Core Types and Definitions
//!
//! This crate provides the foundational types shared by the architecture
//! linter. It includes:
//!
//! - **Positions**: 1-based source locations ([`position::Position`])
//! - **Tree**: The generic document node model ([`tree`] module)
//! - **Model**: The architecture entities and their links ([`model`] module)

pub mod model;
pub mod position;
pub mod tree;

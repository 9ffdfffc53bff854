//! Skill gap analyzer library

pub mod advice;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use config::Config;
pub use error::{Result, SkillGapError};

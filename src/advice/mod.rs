//! Advice generation: service client, prompt templates, payloads, and the
//! report assembler

pub mod assembler;
pub mod client;
pub mod payload;
pub mod prompts;

pub use assembler::{assemble_without_advice, ReportAssembler};
pub use client::{AdviceError, AdviceResult, AdviceService, HttpAdviceClient};
pub use payload::{ImprovementTips, LearningPath, Resource};

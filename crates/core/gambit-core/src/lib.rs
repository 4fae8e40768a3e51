//! Gambit core
//!
//! This crate provides the core types and logic for evaluating a conversation
//! in chess terms through an LLM completion provider. It includes:
//!
//! - Request/result types for conversation evaluation
//! - Prompt builder producing the system and user instruction blocks
//! - Reply interpreter extracting the analysis text and numeric score
//! - The `CompletionProvider` seam implemented by provider crates
//!
//! # Example
//!
//! ```no_run
//! use gambit_core::{ConversationEvaluator, EvaluationRequest, EvaluatorOpts};
//! use std::sync::Arc;
//!
//! # async fn run(provider: Arc<dyn gambit_core::CompletionProvider>) -> gambit_core::Result<()> {
//! let evaluator = ConversationEvaluator::new(provider, EvaluatorOpts::default());
//! let result = evaluator.evaluate(EvaluationRequest::default()).await?;
//! println!("{} -> {:?}", result.analysis, result.score);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod interpret;
pub mod prompt;
pub mod provider;
pub mod types;

// Re-export main types
pub use config::{get_env_bool, get_env_float, get_env_int, get_env_or, get_required_env, load_env};
pub use error::{GambitError, Result};
pub use evaluator::{ConversationEvaluator, EvaluatorOpts};
pub use interpret::{interpret_reply, InterpreterOpts, ParsedReply, DEFAULT_SCORE};
pub use provider::{CompletionProvider, CompletionRequest};
pub use types::{ConversationTurn, EmotionSet, EvaluationRequest, EvaluationResult};

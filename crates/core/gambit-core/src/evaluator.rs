//! Conversation evaluator
//!
//! Orchestrates one evaluation: build the prompt pair, run the completion
//! call, interpret the reply, echo the eval metric back.

use crate::interpret::{interpret_reply, InterpreterOpts};
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::types::{EvaluationRequest, EvaluationResult};
use crate::{prompt, Result};
use std::sync::Arc;
use tracing::debug;

/// Evaluator options
#[derive(Debug, Clone, Copy)]
pub struct EvaluatorOpts {
    /// Ask the model for a numeric score and include it in the result
    pub request_score: bool,

    /// Capture multi-line analysis blocks (see [`InterpreterOpts`])
    pub multiline_analysis: bool,
}

impl Default for EvaluatorOpts {
    fn default() -> Self {
        Self {
            request_score: true,
            multiline_analysis: false,
        }
    }
}

/// Evaluates conversations through a completion provider
pub struct ConversationEvaluator {
    provider: Arc<dyn CompletionProvider>,
    opts: EvaluatorOpts,
}

impl ConversationEvaluator {
    /// Create a new evaluator over the given provider
    pub fn new(provider: Arc<dyn CompletionProvider>, opts: EvaluatorOpts) -> Self {
        Self { provider, opts }
    }

    /// Evaluate one conversation
    ///
    /// `eval_metric` round-trips into the result unmodified. The score is
    /// `Some` only when `request_score` is set; parsing shortfalls in the
    /// model reply degrade to defaults and never fail the call.
    pub async fn evaluate(&self, request: EvaluationRequest) -> Result<EvaluationResult> {
        let system = prompt::build_system_prompt(
            &request.emotions,
            &request.eval_metric,
            self.opts.request_score,
        );
        let user = prompt::build_user_prompt(&request.transcriptions);
        debug!(
            provider = self.provider.name(),
            turns = request.transcriptions.len(),
            eval_metric = %request.eval_metric,
            "running conversation evaluation"
        );

        let reply = self
            .provider
            .complete(CompletionRequest { system, user })
            .await?;

        let parsed = interpret_reply(
            &reply,
            InterpreterOpts {
                multiline_analysis: self.opts.multiline_analysis,
            },
        );

        Ok(EvaluationResult {
            analysis: parsed.analysis,
            score: if self.opts.request_score {
                Some(parsed.score)
            } else {
                None
            },
            eval_metric: request.eval_metric,
        })
    }
}

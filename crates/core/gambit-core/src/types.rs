//! Request and result types for conversation evaluation

use serde::{Deserialize, Serialize};

/// Opaque emotion annotations for Speaker 1
///
/// The shape is not constrained; whatever the caller sends is serialized into
/// the prompt unmodified.
pub type EmotionSet = serde_json::Value;

/// A single turn of the conversation being evaluated
///
/// Speaker 0 is the person being evaluated; other speakers are their
/// counterparts. Turn order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Speaker identifier (0 = evaluated subject)
    pub speaker: u32,

    /// What the speaker said
    pub text: String,
}

/// Request to evaluate a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Emotion annotations for Speaker 1, passed through to the prompt
    #[serde(default = "default_emotions")]
    pub emotions: EmotionSet,

    /// Ordered conversation transcript
    #[serde(default)]
    pub transcriptions: Vec<ConversationTurn>,

    /// What the conversation is being evaluated on
    #[serde(default = "default_eval_metric")]
    pub eval_metric: String,
}

impl Default for EvaluationRequest {
    fn default() -> Self {
        Self {
            emotions: default_emotions(),
            transcriptions: Vec::new(),
            eval_metric: default_eval_metric(),
        }
    }
}

fn default_emotions() -> EmotionSet {
    EmotionSet::Array(Vec::new())
}

fn default_eval_metric() -> String {
    "general conversation".to_string()
}

/// Result of evaluating a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Human-readable critique extracted from the model reply; never empty
    pub analysis: String,

    /// Performance score in [0,100]; present only when a score was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,

    /// Evaluation metric echoed from the request, unmodified
    pub eval_metric: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_from_empty_json() {
        let request: EvaluationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.emotions, serde_json::json!([]));
        assert!(request.transcriptions.is_empty());
        assert_eq!(request.eval_metric, "general conversation");
    }

    #[test]
    fn test_turn_deserialization() {
        let turn: ConversationTurn =
            serde_json::from_str(r#"{"speaker": 1, "text": "hi there"}"#).unwrap();
        assert_eq!(turn.speaker, 1);
        assert_eq!(turn.text, "hi there");
    }

    #[test]
    fn test_result_omits_absent_score() {
        let result = EvaluationResult {
            analysis: "solid".to_string(),
            score: None,
            eval_metric: "general conversation".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("score").is_none());
    }
}

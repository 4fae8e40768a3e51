//! Prompt builder for the conversation evaluation call
//!
//! Pure string assembly: the system block carries the chess-move taxonomy and
//! (optionally) the scoring rubric plus the required reply format; the user
//! block wraps the rendered transcript.

use crate::types::{ConversationTurn, EmotionSet};

/// Build the system-role instruction block
///
/// When `request_score` is false the scoring rubric and the required-format
/// instruction are omitted and the model is only asked for the classification
/// analysis.
pub fn build_system_prompt(emotions: &EmotionSet, eval_metric: &str, request_score: bool) -> String {
    let mut prompt = format!(
        "You are analyzing a conversation in chess terms. The situation is: {eval_metric}\n\
         \n\
         Speaker 0 is the person being evaluated. Speaker 1's emotions: {emotions}\n\
         \n\
         Analyze each significant exchange and classify it as:\n\
         - BLUNDER: Major social mistake, offensive, inappropriate\n\
         - EXCELLENT MOVE: Perfect response, great question, smooth\n\
         - DUBIOUS MOVE: Questionable choice, awkward, poor timing\n\
         - TACTICAL: Strategic response, calculated approach\n\
         - POSITIONAL: Building rapport, setting up opportunities\n\
         - DEFENSIVE: Recovering from mistake, damage control\n\
         - AGGRESSIVE: Direct approach, pushing boundaries appropriately\n\
         \n\
         For each classification, explain:\n\
         1. What specific part of the conversation led to this classification\n\
         2. Why it's good/bad in the context of {eval_metric}\n\
         3. What emotions from speaker 1 might have influenced this\n"
    );

    if request_score {
        prompt.push_str(
            "\nIMPORTANT: At the end of your analysis, provide a numerical score from 0-100 where:\n\
             - 0-20: Aggressive/Defensive (poor performance, major mistakes)\n\
             - 21-40: Dubious moves (questionable choices, awkward timing)\n\
             - 41-60: Tactical/Positional (strategic but not exceptional)\n\
             - 61-80: Good moves (solid performance, good responses)\n\
             - 81-100: Excellent moves (outstanding performance, perfect responses)\n\
             \n\
             Format your response as:\n\
             ANALYSIS: [your detailed analysis here]\n\
             SCORE: [number between 0-100]\n",
        );
    }

    prompt
}

/// Render the transcript as `Speaker{n}: {text}` lines, preserving order
///
/// An empty transcript renders as the empty string.
pub fn build_conversation_block(transcript: &[ConversationTurn]) -> String {
    transcript
        .iter()
        .map(|turn| format!("Speaker{}: {}", turn.speaker, turn.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user-role block wrapping the transcript
pub fn build_user_prompt(transcript: &[ConversationTurn]) -> String {
    format!(
        "Analyze the following conversation:\n\n{}",
        build_conversation_block(transcript)
    )
}

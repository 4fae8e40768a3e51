//! Reply interpreter
//!
//! Extracts the analysis text and numeric score from the free-form text a
//! completion model returns. The model is asked for `ANALYSIS:` and `SCORE:`
//! lines but nothing guarantees it complies, so every malformed shape resolves
//! to a documented default instead of an error.

/// Prefix marking the analysis line of a model reply
pub const ANALYSIS_PREFIX: &str = "ANALYSIS:";

/// Prefix marking the score line of a model reply
pub const SCORE_PREFIX: &str = "SCORE:";

/// Score used when the reply carries no parsable `SCORE:` line
pub const DEFAULT_SCORE: u8 = 50;

/// Interpreter options
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpreterOpts {
    /// Capture analysis continuation lines until the next recognized marker.
    ///
    /// Off by default: the stock behavior keeps only the `ANALYSIS:` line
    /// itself, dropping any continuation lines the model emits. Models do
    /// continue the analysis across lines in practice, so this flag opts into
    /// capturing the whole block.
    pub multiline_analysis: bool,
}

/// Analysis and score extracted from one model reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    /// Extracted analysis text; the full raw reply when no marker was found
    pub analysis: String,

    /// Extracted score, clamped to [0,100]; `DEFAULT_SCORE` when absent or
    /// unparsable
    pub score: u8,
}

/// Interpret a raw model reply
///
/// Line-oriented, case-sensitive prefix match:
///
/// - `ANALYSIS:` line: the remainder, trimmed, becomes the analysis
/// - `SCORE:` line: the remainder, trimmed, is parsed as a base-10 integer and
///   clamped to [0,100]; non-numeric content falls back to [`DEFAULT_SCORE`]
/// - no `ANALYSIS:` line anywhere: the entire unmodified reply is the analysis
///
/// This function never fails.
pub fn interpret_reply(raw: &str, opts: InterpreterOpts) -> ParsedReply {
    let mut analysis = String::new();
    let mut score = DEFAULT_SCORE;
    let mut capturing = false;

    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix(ANALYSIS_PREFIX) {
            analysis = rest.trim().to_string();
            capturing = opts.multiline_analysis;
        } else if let Some(rest) = line.strip_prefix(SCORE_PREFIX) {
            score = match rest.trim().parse::<i64>() {
                Ok(n) => n.clamp(0, 100) as u8,
                Err(_) => DEFAULT_SCORE,
            };
            capturing = false;
        } else if capturing {
            analysis.push('\n');
            analysis.push_str(line);
        }
    }

    if opts.multiline_analysis {
        analysis = analysis.trim().to_string();
    }

    // An absent or empty ANALYSIS: line means the whole reply stands in
    if analysis.is_empty() {
        analysis = raw.to_string();
    }

    ParsedReply { analysis, score }
}

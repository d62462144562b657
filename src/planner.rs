//! Planner
//!
//! Classifies a flat token sequence into an ordered pipeline of stages and
//! extracts per-stage redirections: split then scan each segment
//! for operators, rejecting empties, as a handful of small pure functions
//! rather than a parser-combinator pipeline.

use crate::errors::ShellError;
use crate::redirection::Redirection;

/// One command in a pipeline: its argv and the redirections local to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub argv: Vec<String>,
    pub redirections: Vec<Redirection>,
}

/// The ordered sequence of stages parsed from one input line. Always
/// non-empty when returned successfully.
pub type PipelinePlan = Vec<Stage>;

/// Build a `PipelinePlan` from a token sequence, or reject the line.
///
/// Rejects when any `|`-separated segment is empty, when a redirection
/// operator is the last token in its segment (no path follows), or when a
/// segment's argv is empty after redirection extraction.
pub fn plan(tokens: &[String]) -> Result<PipelinePlan, ShellError> {
    let mut stages = Vec::new();

    for segment in split_unquoted_pipes(tokens) {
        if segment.is_empty() {
            return Err(ShellError::EmptyPipelineSegment);
        }
        stages.push(plan_stage(&segment)?);
    }

    Ok(stages)
}

/// Split on every `|` token. A `|` as the first or last token, or two in a
/// row, produces an empty segment, which `plan` rejects.
fn split_unquoted_pipes(tokens: &[String]) -> Vec<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for tok in tokens {
        if tok == "|" {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(tok.clone());
        }
    }
    segments.push(current);
    segments
}

fn plan_stage(segment: &[String]) -> Result<Stage, ShellError> {
    let mut argv = Vec::new();
    let mut redirections = Vec::new();

    let mut i = 0;
    while i < segment.len() {
        let tok = &segment[i];
        if let Some((fd, mode)) = Redirection::operator_for(tok) {
            let path = segment
                .get(i + 1)
                .ok_or(ShellError::MissingRedirectTarget)?;
            redirections.push(Redirection {
                fd,
                path: path.clone(),
                mode,
            });
            i += 2;
        } else {
            argv.push(tok.clone());
            i += 1;
        }
    }

    if argv.is_empty() {
        return Err(ShellError::EmptyPipelineSegment);
    }

    Ok(Stage { argv, redirections })
}

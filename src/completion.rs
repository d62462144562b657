//! Completion Engine
//!
//! Pure candidate-set and decision-rule logic, plus a
//! `rustyline::completion::Completer` adapter that wires it into the REPL.
//! The adapter follows a `ShellHelper`/`RefCell<CompletionState>` shape
//! (see DESIGN.md for grounding).

use std::cell::RefCell;
use std::fs;

use is_executable::IsExecutable;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::exec::resolution;
use crate::state::{self, CompletionState};

/// What the REPL should do in response to a TAB press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// No candidates; leave the line untouched.
    None,
    /// Replace the current word with this text (caller decides on the
    /// trailing space: callers pass it already appended where needed).
    Replace(String),
    /// Emit a terminal bell; first TAB on an ambiguous, non-extendable prefix.
    Bell,
    /// Second consecutive TAB on an ambiguous prefix: list these candidates.
    List(Vec<String>),
}

/// Build the deduplicated, sorted candidate set for `prefix`.
pub fn candidates(prefix: &str, path_env: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();

    for name in state::BUILTIN_NAMES {
        if name.starts_with(prefix) && seen.insert(name.to_string()) {
            out.push(name.to_string());
        }
    }

    for dir in resolution::split_path(path_env) {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with(prefix)
                && path.is_file()
                && path.is_executable()
                && seen.insert(name.to_string())
            {
                out.push(name.to_string());
            }
        }
    }

    out.sort();
    out
}

/// Longest common prefix shared by every string in `items`; empty if `items`
/// is empty.
fn longest_common_prefix(items: &[String]) -> String {
    let Some(first) = items.first() else {
        return String::new();
    };
    let mut lcp = first.as_str();
    for item in &items[1..] {
        let mut end = 0;
        for (a, b) in lcp.bytes().zip(item.bytes()) {
            if a != b {
                break;
            }
            end += 1;
        }
        lcp = &lcp[..end];
    }
    lcp.to_string()
}

/// Apply the four completion decision rules given the already-built
/// candidate set and the repeat count the caller obtained from
/// `CompletionState::record_tab`.
pub fn decide(prefix: &str, candidates: &[String], tab_count: u32) -> Decision {
    match candidates.len() {
        0 => Decision::None,
        1 => Decision::Replace(format!("{} ", candidates[0])),
        _ => {
            let lcp = longest_common_prefix(candidates);
            if lcp.len() > prefix.len() {
                Decision::Replace(lcp)
            } else if tab_count >= 2 {
                Decision::List(candidates.to_vec())
            } else {
                Decision::Bell
            }
        }
    }
}

/// `rustyline` adapter: owns the transient tab-repeat state and reads
/// `PATH` fresh on every completion request (the shell writes no
/// environment variables, so there is nothing to cache).
///
/// Relies on the host `Editor` being built with `CompletionType::List` and
/// `show_all_if_ambiguous(true)` (see `main.rs`): with that config, a `Bell`
/// decision returns zero candidates and rustyline rings its own bell for us,
/// and a `List` decision returns the full candidate set, which rustyline
/// prints and redraws the prompt under without any further extension (the
/// replacements below equal the candidates themselves, so nothing in the
/// line changes). Printing the bell or the listing by hand here would double
/// up with rustyline's own rendering.
pub struct ShellCompleter {
    state: RefCell<CompletionState>,
}

impl ShellCompleter {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(CompletionState::new()),
        }
    }

    pub fn reset(&self) {
        self.state.borrow_mut().reset();
    }
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        let prefix = &line[start..pos];

        let path_env =
            std::env::var("PATH").unwrap_or_else(|_| resolution::DEFAULT_PATH.to_string());
        let cands = candidates(prefix, &path_env);
        let tab_count = self.state.borrow_mut().record_tab(prefix);

        match decide(prefix, &cands, tab_count) {
            Decision::None => Ok((start, Vec::new())),
            Decision::Replace(text) => {
                self.state.borrow_mut().reset();
                let pair = Pair {
                    display: text.clone(),
                    replacement: text,
                };
                Ok((start, vec![pair]))
            }
            Decision::Bell => Ok((start, Vec::new())),
            Decision::List(items) => {
                self.state.borrow_mut().reset();
                let pairs = items
                    .into_iter()
                    .map(|item| Pair {
                        display: item.clone(),
                        replacement: item,
                    })
                    .collect();
                Ok((start, pairs))
            }
        }
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_set_yields_no_completion() {
        assert_eq!(decide("zz", &[], 1), Decision::None);
    }

    #[test]
    fn single_candidate_replaces_with_trailing_space() {
        let cands = vec!["echo".to_string()];
        assert_eq!(
            decide("ech", &cands, 1),
            Decision::Replace("echo ".to_string())
        );
    }

    #[test]
    fn multiple_candidates_with_longer_lcp_extends_without_space() {
        let cands = vec!["export".to_string(), "exportify".to_string()];
        assert_eq!(
            decide("ex", &cands, 1),
            Decision::Replace("export".to_string())
        );
    }

    #[test]
    fn first_tab_on_ambiguous_prefix_bells() {
        let cands = vec!["cat".to_string(), "cd".to_string()];
        assert_eq!(decide("c", &cands, 1), Decision::Bell);
    }

    #[test]
    fn second_consecutive_tab_lists_candidates() {
        let cands = vec!["cat".to_string(), "cd".to_string()];
        assert_eq!(decide("c", &cands, 2), Decision::List(cands));
    }

    #[test]
    fn candidates_include_matching_builtins() {
        let found = candidates("ec", resolution::DEFAULT_PATH);
        assert!(found.contains(&"echo".to_string()));
    }

    #[test]
    fn candidates_are_deduplicated_and_sorted() {
        let found = candidates("", "/usr/bin:/usr/bin");
        let mut sorted = found.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(found.len(), sorted.len());
        assert_eq!(found, sorted);
    }

    #[test]
    fn longest_common_prefix_of_single_item_is_itself() {
        assert_eq!(longest_common_prefix(&["echo".to_string()]), "echo");
    }

    #[test]
    fn longest_common_prefix_of_empty_set_is_empty() {
        assert_eq!(longest_common_prefix(&[]), "");
    }
}

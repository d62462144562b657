//! Shell Error Taxonomy
//!
//! Unifies the error cases the shell can hit while lexing, planning,
//! binding redirections, and resolving/spawning commands into a single
//! `thiserror`-derived enum, rather than threading `String` errors through
//! every layer.

use std::io;
use thiserror::Error;

/// Errors surfaced while processing a single input line.
///
/// Every variant's `Display` impl renders the exact message the shell
/// prints to stderr; callers only need to `eprint!("{err}")`.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A redirection operator had no following path token.
    #[error("No output file specified for redirection")]
    MissingRedirectTarget,

    /// A pipeline had an empty segment, e.g. `a | | b`.
    #[error("syntax error near unexpected token `|'`")]
    EmptyPipelineSegment,

    /// `argv[0]` did not resolve to a builtin or a PATH executable.
    #[error("{0}: command not found")]
    CommandNotFound(String),

    /// A redirection target file could not be opened.
    #[error("{path}: {reason}")]
    RedirectOpenFailed { path: String, reason: io::Error },

    /// `cd` failed because the target does not exist.
    #[error("cd: {0}: No such file or directory")]
    CdNotFound(String),

    /// `cd` failed because the target is not accessible.
    #[error("cd: {0}: Permission denied")]
    CdPermissionDenied(String),

    /// `exit` was given a non-numeric argument.
    #[error("exit: {0}: numeric argument required")]
    ExitArgNotNumeric(String),

    /// Spawning an external process failed after it was resolved on PATH.
    #[error("Error executing {cmd}: {reason}")]
    SpawnFailed { cmd: String, reason: io::Error },
}

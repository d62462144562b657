//! Redirection
//!
//! Defines the `Redirection` record and the binder that turns one
//! into an open file ready to become a child's stdout/stderr.

use std::fs::{File, OpenOptions};
use std::io;

use crate::errors::ShellError;

/// Target file descriptor of a redirection: stdout or stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFd {
    Stdout,
    Stderr,
}

/// How the target file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Truncate,
    Append,
}

/// A single `{fd, path, mode}` redirection extracted from a stage's argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    pub fd: TargetFd,
    pub path: String,
    pub mode: Mode,
}

impl Redirection {
    /// Recognise one of the six exact operator spellings, or
    /// `None` if `token` is not a redirection operator.
    pub fn operator_for(token: &str) -> Option<(TargetFd, Mode)> {
        match token {
            ">" | "1>" => Some((TargetFd::Stdout, Mode::Truncate)),
            ">>" | "1>>" => Some((TargetFd::Stdout, Mode::Append)),
            "2>" => Some((TargetFd::Stderr, Mode::Truncate)),
            "2>>" => Some((TargetFd::Stderr, Mode::Append)),
            _ => None,
        }
    }
}

/// Open the file named by a redirection with the correct mode, using the
/// process's default permission mask (create+truncate or create+append).
///
/// On failure, the caller aborts the owning stage and surfaces
/// `"<path>: <reason>"` on the shell's stderr; this function only
/// performs the open and wraps the error.
pub fn bind(redir: &Redirection) -> Result<File, ShellError> {
    let result = match redir.mode {
        Mode::Truncate => File::create(&redir.path),
        Mode::Append => OpenOptions::new()
            .create(true)
            .append(true)
            .open(&redir.path),
    };
    result.map_err(|reason: io::Error| ShellError::RedirectOpenFailed {
        path: redir.path.clone(),
        reason,
    })
}

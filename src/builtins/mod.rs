//! Builtin Table
//!
//! The five builtins the shell dispatches in-process rather than spawning:
//! one small module per builtin, registered through a single
//! dispatch function that always hands each builtin the same pair of
//! stdout/stderr writers regardless of where they point, so redirection
//! handling lives in exactly one place (the execution engine) instead of
//! being duplicated per call site.

mod cd;
mod echo;
mod exit;
mod pwd;
mod type_cmd;

use std::io::Write;

use crate::state::BUILTIN_NAMES;

/// What the REPL should do after a builtin ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinAction {
    /// Keep reading lines.
    Continue,
    /// Terminate the shell with this status.
    Exit(i32),
}

/// Dispatch `name` to its builtin implementation. Caller must have already
/// checked `is_builtin(name)`; panics (via `unreachable!`) otherwise, since
/// the only caller is the execution engine's already-resolved dispatch.
pub fn run(
    name: &str,
    args: &[String],
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> BuiltinAction {
    debug_assert!(BUILTIN_NAMES.contains(&name));
    match name {
        "echo" => {
            echo::run(args, stdout);
            BuiltinAction::Continue
        }
        "pwd" => {
            pwd::run(stdout, stderr);
            BuiltinAction::Continue
        }
        "cd" => {
            cd::run(args, stderr);
            BuiltinAction::Continue
        }
        "type" => {
            type_cmd::run(args, stdout);
            BuiltinAction::Continue
        }
        "exit" => exit::run(args, stderr),
        _ => unreachable!("dispatch called on non-builtin {name:?}"),
    }
}

//! Execution Engine
//!
//! Executes a `PipelinePlan` to completion: resolves each stage as
//! builtin-or-external, wires n-1 anonymous pipes between stages (real OS
//! pipes via `libc::pipe`, in the same spirit as this crate's existing use of
//! `libc` for low-level process concerns), applies per-stage redirections,
//! and restores the parent's own streams on every exit path. Builtins run
//! in-process with their `std::io::Write` sink pointed directly at that
//! stage's destination file or pipe, the real-fd analogue of the stream
//! swapping an earlier `redirections.rs` did against string buffers.
//!
//! `cd` and `exit` always run in the parent process regardless of pipeline
//! position (see DESIGN.md).

pub mod resolution;

use std::fs::File;
use std::io::{self, Write};
use std::os::unix::io::FromRawFd;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::builtins::{self, BuiltinAction};
use crate::errors::ShellError;
use crate::planner::{PipelinePlan, Stage};
use crate::redirection::{self, TargetFd};
use crate::state;

/// What the REPL should do once a line has finished running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit(i32),
}

/// A stage's stdin source before any (nonexistent, for stdin) per-stage
/// override — only pipes feed stdin; there is no input redirection.
enum In {
    Inherit,
    Pipe(File),
}

/// A stage's stdout destination before its own redirections are applied.
enum Out {
    Inherit,
    Pipe(File),
}

fn make_pipe() -> io::Result<(File, File)> {
    let mut fds = [0i32; 2];
    if unsafe { libc::pipe(fds.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: pipe(2) just returned success, so both descriptors are
    // freshly allocated and owned by this process.
    unsafe { Ok((File::from_raw_fd(fds[0]), File::from_raw_fd(fds[1]))) }
}

/// Run a full pipeline plan to completion.
///
/// Stage failures (unresolved command, redirection open failure, spawn
/// failure) abort that stage and every stage after it; stages already
/// spawned before the failure are still waited on.
pub fn execute(plan: &PipelinePlan) -> LineOutcome {
    let n = plan.len();
    let mut stdins: Vec<In> = Vec::with_capacity(n);
    let mut stdouts: Vec<Out> = Vec::with_capacity(n);

    let mut prev_read: Option<File> = None;
    for i in 0..n {
        stdins.push(match prev_read.take() {
            Some(f) => In::Pipe(f),
            None => In::Inherit,
        });
        if i + 1 < n {
            match make_pipe() {
                Ok((read, write)) => {
                    prev_read = Some(read);
                    stdouts.push(Out::Pipe(write));
                }
                Err(e) => {
                    eprintln!("Error executing pipeline: {e}");
                    return LineOutcome::Continue;
                }
            }
        } else {
            stdouts.push(Out::Inherit);
        }
    }

    let mut children: Vec<Child> = Vec::new();
    let mut outcome = LineOutcome::Continue;

    for (i, stage) in plan.iter().enumerate() {
        let stdin = std::mem::replace(&mut stdins[i], In::Inherit);
        let stdout = std::mem::replace(&mut stdouts[i], Out::Inherit);
        let name = stage.argv[0].as_str();

        if state::is_builtin(name) {
            match run_builtin_stage(name, &stage.argv[1..], stage, stdin, stdout) {
                Ok(BuiltinAction::Continue) => {}
                Ok(BuiltinAction::Exit(code)) => {
                    outcome = LineOutcome::Exit(code);
                    break;
                }
                Err(e) => {
                    eprintln!("{e}");
                    break;
                }
            }
            continue;
        }

        let path_env =
            std::env::var("PATH").unwrap_or_else(|_| resolution::DEFAULT_PATH.to_string());
        let Some(resolved) = resolution::resolve_on_path(name, &path_env) else {
            eprintln!("{}", ShellError::CommandNotFound(name.to_string()));
            break;
        };

        match spawn_external(&resolved, name, stage, stdin, stdout) {
            Ok(child) => children.push(child),
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
    }

    for mut child in children {
        let _ = child.wait();
    }

    outcome
}

fn run_builtin_stage(
    name: &str,
    args: &[String],
    stage: &Stage,
    stdin: In,
    stdout: Out,
) -> Result<BuiltinAction, ShellError> {
    drop(stdin); // none of the five builtins read stdin

    let mut stdout_sink: Box<dyn Write> = match stdout {
        Out::Inherit => Box::new(io::stdout()),
        Out::Pipe(f) => Box::new(f),
    };
    let mut stderr_sink: Box<dyn Write> = Box::new(io::stderr());

    for redir in &stage.redirections {
        let file = redirection::bind(redir)?;
        match redir.fd {
            TargetFd::Stdout => stdout_sink = Box::new(file),
            TargetFd::Stderr => stderr_sink = Box::new(file),
        }
    }

    Ok(builtins::run(
        name,
        args,
        stdout_sink.as_mut(),
        stderr_sink.as_mut(),
    ))
}

fn spawn_external(
    path: &Path,
    name: &str,
    stage: &Stage,
    stdin: In,
    stdout: Out,
) -> Result<Child, ShellError> {
    let mut cmd = Command::new(path);
    cmd.args(&stage.argv[1..]);

    cmd.stdin(match stdin {
        In::Inherit => Stdio::inherit(),
        In::Pipe(f) => Stdio::from(f),
    });

    let mut stdout_stdio = match stdout {
        Out::Inherit => Stdio::inherit(),
        Out::Pipe(f) => Stdio::from(f),
    };
    let mut stderr_stdio = Stdio::inherit();

    for redir in &stage.redirections {
        let file = redirection::bind(redir)?;
        match redir.fd {
            TargetFd::Stdout => stdout_stdio = Stdio::from(file),
            TargetFd::Stderr => stderr_stdio = Stdio::from(file),
        }
    }

    cmd.stdout(stdout_stdio);
    cmd.stderr(stderr_stdio);

    cmd.spawn().map_err(|reason| ShellError::SpawnFailed {
        cmd: name.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_external_stage_runs_to_completion() {
        let plan = planner::plan(&toks(&["true"])).unwrap();
        assert_eq!(execute(&plan), LineOutcome::Continue);
    }

    #[test]
    fn unresolved_command_reports_not_found_and_continues_shell() {
        let plan = planner::plan(&toks(&["definitely-not-a-real-command-xyz"])).unwrap();
        assert_eq!(execute(&plan), LineOutcome::Continue);
    }

    #[test]
    fn builtin_exit_sets_the_outcome() {
        let plan = planner::plan(&toks(&["exit", "7"])).unwrap();
        assert_eq!(execute(&plan), LineOutcome::Exit(7));
    }

    #[test]
    fn pipeline_of_two_externals_runs_to_completion() {
        let plan = planner::plan(&toks(&["echo", "hi", "|", "cat"])).unwrap();
        assert_eq!(execute(&plan), LineOutcome::Continue);
    }

    #[test]
    fn builtin_stdout_redirect_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let plan = planner::plan(&toks(&[
            "echo",
            "redirected",
            ">",
            path.to_str().unwrap(),
        ]))
        .unwrap();
        assert_eq!(execute(&plan), LineOutcome::Continue);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "redirected\n");
    }
}

//! cd - change the shell process's working directory.
//!
//! `cd` runs in the REPL's own process, never in a forked child: it must
//! be able to mutate the parent shell's cwd, even mid pipeline (see
//! DESIGN.md "cd in a pipeline").

use std::io::{ErrorKind, Write};

use crate::errors::ShellError;

pub fn run(args: &[String], stderr: &mut dyn Write) {
    let Some(arg) = args.first() else {
        let _ = writeln!(stderr, "cd: missing argument");
        return;
    };

    let target = if arg == "~" {
        std::env::var("HOME").unwrap_or_default()
    } else {
        arg.clone()
    };

    if let Err(e) = std::env::set_current_dir(&target) {
        match e.kind() {
            ErrorKind::NotFound => {
                let _ = writeln!(stderr, "{}", ShellError::CdNotFound(arg.clone()));
            }
            ErrorKind::PermissionDenied => {
                let _ = writeln!(stderr, "{}", ShellError::CdPermissionDenied(arg.clone()));
            }
            _ => {
                let _ = writeln!(stderr, "cd: {arg}: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_reports_error() {
        let mut err = Vec::new();
        run(&[], &mut err);
        assert_eq!(String::from_utf8(err).unwrap(), "cd: missing argument\n");
    }

    #[test]
    fn changes_to_an_existing_directory() {
        let original = std::env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let mut err = Vec::new();
        run(&[dir.path().to_string_lossy().to_string()], &mut err);
        assert!(err.is_empty());
        assert_eq!(
            std::env::current_dir().unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );

        std::env::set_current_dir(original).unwrap();
    }

    #[test]
    fn nonexistent_directory_reports_no_such_file() {
        let original = std::env::current_dir().unwrap();
        let mut err = Vec::new();
        run(&["/definitely/not/a/real/path/xyz".to_string()], &mut err);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "cd: /definitely/not/a/real/path/xyz: No such file or directory\n"
        );
        assert_eq!(std::env::current_dir().unwrap(), original);
    }

    #[test]
    fn tilde_expands_to_home() {
        let original = std::env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let prior_home = std::env::var("HOME").ok();
        std::env::set_var("HOME", dir.path());

        let mut err = Vec::new();
        run(&["~".to_string()], &mut err);
        assert!(err.is_empty());
        assert_eq!(
            std::env::current_dir().unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );

        std::env::set_current_dir(original).unwrap();
        match prior_home {
            Some(h) => std::env::set_var("HOME", h),
            None => std::env::remove_var("HOME"),
        }
    }
}

//! exit - terminate the shell.
//!
//! No argument exits with status 0. A single numeric argument sets the
//! exit status, wrapped modulo 256 like a real process exit status. Any
//! other argument is a usage error and the shell exits 1 without running
//! further commands in this stage.

use std::io::Write;

use super::BuiltinAction;
use crate::errors::ShellError;

pub fn run(args: &[String], stderr: &mut dyn Write) -> BuiltinAction {
    match args.first() {
        None => BuiltinAction::Exit(0),
        Some(arg) => match arg.parse::<i64>() {
            Ok(code) => BuiltinAction::Exit(code.rem_euclid(256) as i32),
            Err(_) => {
                let _ = writeln!(stderr, "{}", ShellError::ExitArgNotNumeric(arg.clone()));
                BuiltinAction::Exit(1)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_exits_zero() {
        let mut err = Vec::new();
        assert_eq!(run(&[], &mut err), BuiltinAction::Exit(0));
        assert!(err.is_empty());
    }

    #[test]
    fn numeric_argument_sets_status() {
        let mut err = Vec::new();
        assert_eq!(run(&["42".to_string()], &mut err), BuiltinAction::Exit(42));
    }

    #[test]
    fn large_code_wraps_modulo_256() {
        let mut err = Vec::new();
        assert_eq!(run(&["300".to_string()], &mut err), BuiltinAction::Exit(44));
    }

    #[test]
    fn negative_code_wraps_into_range() {
        let mut err = Vec::new();
        assert_eq!(run(&["-1".to_string()], &mut err), BuiltinAction::Exit(255));
    }

    #[test]
    fn non_numeric_argument_is_a_usage_error() {
        let mut err = Vec::new();
        assert_eq!(run(&["nope".to_string()], &mut err), BuiltinAction::Exit(1));
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "exit: nope: numeric argument required\n"
        );
    }
}

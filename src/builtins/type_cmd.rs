//! type - classify a name as a shell builtin or a PATH executable.

use std::io::Write;

use crate::exec::resolution;
use crate::state;

pub fn run(args: &[String], stdout: &mut dyn Write) {
    let Some(name) = args.first() else {
        let _ = writeln!(stdout, "argument required after type command");
        return;
    };

    if state::is_builtin(name) {
        let _ = writeln!(stdout, "{name} is a shell builtin");
        return;
    }

    let path_env = std::env::var("PATH").unwrap_or_else(|_| resolution::DEFAULT_PATH.to_string());
    match resolution::resolve_on_path(name, &path_env) {
        Some(found) => {
            let _ = writeln!(stdout, "{name} is {}", found.display());
        }
        None => {
            let _ = writeln!(stdout, "{name}: not found");
        }
    }
}

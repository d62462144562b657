//! pwd - print the current working directory.

use std::io::Write;

pub fn run(stdout: &mut dyn Write, stderr: &mut dyn Write) {
    match std::env::current_dir() {
        Ok(dir) => {
            let _ = writeln!(stdout, "{}", dir.display());
        }
        Err(e) => {
            let _ = writeln!(stderr, "pwd: {e}");
        }
    }
}

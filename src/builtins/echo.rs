//! echo - print arguments joined by a single space, then a newline.

use std::io::Write;

pub fn run(args: &[String], stdout: &mut dyn Write) {
    let line = args.join(" ");
    let _ = writeln!(stdout, "{line}");
}

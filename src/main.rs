//! REPL driver: prompt, read, lex, plan, dispatch; handles EOF and `exit`.

use rustyline::config::{CompletionType, Config};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use ushell::completion::ShellCompleter;
use ushell::{exec, lexer, planner, LineOutcome};

const PROMPT: &str = "$ ";

fn main() {
    // CompletionType::List plus show_all_if_ambiguous lets the completer
    // signal "bell" by returning zero candidates and "list" by returning
    // the full candidate set; rustyline itself rings the bell or prints
    // the listing and redraws the prompt, so the completer never needs to
    // touch the terminal directly.
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .show_all_if_ambiguous(true)
        .build();
    let mut rl: Editor<ShellCompleter, DefaultHistory> =
        Editor::with_config(config).expect("failed to init readline");
    rl.set_helper(Some(ShellCompleter::new()));

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if let Some(helper) = rl.helper() {
                    helper.reset();
                }

                let tokens = lexer::tokenize(&line);
                if tokens.is_empty() {
                    continue;
                }

                let plan = match planner::plan(&tokens) {
                    Ok(plan) => plan,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };

                match exec::execute(&plan) {
                    LineOutcome::Continue => {}
                    LineOutcome::Exit(code) => std::process::exit(code),
                }
            }
            Err(ReadlineError::Eof) => {
                std::process::exit(0);
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(e) => {
                eprintln!("readline error: {e}");
                std::process::exit(1);
            }
        }
    }
}

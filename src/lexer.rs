//! Lexer
//!
//! Tokenises a raw input line honouring single-quote, double-quote, and
//! backslash-escape rules that are distinct from each other.
//! A token carries no quoting metadata: quotes are consumed here, and
//! adjacent quoted/unquoted fragments with no separating whitespace
//! concatenate into one token (`a"b"c` -> `abc`).
//!
//! An unterminated quote at end of line is treated as an implicit close
//! rather than a syntax error (see DESIGN.md).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Normal,
    InSingle,
    InDouble,
}

/// Characters `\` escapes inside double quotes; anything else keeps the
/// backslash literal (`\n` -> `\n`, not a newline).
const DOUBLE_QUOTE_ESCAPABLE: [char; 4] = ['\\', '"', '$', '\n'];

/// Tokenise `line` into an ordered sequence of fully-unquoted tokens.
///
/// Operator characters (`|`, `>`, `<`) and their multi-char spellings are
/// only ever produced as their own tokens (the planner distinguishes them
/// from ordinary words by string equality); this function does not need to
/// know the operator vocabulary, only that it must not glue such a
/// character onto neighbouring unquoted text when whitespace separates
/// them from it in the input.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut has_current = false;
    let mut state = LexState::Normal;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            LexState::Normal => match ch {
                ' ' | '\t' => {
                    if has_current {
                        tokens.push(std::mem::take(&mut current));
                        has_current = false;
                    }
                }
                '\'' => {
                    state = LexState::InSingle;
                    has_current = true;
                }
                '"' => {
                    state = LexState::InDouble;
                    has_current = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    has_current = true;
                }
                _ => {
                    current.push(ch);
                    has_current = true;
                }
            },
            LexState::InSingle => {
                if ch == '\'' {
                    state = LexState::Normal;
                } else {
                    current.push(ch);
                }
            }
            LexState::InDouble => {
                if ch == '"' {
                    state = LexState::Normal;
                } else if ch == '\\' {
                    if let Some(&next) = chars.peek() {
                        if DOUBLE_QUOTE_ESCAPABLE.contains(&next) {
                            current.push(chars.next().unwrap());
                        } else {
                            current.push('\\');
                        }
                    } else {
                        current.push('\\');
                    }
                } else {
                    current.push(ch);
                }
            }
        }
    }

    // Unterminated quote at EOL: implicit close (reference behaviour).
    if has_current {
        tokens.push(current);
    }

    tokens
}

//! The yes/no gate in front of deletion.

use std::io::{BufRead, Write};

/// Answers that count as "yes", compared case-insensitively after trimming.
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["yes", "y"];

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    AFFIRMATIVE_ANSWERS
        .iter()
        .any(|yes| answer.eq_ignore_ascii_case(yes))
}

/// Ask `prompt` on `output` and block until one line arrives on `input`.
///
/// Anything other than an affirmative answer is a "no", including an empty
/// line, end of input and read errors.
pub fn confirm(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    if write!(output, "{prompt} [y/N] ")
        .and_then(|()| output.flush())
        .is_err()
    {
        return false;
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => {
            // Keep the next message off the prompt line
            writeln!(output).ok();
            false
        }
        Ok(_) => is_affirmative(&answer),
    }
}

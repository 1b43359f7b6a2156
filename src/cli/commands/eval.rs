//! Eval command handler
//!
//! With an expression the calculator evaluates it in one go. Without one it
//! reads stdin line by line, feeds every character as a keystroke and prints
//! the display after each line.

use super::fail;
use cgpa_calc::core::calculator::{evaluate, Calculator, Key};
use std::io::{self, BufRead, Write};

/// Run the eval command
pub fn run(expression: &[String]) {
    if expression.is_empty() {
        if let Err(e) = run_keystrokes(io::stdin().lock(), &mut io::stdout()) {
            fail(&format!("Failed to read input: {e}"));
        }
        return;
    }

    let expr = expression.join(" ");
    match evaluate(&expr) {
        Ok(value) => println!("{value}"),
        Err(e) => fail(&e.to_string()),
    }
}

fn run_keystrokes(input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut calc = Calculator::new();
    for line in input.lines() {
        let line = line?;
        for c in line.chars() {
            match Key::from_char(c) {
                Some(key) => {
                    if let Err(e) = calc.press(key) {
                        cgpa_calc::warn!("{e}");
                    }
                }
                None if c.is_whitespace() => {}
                None => cgpa_calc::debug!("Ignoring key '{c}'"),
            }
        }
        writeln!(out, "{}", calc.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn displays(input: &str) -> Vec<String> {
        let mut out = Vec::new();
        run_keystrokes(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_display_after_each_line() {
        assert_eq!(displays("12+3\n*2=\n"), vec!["3", "30"]);
    }

    #[test]
    fn test_error_state_until_digit_or_clear() {
        assert_eq!(
            displays("8/0=\n+\n1\nc\n"),
            vec!["Error", "Error", "1", "0"]
        );
    }

    #[test]
    fn test_leading_minus_subtracts_from_zero() {
        assert_eq!(displays("-5+3=\n"), vec!["-2"]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(displays("2 + 2 ?=\n"), vec!["4"]);
    }
}

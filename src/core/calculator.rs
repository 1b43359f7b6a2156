//! Four-function running calculator
//!
//! The calculator holds an accumulator, one pending operator and the entry
//! being typed. It is driven one keystroke at a time; each operator folds the
//! pending operation into the accumulator, so expressions evaluate strictly
//! left to right with no precedence.

use std::fmt;
use thiserror::Error;

/// Calculator failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Right-hand operand of a division was zero
    #[error("division by zero")]
    DivisionByZero,

    /// Result overflowed to infinity or NaN
    #[error("result is not a finite number")]
    Overflow,

    /// Expression text that cannot be tokenized or is incomplete
    #[error("syntax error: {0}")]
    Syntax(String),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Apply the operator
    ///
    /// # Errors
    /// Returns [`CalcError::DivisionByZero`] for `x / 0` and
    /// [`CalcError::Overflow`] when the result is not finite.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }

    /// Map an operator character (`x` and `÷` are accepted as aliases)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Symbol shown on the display
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A calculator keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
    /// Toggle the sign of the current entry
    Negate,
    /// Binary operator
    Op(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Delete the last typed character
    Backspace,
}

impl Key {
    /// Map a typed character to a key
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self::Digit),
            '.' => Some(Self::Point),
            '=' | '\n' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            '~' => Some(Self::Negate),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            _ => Operator::from_char(c).map(Self::Op),
        }
    }
}

/// Keystroke-driven calculator state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    accumulator: Option<f64>,
    pending: Option<Operator>,
    entry: String,
    error: Option<CalcError>,
}

impl Calculator {
    /// Create a cleared calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one keystroke
    ///
    /// Errors put the calculator in an error state; the error is also returned
    /// so callers can report it.
    ///
    /// # Errors
    /// Returns the error produced by a fold (e.g. division by zero).
    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        if self.error.is_some() {
            match key {
                Key::Clear | Key::Digit(_) | Key::Point => self.clear(),
                _ => return Ok(()),
            }
        }

        match key {
            Key::Digit(d) => {
                if self.pending.is_none() && self.entry.is_empty() {
                    // A digit after `=` starts a new calculation
                    self.accumulator = None;
                }
                if self.entry == "0" {
                    self.entry.clear();
                } else if self.entry == "-0" {
                    self.entry.truncate(1);
                }
                self.entry.push(char::from(b'0' + d.min(9)));
            }
            Key::Point => {
                if self.pending.is_none() && self.entry.is_empty() {
                    self.accumulator = None;
                }
                if !self.entry.contains('.') {
                    if self.entry.is_empty() || self.entry == "-" {
                        self.entry.push('0');
                    }
                    self.entry.push('.');
                }
            }
            Key::Negate => {
                if let Some(stripped) = self.entry.strip_prefix('-') {
                    self.entry = stripped.to_string();
                } else {
                    self.entry.insert(0, '-');
                }
            }
            Key::Backspace => {
                self.entry.pop();
            }
            Key::Clear => self.clear(),
            Key::Op(op) => {
                self.fold()?;
                // An operator on a fresh display applies to the `0` shown
                self.pending = Some(op);
                self.accumulator.get_or_insert(0.0);
            }
            Key::Equals => {
                self.fold()?;
                self.pending = None;
            }
        }
        Ok(())
    }

    /// Fold the current entry into the accumulator using the pending operator
    ///
    /// Any failure puts the calculator in its error state.
    fn fold(&mut self) -> Result<(), CalcError> {
        match self.next_value() {
            Ok(Some(result)) => {
                self.accumulator = Some(result);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn next_value(&mut self) -> Result<Option<f64>, CalcError> {
        let Some(value) = self.take_entry()? else {
            return Ok(None);
        };
        match (self.accumulator, self.pending) {
            (Some(acc), Some(op)) => op.apply(acc, value).map(Some),
            _ => Ok(Some(value)),
        }
    }

    fn take_entry(&mut self) -> Result<Option<f64>, CalcError> {
        let entry = std::mem::take(&mut self.entry);
        if entry.is_empty() || entry == "-" {
            return Ok(None);
        }
        let value = entry
            .parse::<f64>()
            .map_err(|_| CalcError::Syntax(format!("invalid number '{entry}'")))?;
        if value.is_finite() {
            Ok(Some(value))
        } else {
            Err(CalcError::Overflow)
        }
    }

    /// Reset to the initial state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Current accumulator value, if any
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.accumulator
    }

    /// Operator waiting for its right-hand operand
    #[must_use]
    pub const fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// Error that put the calculator in its error state
    #[must_use]
    pub const fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Text for the display: the entry being typed, else the accumulator, else `0`
    #[must_use]
    pub fn display(&self) -> String {
        if self.error.is_some() {
            return "Error".to_string();
        }
        if !self.entry.is_empty() {
            return self.entry.clone();
        }
        self.accumulator
            .map_or_else(|| "0".to_string(), |v| v.to_string())
    }
}

/// A token in a typed expression
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(Operator),
}

fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let expects_operand = !matches!(tokens.last(), Some(Token::Number(_)));
        if !expects_operand && (c.is_ascii_digit() || c == '.') {
            return Err(CalcError::Syntax(format!("missing operator before '{c}'")));
        }
        if c.is_ascii_digit() || c == '.' || (c == '-' && expects_operand) {
            let mut text = String::new();
            text.push(c);
            chars.next();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    text.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            let value = text
                .parse::<f64>()
                .map_err(|_| CalcError::Syntax(format!("invalid number '{text}'")))?;
            tokens.push(Token::Number(value));
        } else if let Some(op) = Operator::from_char(c) {
            if expects_operand {
                return Err(CalcError::Syntax(format!("unexpected operator '{c}'")));
            }
            tokens.push(Token::Op(op));
            chars.next();
        } else {
            return Err(CalcError::Syntax(format!("unexpected character '{c}'")));
        }
    }

    match tokens.last() {
        None => Err(CalcError::Syntax("empty expression".to_string())),
        Some(Token::Op(op)) => Err(CalcError::Syntax(format!("missing operand after '{op}'"))),
        Some(Token::Number(_)) => Ok(tokens),
    }
}

/// Evaluate an expression left to right (`12 + 3 * 2` is `30`)
///
/// # Errors
/// Returns [`CalcError::Syntax`] for malformed input and propagates
/// arithmetic errors such as division by zero.
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let mut calc = Calculator::new();
    for token in tokenize(expr)? {
        match token {
            Token::Number(n) => {
                calc.accept_number(n);
            }
            Token::Op(op) => calc.press(Key::Op(op))?,
        }
    }
    calc.press(Key::Equals)?;
    calc.value()
        .ok_or_else(|| CalcError::Syntax("empty expression".to_string()))
}

impl Calculator {
    /// Replace the current entry with a whole number, as if it had been typed
    fn accept_number(&mut self, n: f64) {
        if self.pending.is_none() {
            self.accumulator = None;
        }
        self.entry = n.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(calc: &mut Calculator, keys: &str) -> Result<(), CalcError> {
        for c in keys.chars() {
            let key = Key::from_char(c).expect("test keys are valid");
            calc.press(key)?;
        }
        Ok(())
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Divide.apply(3.0, 2.0), Ok(1.5));
        assert_eq!(
            Operator::Divide.apply(3.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_simple_keystrokes() {
        let mut calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        type_keys(&mut calc, "12+7=").unwrap();
        assert_eq!(calc.display(), "19");
        assert_eq!(calc.value(), Some(19.0));
    }

    #[test]
    fn test_running_total_no_precedence() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "2+3*4").unwrap();
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.value(), Some(5.0));
        assert_eq!(calc.pending(), Some(Operator::Multiply));
        type_keys(&mut calc, "=").unwrap();
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_operator_replaces_pending() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "9+-*2=").unwrap();
        assert_eq!(calc.value(), Some(18.0));
    }

    #[test]
    fn test_chain_after_equals() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "6/4=").unwrap();
        assert_eq!(calc.display(), "1.5");
        type_keys(&mut calc, "*2=").unwrap();
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_digit_after_equals_starts_over() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "1+1=").unwrap();
        type_keys(&mut calc, "5=").unwrap();
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_decimal_point_once() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "1..5").unwrap();
        assert_eq!(calc.display(), "1.5");
        calc.clear();
        type_keys(&mut calc, ".5").unwrap();
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_leading_zero_replaced() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "007").unwrap();
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_negate_and_backspace() {
        let mut calc = Calculator::new();
        calc.press(Key::Digit(4)).unwrap();
        calc.press(Key::Digit(2)).unwrap();
        calc.press(Key::Negate).unwrap();
        assert_eq!(calc.display(), "-42");
        calc.press(Key::Backspace).unwrap();
        assert_eq!(calc.display(), "-4");
        calc.press(Key::Negate).unwrap();
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_division_by_zero_enters_error_state() {
        let mut calc = Calculator::new();
        let result = type_keys(&mut calc, "8/0=");
        assert_eq!(result, Err(CalcError::DivisionByZero));
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.error(), Some(&CalcError::DivisionByZero));

        // Operators are ignored until cleared
        calc.press(Key::Op(Operator::Add)).unwrap();
        assert_eq!(calc.display(), "Error");

        calc.press(Key::Digit(3)).unwrap();
        assert_eq!(calc.display(), "3");
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_clear_resets() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "5+5").unwrap();
        calc.press(Key::Clear).unwrap();
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_evaluate_left_to_right() {
        assert_eq!(evaluate("12 + 3 * 2"), Ok(30.0));
        assert_eq!(evaluate("10 / 4"), Ok(2.5));
        assert_eq!(evaluate("7"), Ok(7.0));
        assert_eq!(evaluate("1.5 x 2"), Ok(3.0));
    }

    #[test]
    fn test_evaluate_negative_operands() {
        assert_eq!(evaluate("-3 + 5"), Ok(2.0));
        assert_eq!(evaluate("4 * -2"), Ok(-8.0));
        assert_eq!(evaluate("4 - -2"), Ok(6.0));
    }

    #[test]
    fn test_evaluate_errors() {
        assert_eq!(evaluate("1 / 0"), Err(CalcError::DivisionByZero));
        assert!(matches!(evaluate(""), Err(CalcError::Syntax(_))));
        assert!(matches!(evaluate("3 +"), Err(CalcError::Syntax(_))));
        assert!(matches!(evaluate("* 3"), Err(CalcError::Syntax(_))));
        assert!(matches!(evaluate("2 ^ 3"), Err(CalcError::Syntax(_))));
        assert!(matches!(evaluate("1..2 + 1"), Err(CalcError::Syntax(_))));
        assert!(matches!(evaluate("3 4"), Err(CalcError::Syntax(_))));
        assert!(matches!(evaluate("1 2 + 3"), Err(CalcError::Syntax(_))));
        assert!(matches!(evaluate("2 + 3 .5"), Err(CalcError::Syntax(_))));
    }

    #[test]
    fn test_evaluate_rejects_infinite_operand() {
        assert_eq!(evaluate(&"9".repeat(400)), Err(CalcError::Overflow));
        assert_eq!(
            evaluate(&format!("1 + {}", "9".repeat(400))),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_infinite_entry_enters_error_state() {
        let mut calc = Calculator::new();
        let result = type_keys(&mut calc, &format!("{}=", "9".repeat(400)));
        assert_eq!(result, Err(CalcError::Overflow));
        assert_eq!(calc.error(), Some(&CalcError::Overflow));
        assert_eq!(calc.display(), "Error");
        type_keys(&mut calc, "2+2=").unwrap();
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_operator_on_fresh_display_starts_from_zero() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "-5+3=").unwrap();
        assert_eq!(calc.display(), "-2");

        calc.clear();
        type_keys(&mut calc, "*7=").unwrap();
        assert_eq!(calc.value(), Some(0.0));
    }
}

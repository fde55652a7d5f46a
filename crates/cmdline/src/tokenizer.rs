//! Splits a command line into flag/value pairs.
//!
//! A token starting with `-` is a flag. It takes the following token as its
//! value unless that token is also a flag or there is none, in which case the
//! flag gets the implicit value `"true"`. Exactly one leading dash is stripped
//! from the flag name, so `--name` names the flag `-name`.

use crate::error::ParseError;

pub const FLAG_PREFIX: char = '-';

/// Value given to a flag that is not followed by a value token.
pub const IMPLICIT_VALUE: &str = "true";

/// One flag paired with its raw value, both borrowed from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub flag: &'a str,
    pub value: &'a str,
}

/// Pairs every flag token in `line` with its value, in input order.
///
/// # Errors
/// Returns [`ParseError::Malformed`] at the first bare value that does not
/// follow a flag. The error carries that token and everything after it.
pub fn tokenize(line: &str) -> Result<Vec<Assignment<'_>>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut assignments = Vec::with_capacity(tokens.len());

    let mut idx = 0;
    while let Some(&token) = tokens.get(idx) {
        let Some(flag) = token.strip_prefix(FLAG_PREFIX) else {
            return Err(ParseError::Malformed { remainder: tokens[idx..].join(" ") });
        };

        match tokens.get(idx + 1) {
            Some(&value) if !is_flag_token(value) => {
                assignments.push(Assignment { flag, value });
                idx += 2;
            },
            _ => {
                assignments.push(Assignment { flag, value: IMPLICIT_VALUE });
                idx += 1;
            },
        }
    }

    Ok(assignments)
}

fn is_flag_token(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

//! SQL identifier handling.
//!
//! Column references may be written in dotted notation (`schema.table.column`) with
//! optionally quoted parts (`public."UserTable".id`).
//!
//! - Unquoted parts are validated against: `[A-Za-z_][A-Za-z0-9_]*`, or are `*`
//! - Quoted parts allow any characters except NUL and escape `"` as `""`
//!
//! Parsed parts are stored unescaped; the grammar decides how to quote them again.

use crate::error::{BuilderError, BuilderResult};

/// Whether `s` can be written as an unquoted identifier in every supported dialect.
pub fn is_plain_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first == b'_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b == b'_' || b.is_ascii_alphanumeric())
}

/// Split a dotted identifier into its unescaped parts.
///
/// - Dotted: `schema.table.column`
/// - Quoted: `"CamelCase"."UserTable"`
/// - Mixed: `public."UserTable".id`
pub fn split_identifier(s: &str) -> BuilderResult<Vec<String>> {
    if s.is_empty() {
        return Err(BuilderError::invalid_identifier("identifier cannot be empty"));
    }
    if s.contains('\0') {
        return Err(BuilderError::invalid_identifier(
            "identifier cannot contain NUL character",
        ));
    }

    let mut parts = Vec::new();
    let mut chars = s.chars().peekable();

    while chars.peek().is_some() {
        if !parts.is_empty() {
            match chars.next() {
                Some('.') => {
                    if chars.peek().is_none() {
                        return Err(BuilderError::invalid_identifier(format!(
                            "trailing '.' in '{s}'"
                        )));
                    }
                }
                Some(c) => {
                    return Err(BuilderError::invalid_identifier(format!(
                        "expected '.' between parts of '{s}', got '{c}'"
                    )));
                }
                None => break,
            }
        }

        if chars.peek() == Some(&'"') {
            chars.next();
            let mut name = String::new();
            loop {
                match chars.next() {
                    Some('"') => {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            name.push('"');
                        } else {
                            break;
                        }
                    }
                    Some(c) => name.push(c),
                    None => {
                        return Err(BuilderError::invalid_identifier(format!(
                            "unclosed quote in '{s}'"
                        )));
                    }
                }
            }
            if name.is_empty() {
                return Err(BuilderError::invalid_identifier(format!(
                    "empty quoted part in '{s}'"
                )));
            }
            parts.push(name);
            continue;
        }

        if chars.peek() == Some(&'*') {
            chars.next();
            if chars.peek().is_some() {
                return Err(BuilderError::invalid_identifier(format!(
                    "'*' must be the last part of '{s}'"
                )));
            }
            parts.push("*".to_string());
            break;
        }

        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if c == '.' {
                break;
            }
            let valid = if name.is_empty() {
                c == '_' || c.is_ascii_alphabetic()
            } else {
                c == '_' || c.is_ascii_alphanumeric()
            };
            if !valid {
                return Err(BuilderError::invalid_identifier(format!(
                    "invalid character '{c}' in '{s}'"
                )));
            }
            name.push(c);
            chars.next();
        }
        if name.is_empty() {
            return Err(BuilderError::invalid_identifier(format!(
                "empty segment in '{s}'"
            )));
        }
        parts.push(name);
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers() {
        assert!(is_plain_identifier("users"));
        assert!(is_plain_identifier("_tmp1"));
        assert!(!is_plain_identifier("1table"));
        assert!(!is_plain_identifier("my table"));
        assert!(!is_plain_identifier(""));
    }

    #[test]
    fn split_dotted() {
        assert_eq!(
            split_identifier("public.users.id").unwrap(),
            vec!["public", "users", "id"]
        );
    }

    #[test]
    fn split_quoted_with_escape() {
        assert_eq!(
            split_identifier(r#"public."Odd""Name".id"#).unwrap(),
            vec!["public", r#"Odd"Name"#, "id"]
        );
    }

    #[test]
    fn split_star() {
        assert_eq!(split_identifier("u.*").unwrap(), vec!["u", "*"]);
        assert!(split_identifier("*.u").is_err());
    }

    #[test]
    fn split_rejects_malformed() {
        assert!(split_identifier("").is_err());
        assert!(split_identifier("schema..table").is_err());
        assert!(split_identifier("schema.").is_err());
        assert!(split_identifier(r#""unclosed"#).is_err());
        assert!(split_identifier("count(*)").is_err());
    }
}

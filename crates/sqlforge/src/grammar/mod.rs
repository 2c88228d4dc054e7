//! SQL dialect grammars.
//!
//! A [`Grammar`] supplies everything dialect-specific the serializer needs:
//! keyword spellings, identifier quoting, string-literal escaping and the lexical
//! casts for numbers and blobs. The serializer itself never escapes anything.
//!
//! - [`SqliteGrammar`] and [`PostgresGrammar`] quote identifiers with `"`
//! - [`MySqlGrammar`] quotes identifiers with `` ` `` and escapes backslashes in literals

mod dialects;
mod keywords;

pub use dialects::{MySqlGrammar, PostgresGrammar, SqliteGrammar};
pub use keywords::{KeywordCase, Keywords};

use crate::ident::is_plain_identifier;

/// Dialect capability consumed by the serializer.
///
/// Implementations must be safe to share across threads: rendering only ever reads
/// from the grammar.
pub trait Grammar: Send + Sync {
    /// Human-readable dialect name (e.g. "SQLite").
    fn name(&self) -> &'static str;

    /// Keyword table used for every keyword the serializer emits.
    fn keywords(&self) -> &'static Keywords;

    /// Append `raw` as an always-quoted identifier (used for table names).
    fn quoted_escape(&self, raw: &str, out: &mut String);

    /// Append `raw` as a string literal.
    fn quote_literal(&self, raw: &str, out: &mut String);

    /// Whether `raw` may be written without quotes.
    fn is_bare_identifier(&self, raw: &str) -> bool {
        is_plain_identifier(raw) && !Keywords::is_reserved(raw)
    }

    /// Append a column-like identifier, quoting only when needed.
    fn escape_identifier(&self, raw: &str, out: &mut String) {
        if self.is_bare_identifier(raw) {
            out.push_str(raw);
        } else {
            self.quoted_escape(raw, out);
        }
    }

    /// Append an integer literal.
    fn write_integer(&self, value: i64, out: &mut String) {
        out.push_str(&value.to_string());
    }

    /// Append a finite float literal; the text always keeps a fractional part.
    fn write_float(&self, value: f64, out: &mut String) {
        let text = value.to_string();
        out.push_str(&text);
        if !text.contains(['.', 'e', 'E']) {
            out.push_str(".0");
        }
    }

    /// Append a blob literal.
    fn write_blob(&self, bytes: &[u8], out: &mut String) {
        out.push_str("X'");
        push_hex(bytes, out, true);
        out.push('\'');
    }
}

/// Append `raw` wrapped in `quote`, doubling embedded quotes.
pub(crate) fn push_quoted(raw: &str, quote: char, out: &mut String) {
    out.reserve(raw.len() + 2);
    out.push(quote);
    for ch in raw.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
}

pub(crate) fn push_hex(bytes: &[u8], out: &mut String, upper: bool) {
    const UPPER: &[u8; 16] = b"0123456789ABCDEF";
    const LOWER: &[u8; 16] = b"0123456789abcdef";
    let table = if upper { UPPER } else { LOWER };
    out.reserve(bytes.len() * 2);
    for byte in bytes {
        out.push(table[(byte >> 4) as usize] as char);
        out.push(table[(byte & 0x0f) as usize] as char);
    }
}

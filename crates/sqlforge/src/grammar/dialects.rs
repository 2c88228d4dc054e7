use super::{Grammar, KeywordCase, Keywords, push_hex, push_quoted};
use crate::ident::is_plain_identifier;

/// SQLite: `"ident"`, `'literal'`, `X'0A'` blobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteGrammar {
    case: KeywordCase,
}

impl SqliteGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit keywords in the given case.
    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.case = case;
        self
    }
}

impl Grammar for SqliteGrammar {
    fn name(&self) -> &'static str {
        "SQLite"
    }

    fn keywords(&self) -> &'static Keywords {
        Keywords::for_case(self.case)
    }

    fn quoted_escape(&self, raw: &str, out: &mut String) {
        push_quoted(raw, '"', out);
    }

    fn quote_literal(&self, raw: &str, out: &mut String) {
        push_quoted(raw, '\'', out);
    }
}

/// PostgreSQL: `"ident"`, `'literal'`, `'\x0a'` blobs.
///
/// Unquoted identifiers are folded to lower case by the server, so identifiers with
/// upper-case letters are always quoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresGrammar {
    case: KeywordCase,
}

impl PostgresGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit keywords in the given case.
    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.case = case;
        self
    }
}

impl Grammar for PostgresGrammar {
    fn name(&self) -> &'static str {
        "PostgreSQL"
    }

    fn keywords(&self) -> &'static Keywords {
        Keywords::for_case(self.case)
    }

    fn quoted_escape(&self, raw: &str, out: &mut String) {
        push_quoted(raw, '"', out);
    }

    fn quote_literal(&self, raw: &str, out: &mut String) {
        push_quoted(raw, '\'', out);
    }

    fn is_bare_identifier(&self, raw: &str) -> bool {
        is_plain_identifier(raw)
            && !raw.bytes().any(|b| b.is_ascii_uppercase())
            && !Keywords::is_reserved(raw)
    }

    fn write_blob(&self, bytes: &[u8], out: &mut String) {
        out.push_str("'\\x");
        push_hex(bytes, out, false);
        out.push('\'');
    }
}

/// MySQL: `` `ident` ``, `'literal'` with backslash escaping, `X'0A'` blobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlGrammar {
    case: KeywordCase,
}

impl MySqlGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit keywords in the given case.
    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.case = case;
        self
    }
}

impl Grammar for MySqlGrammar {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn keywords(&self) -> &'static Keywords {
        Keywords::for_case(self.case)
    }

    fn quoted_escape(&self, raw: &str, out: &mut String) {
        push_quoted(raw, '`', out);
    }

    fn quote_literal(&self, raw: &str, out: &mut String) {
        out.reserve(raw.len() + 2);
        out.push('\'');
        for ch in raw.chars() {
            match ch {
                '\'' => out.push_str("''"),
                '\\' => out.push_str("\\\\"),
                '\0' => out.push_str("\\0"),
                _ => out.push(ch),
            }
        }
        out.push('\'');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(grammar: &dyn Grammar, raw: &str) -> String {
        let mut out = String::new();
        grammar.quoted_escape(raw, &mut out);
        out
    }

    fn literal(grammar: &dyn Grammar, raw: &str) -> String {
        let mut out = String::new();
        grammar.quote_literal(raw, &mut out);
        out
    }

    fn ident(grammar: &dyn Grammar, raw: &str) -> String {
        let mut out = String::new();
        grammar.escape_identifier(raw, &mut out);
        out
    }

    #[test]
    fn sqlite_quoting() {
        let g = SqliteGrammar::new();
        assert_eq!(quoted(&g, "users"), r#""users""#);
        assert_eq!(quoted(&g, r#"we"ird"#), r#""we""ird""#);
        assert_eq!(literal(&g, "it's"), "'it''s'");
    }

    #[test]
    fn identifiers_stay_bare_when_plain() {
        let g = SqliteGrammar::new();
        assert_eq!(ident(&g, "user_id"), "user_id");
        assert_eq!(ident(&g, "order"), r#""order""#);
        assert_eq!(ident(&g, "first name"), r#""first name""#);
        assert_eq!(ident(&g, "1st"), r#""1st""#);
    }

    #[test]
    fn postgres_quotes_mixed_case() {
        let g = PostgresGrammar::new();
        assert_eq!(ident(&g, "userName"), r#""userName""#);
        assert_eq!(ident(&g, "username"), "username");
    }

    #[test]
    fn mysql_quoting() {
        let g = MySqlGrammar::new();
        assert_eq!(quoted(&g, "users"), "`users`");
        assert_eq!(quoted(&g, "a`b"), "`a``b`");
        assert_eq!(literal(&g, r"c:\tmp"), r"'c:\\tmp'");
        assert_eq!(literal(&g, "it's"), "'it''s'");
    }

    #[test]
    fn numeric_casts() {
        let g = SqliteGrammar::new();
        let mut out = String::new();
        g.write_integer(-42, &mut out);
        out.push(' ');
        g.write_float(1.0, &mut out);
        out.push(' ');
        g.write_float(2.5, &mut out);
        assert_eq!(out, "-42 1.0 2.5");
    }

    #[test]
    fn blob_literals() {
        let mut out = String::new();
        SqliteGrammar::new().write_blob(&[0x0a, 0xff], &mut out);
        assert_eq!(out, "X'0AFF'");

        let mut out = String::new();
        PostgresGrammar::new().write_blob(&[0x0a, 0xff], &mut out);
        assert_eq!(out, r"'\x0aff'");
    }

    #[test]
    fn keyword_case_is_configurable() {
        let g = SqliteGrammar::new().with_keyword_case(KeywordCase::Lower);
        assert_eq!(g.keywords().select, "select");
        assert_eq!(SqliteGrammar::new().keywords().select, "SELECT");
    }
}

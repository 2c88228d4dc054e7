//! Keyword spellings shared by every grammar.

use serde::Deserialize;

/// Whether keywords are emitted in upper or lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCase {
    #[default]
    Upper,
    Lower,
}

/// The fixed keyword table the serializer writes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keywords {
    pub select: &'static str,
    pub from: &'static str,
    pub where_word: &'static str,
    pub insert: &'static str,
    pub into: &'static str,
    pub values: &'static str,
    pub default_word: &'static str,
    pub update: &'static str,
    pub set: &'static str,
    pub delete_word: &'static str,
    pub and_word: &'static str,
    pub or_word: &'static str,
    pub not_word: &'static str,
    pub is: &'static str,
    pub null: &'static str,
    pub distinct: &'static str,
    pub in_word: &'static str,
    pub using_word: &'static str,
    pub on_word: &'static str,
    pub inner: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub full: &'static str,
    pub cross: &'static str,
    pub join: &'static str,
    pub true_word: &'static str,
    pub false_word: &'static str,
}

static UPPER: Keywords = Keywords {
    select: "SELECT",
    from: "FROM",
    where_word: "WHERE",
    insert: "INSERT",
    into: "INTO",
    values: "VALUES",
    default_word: "DEFAULT",
    update: "UPDATE",
    set: "SET",
    delete_word: "DELETE",
    and_word: "AND",
    or_word: "OR",
    not_word: "NOT",
    is: "IS",
    null: "NULL",
    distinct: "DISTINCT",
    in_word: "IN",
    using_word: "USING",
    on_word: "ON",
    inner: "INNER",
    left: "LEFT",
    right: "RIGHT",
    full: "FULL",
    cross: "CROSS",
    join: "JOIN",
    true_word: "TRUE",
    false_word: "FALSE",
};

static LOWER: Keywords = Keywords {
    select: "select",
    from: "from",
    where_word: "where",
    insert: "insert",
    into: "into",
    values: "values",
    default_word: "default",
    update: "update",
    set: "set",
    delete_word: "delete",
    and_word: "and",
    or_word: "or",
    not_word: "not",
    is: "is",
    null: "null",
    distinct: "distinct",
    in_word: "in",
    using_word: "using",
    on_word: "on",
    inner: "inner",
    left: "left",
    right: "right",
    full: "full",
    cross: "cross",
    join: "join",
    true_word: "true",
    false_word: "false",
};

/// Words that must be quoted when used as an identifier.
///
/// Sorted, upper case; compared case-insensitively.
const RESERVED: &[&str] = &[
    "ALL", "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN",
    "CONSTRAINT", "CREATE", "CROSS", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE",
    "END", "EXISTS", "FALSE", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IN", "INDEX",
    "INNER", "INSERT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT", "NULL",
    "OFFSET", "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SET",
    "TABLE", "THEN", "TO", "TRUE", "UNION", "UNIQUE", "UPDATE", "USER", "USING", "VALUES",
    "WHEN", "WHERE", "WITH",
];

impl Keywords {
    /// The keyword table for a case setting.
    pub fn for_case(case: KeywordCase) -> &'static Keywords {
        match case {
            KeywordCase::Upper => &UPPER,
            KeywordCase::Lower => &LOWER,
        }
    }

    /// Check whether `word` is reserved and therefore unusable as a bare identifier.
    pub fn is_reserved(word: &str) -> bool {
        RESERVED
            .binary_search_by(|entry| cmp_ignore_ascii_case(entry, word))
            .is_ok()
    }
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> std::cmp::Ordering {
    a.bytes()
        .map(|c| c.to_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.to_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_list_is_sorted() {
        let mut sorted = RESERVED.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED);
    }

    #[test]
    fn reserved_lookup_ignores_case() {
        assert!(Keywords::is_reserved("select"));
        assert!(Keywords::is_reserved("Order"));
        assert!(!Keywords::is_reserved("users"));
    }

    #[test]
    fn case_tables() {
        assert_eq!(Keywords::for_case(KeywordCase::Upper).select, "SELECT");
        assert_eq!(Keywords::for_case(KeywordCase::Lower).join, "join");
    }
}

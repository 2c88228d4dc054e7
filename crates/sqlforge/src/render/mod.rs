//! Output buffer shared by the statement serializer and the expression nodes.

mod statement;

use crate::config::RenderConfig;
use crate::error::BuilderError;
use crate::grammar::{Grammar, Keywords};

/// Tracing target for everything the builder and serializer log.
pub(crate) const LOG_TARGET: &str = "sqlforge::builder";

/// Collects SQL text while a query is serialized.
///
/// The renderer only borrows the grammar and configuration; problems found while
/// rendering are collected rather than aborting, so a caller can still inspect the
/// partial text.
pub struct Renderer<'g> {
    sql: String,
    grammar: &'g dyn Grammar,
    config: &'g RenderConfig,
    errors: Vec<BuilderError>,
    /// Errors replayed from builders; these were logged by the call that recorded them.
    recorded: Vec<BuilderError>,
}

impl<'g> Renderer<'g> {
    pub fn new(grammar: &'g dyn Grammar, config: &'g RenderConfig) -> Self {
        Self {
            sql: String::with_capacity(128),
            grammar,
            config,
            errors: Vec::new(),
            recorded: Vec::new(),
        }
    }

    pub fn grammar(&self) -> &'g dyn Grammar {
        self.grammar
    }

    pub fn config(&self) -> &'g RenderConfig {
        self.config
    }

    pub fn keywords(&self) -> &'static Keywords {
        self.grammar.keywords()
    }

    /// The text rendered so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Problems reported so far.
    pub fn errors(&self) -> &[BuilderError] {
        &self.errors
    }

    /// Append raw text.
    pub fn push(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    pub fn push_char(&mut self, c: char) {
        self.sql.push(c);
    }

    /// Append a keyword picked from the grammar's table.
    pub fn keyword(&mut self, pick: fn(&Keywords) -> &'static str) {
        self.sql.push_str(pick(self.grammar.keywords()));
    }

    /// Append an always-quoted identifier.
    pub fn quoted(&mut self, raw: &str) {
        self.grammar.quoted_escape(raw, &mut self.sql);
    }

    /// Append an identifier, quoted only when the grammar requires it.
    pub fn identifier(&mut self, raw: &str) {
        self.grammar.escape_identifier(raw, &mut self.sql);
    }

    pub fn string_literal(&mut self, raw: &str) {
        self.grammar.quote_literal(raw, &mut self.sql);
    }

    pub fn integer(&mut self, value: i64) {
        self.grammar.write_integer(value, &mut self.sql);
    }

    pub fn float(&mut self, value: f64) {
        self.grammar.write_float(value, &mut self.sql);
    }

    pub fn blob(&mut self, bytes: &[u8]) {
        self.grammar.write_blob(bytes, &mut self.sql);
    }

    /// Append `items` separated by `", "`.
    pub fn comma_separated<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            each(self, item);
        }
    }

    /// Record a problem found while rendering.
    pub fn report(&mut self, err: BuilderError) {
        if !self.errors.contains(&err) {
            self.errors.push(err);
        }
    }

    /// Report an error a builder recorded earlier.
    pub(crate) fn replay(&mut self, err: &BuilderError) {
        self.report(err.clone());
        if !self.recorded.contains(err) {
            self.recorded.push(err.clone());
        }
    }

    pub(crate) fn is_recorded(&self, err: &BuilderError) -> bool {
        self.recorded.contains(err)
    }

    /// Insert `c` at byte offset `at` of the text rendered so far.
    pub(crate) fn insert_char(&mut self, at: usize, c: char) {
        self.sql.insert(at, c);
    }

    /// Consume the renderer, returning the text and the reported problems.
    pub fn finish(self) -> (String, Vec<BuilderError>) {
        (self.sql, self.errors)
    }
}

/// Shorten `sql` to at most `max` bytes on a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max: usize) -> &str {
    if sql.len() <= max {
        return sql;
    }
    let mut end = max;
    while !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

use serde::Deserialize;
use std::path::Path;

use crate::error::{BuilderError, BuilderResult};
use crate::grammar::{Grammar, KeywordCase, MySqlGrammar, PostgresGrammar, SqliteGrammar};

/// Which built-in grammar a config file selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    #[default]
    Sqlite,
    Postgres,
    Mysql,
}

/// Settings for rendering queries to text.
///
/// Every field has a default, so a config file only needs to name what it changes:
///
/// ```toml
/// dialect = "postgres"
/// keyword_case = "lower"
/// escape_select_columns = true
/// max_logged_sql = 500
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Grammar built by [`RenderConfig::grammar`].
    pub dialect: Dialect,
    /// Keyword spelling for the grammar built by [`RenderConfig::grammar`].
    pub keyword_case: KeywordCase,
    /// Pass SELECT columns through identifier escaping instead of writing them as-is.
    ///
    /// Off by default so projections such as `count(*)` or `name AS n` survive.
    pub escape_select_columns: bool,
    /// Emit a `debug` event with the rendered text.
    pub log_rendered_sql: bool,
    /// Truncate logged SQL to this many bytes. `None` logs it whole.
    pub max_logged_sql: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            keyword_case: KeywordCase::default(),
            escape_select_columns: false,
            log_rendered_sql: true,
            max_logged_sql: Some(200),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.keyword_case = case;
        self
    }

    /// Escape SELECT column names through the grammar.
    pub fn with_escape_select_columns(mut self, escape: bool) -> Self {
        self.escape_select_columns = escape;
        self
    }

    pub fn with_log_rendered_sql(mut self, log: bool) -> Self {
        self.log_rendered_sql = log;
        self
    }

    /// Limit logged SQL to `max` bytes; `None` disables truncation.
    pub fn with_max_logged_sql(mut self, max: Option<usize>) -> Self {
        self.max_logged_sql = max;
        self
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(raw: &str) -> BuilderResult<Self> {
        toml::from_str(raw).map_err(|e| BuilderError::config(format!("failed to parse config: {e}")))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> BuilderResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BuilderError::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        toml::from_str(&raw).map_err(|e| {
            BuilderError::config(format!("failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Build the grammar this config selects.
    pub fn grammar(&self) -> Box<dyn Grammar> {
        match self.dialect {
            Dialect::Sqlite => Box::new(SqliteGrammar::new().with_keyword_case(self.keyword_case)),
            Dialect::Postgres => {
                Box::new(PostgresGrammar::new().with_keyword_case(self.keyword_case))
            }
            Dialect::Mysql => Box::new(MySqlGrammar::new().with_keyword_case(self.keyword_case)),
        }
    }
}

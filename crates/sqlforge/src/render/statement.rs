//! Statement serializer: one writer per [`QueryMethod`].

use super::{LOG_TARGET, Renderer, truncate_sql_bytes};
use crate::builder::{
    Join, JoinCondition, JoinKind, JoinTarget, QueryBuilder, QueryMethod, insert_is_rectangular,
};
use crate::config::RenderConfig;
use crate::error::{BuilderError, BuilderResult};
use crate::expr::{col, render_subquery};
use crate::grammar::{Grammar, Keywords};

impl QueryBuilder {
    /// Render with default settings.
    ///
    /// Problems are logged and the text rendered so far is returned; a builder that
    /// cannot be rendered at all yields an empty string. Use
    /// [`try_to_sql`](QueryBuilder::try_to_sql) to get them as an error instead.
    pub fn to_sql(&self, grammar: &dyn Grammar) -> String {
        self.to_sql_with(grammar, &RenderConfig::default())
    }

    pub fn to_sql_with(&self, grammar: &dyn Grammar, config: &RenderConfig) -> String {
        let mut r = Renderer::new(grammar, config);
        self.write_sql(&mut r);

        // Errors recorded by builder calls, nested ones included, were logged when
        // they happened.
        for err in r.errors().iter().filter(|e| !r.is_recorded(e)) {
            if err.is_empty_query() {
                tracing::warn!(
                    target: LOG_TARGET,
                    grammar = grammar.name(),
                    error = %err,
                    "nothing to render"
                );
            } else {
                tracing::error!(
                    target: LOG_TARGET,
                    grammar = grammar.name(),
                    error = %err,
                    "render failed"
                );
            }
        }
        let (sql, _) = r.finish();

        if config.log_rendered_sql && !sql.is_empty() {
            let logged = match config.max_logged_sql {
                Some(max) => truncate_sql_bytes(&sql, max),
                None => &sql,
            };
            tracing::debug!(
                target: LOG_TARGET,
                grammar = grammar.name(),
                sql = %logged,
                "rendered query"
            );
        }

        sql
    }

    /// Render with default settings, failing on the first recorded or render-time error.
    pub fn try_to_sql(&self, grammar: &dyn Grammar) -> BuilderResult<String> {
        self.try_to_sql_with(grammar, &RenderConfig::default())
    }

    pub fn try_to_sql_with(
        &self,
        grammar: &dyn Grammar,
        config: &RenderConfig,
    ) -> BuilderResult<String> {
        let (sql, errors) = self.render_with(grammar, config);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(sql),
        }
    }

    fn render_with(
        &self,
        grammar: &dyn Grammar,
        config: &RenderConfig,
    ) -> (String, Vec<BuilderError>) {
        let mut r = Renderer::new(grammar, config);
        self.write_sql(&mut r);
        r.finish()
    }

    /// Append this statement to `r`. Nested builders render through here too.
    pub fn write_sql(&self, r: &mut Renderer<'_>) {
        for err in self.errors() {
            r.replay(err);
        }
        match self.method() {
            QueryMethod::Select => self.write_select(r),
            QueryMethod::Insert => self.write_insert(r),
            QueryMethod::InsertDefault => self.write_insert_default(r),
            QueryMethod::Update => self.write_update(r),
            QueryMethod::Delete => self.write_delete(r),
            QueryMethod::None => r.report(BuilderError::EmptyQuery),
        }
    }

    fn write_select(&self, r: &mut Renderer<'_>) {
        r.keyword(|k| k.select);
        r.push_char(' ');
        if self.columns().is_empty() {
            r.push_char('*');
        } else if r.config().escape_select_columns {
            r.comma_separated(self.columns(), |r, c| col(c).render(r));
        } else {
            r.comma_separated(self.columns(), |r, c| r.push(c));
        }

        if self.from_tables().is_empty() {
            r.report(BuilderError::missing_table("SELECT"));
        } else {
            r.push_char(' ');
            r.keyword(|k| k.from);
            r.push_char(' ');
            r.comma_separated(self.from_tables(), |r, t| r.quoted(t));
        }

        self.write_joins(r);
        self.write_where(r);
    }

    fn write_insert(&self, r: &mut Renderer<'_>) {
        let Some(table) = self.target_table(r, "INSERT") else {
            return;
        };
        let columns = self.columns();
        let values = self.values();

        if self.select_stmt().is_none() {
            if !columns.is_empty() && values.is_empty() {
                r.report(BuilderError::MissingValues);
                return;
            }
            if !insert_is_rectangular(columns.len(), values.len()) {
                r.report(BuilderError::ColumnValueMismatch {
                    columns: columns.len(),
                    values: values.len(),
                });
                return;
            }
        }

        write_insert_into(table, r);
        if let Some(source) = self.select_stmt() {
            if !columns.is_empty() {
                r.push(" (");
                r.comma_separated(columns, |r, c| r.identifier(c));
                r.push_char(')');
            }
            if !source.is_select() {
                r.report(BuilderError::only_select("INSERT ... SELECT"));
            }
            r.push_char(' ');
            source.write_sql(r);
        } else if columns.is_empty() {
            write_default_values(r);
        } else {
            r.push(" (");
            r.comma_separated(columns, |r, c| r.identifier(c));
            r.push(") ");
            r.keyword(|k| k.values);
            r.push_char(' ');
            for (i, row) in values.chunks(columns.len()).enumerate() {
                if i > 0 {
                    r.push(", ");
                }
                r.push_char('(');
                r.comma_separated(row, |r, e| e.render(r));
                r.push_char(')');
            }
        }
    }

    fn write_insert_default(&self, r: &mut Renderer<'_>) {
        let Some(table) = self.target_table(r, "INSERT") else {
            return;
        };
        write_insert_into(table, r);
        write_default_values(r);
    }

    fn write_update(&self, r: &mut Renderer<'_>) {
        let Some(table) = self.target_table(r, "UPDATE") else {
            return;
        };
        let columns = self.columns();
        let values = self.values();
        if values.is_empty() {
            return;
        }
        if columns.len() != values.len() {
            r.report(BuilderError::ColumnValueMismatch {
                columns: columns.len(),
                values: values.len(),
            });
            return;
        }

        r.keyword(|k| k.update);
        r.push_char(' ');
        r.quoted(table);
        r.push_char(' ');
        r.keyword(|k| k.set);
        r.push_char(' ');
        for (i, (column, value)) in columns.iter().zip(values).enumerate() {
            if i > 0 {
                r.push(", ");
            }
            r.identifier(column);
            r.push(" = ");
            value.render(r);
        }
        self.write_where(r);
    }

    fn write_delete(&self, r: &mut Renderer<'_>) {
        let Some(table) = self.target_table(r, "DELETE") else {
            return;
        };
        r.keyword(|k| k.delete_word);
        r.push_char(' ');
        r.keyword(|k| k.from);
        r.push_char(' ');
        r.quoted(table);
        self.write_where(r);
    }

    fn target_table(&self, r: &mut Renderer<'_>, statement: &'static str) -> Option<&str> {
        let table = self.from_tables().first().map(String::as_str);
        if table.is_none() {
            r.report(BuilderError::missing_table(statement));
        }
        table
    }

    fn write_joins(&self, r: &mut Renderer<'_>) {
        for join in self.joins() {
            write_join(join, r);
        }
    }

    fn write_where(&self, r: &mut Renderer<'_>) {
        let clauses = self.where_clauses();
        if clauses.is_empty() {
            return;
        }
        r.push_char(' ');
        r.keyword(|k| k.where_word);
        r.push_char(' ');
        for clause in clauses {
            clause.render(r);
        }
    }
}

fn write_insert_into(table: &str, r: &mut Renderer<'_>) {
    r.keyword(|k| k.insert);
    r.push_char(' ');
    r.keyword(|k| k.into);
    r.push_char(' ');
    r.quoted(table);
}

fn write_default_values(r: &mut Renderer<'_>) {
    r.push_char(' ');
    r.keyword(|k| k.default_word);
    r.push_char(' ');
    r.keyword(|k| k.values);
}

fn write_join(join: &Join, r: &mut Renderer<'_>) {
    r.push_char(' ');
    let kind: fn(&Keywords) -> &'static str = match join.kind {
        JoinKind::Inner => |k| k.inner,
        JoinKind::Left => |k| k.left,
        JoinKind::Right => |k| k.right,
        JoinKind::Full => |k| k.full,
        JoinKind::Cross => |k| k.cross,
    };
    r.keyword(kind);
    r.push_char(' ');
    r.keyword(|k| k.join);
    r.push_char(' ');
    match &join.target {
        JoinTarget::Table(name) => r.quoted(name),
        JoinTarget::Subquery(query) => render_subquery(query, "JOIN", r),
    }
    match &join.condition {
        JoinCondition::None => {}
        JoinCondition::On(expr) => {
            r.push_char(' ');
            r.keyword(|k| k.on_word);
            r.push_char(' ');
            expr.render(r);
        }
        JoinCondition::Using(columns) => {
            r.push_char(' ');
            r.keyword(|k| k.using_word);
            r.push(" (");
            r.comma_separated(columns, |r, c| r.identifier(c));
            r.push_char(')');
        }
    }
}

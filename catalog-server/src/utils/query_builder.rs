//! Dynamic WHERE clause builder
//!
//! Values are always carried as bindings; only column names and
//! placeholders end up in the SQL text. Statements that bind one value per
//! caller-supplied item are split into batches of [`BIND_CHUNK`] values.

use shared::models::ProductFilter;
use sqlx::Sqlite;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::SqliteArguments;

/// Upper bound on bound values per statement for batched queries
pub const BIND_CHUNK: usize = 500;

/// Query builder for constructing SQL queries with dynamic WHERE conditions
#[derive(Debug, Default)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    bindings: Vec<QueryValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Float(f64),
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a product search filter
    ///
    /// Clauses are emitted in the order title, description, priceFrom,
    /// priceTo. Text matches run against the lowercased `*_search` columns
    /// with a lowercased needle, so case folding covers all of Unicode and
    /// not just ASCII. Price bounds are inclusive and compare the numeric
    /// value of the stored text.
    pub fn from_filter(filter: &ProductFilter) -> Self {
        let mut builder = Self::new();
        if let Some(title) = &filter.title {
            builder.add_like_condition("title_search", &search_key(title));
        }
        if let Some(description) = &filter.description {
            builder.add_like_condition("description_search", &search_key(description));
        }
        if let Some(from) = filter.price_from {
            builder
                .add_condition("CAST(price AS REAL) >= ?")
                .bind_f64(from);
        }
        if let Some(to) = filter.price_to {
            builder.add_condition("CAST(price AS REAL) <= ?").bind_f64(to);
        }
        builder
    }

    /// Add a condition; its placeholders must be bound separately
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// Add a text binding
    pub fn bind_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.bindings.push(QueryValue::Text(value.into()));
        self
    }

    /// Add a float binding
    pub fn bind_f64(&mut self, value: f64) -> &mut Self {
        self.bindings.push(QueryValue::Float(value));
        self
    }

    /// "Contains" match on one column
    pub fn add_like_condition(&mut self, field: &str, needle: &str) -> &mut Self {
        self.conditions
            .push(format!("{} LIKE ? ESCAPE '\\'", field));
        self.bindings
            .push(QueryValue::Text(format!("%{}%", escape_like(needle))));
        self
    }

    /// Add IN condition over text values
    ///
    /// An empty list yields a condition that matches nothing.
    pub fn add_in_condition<S: AsRef<str>>(&mut self, field: &str, values: &[S]) -> &mut Self {
        if values.is_empty() {
            self.conditions.push("1 = 0".to_string());
            return self;
        }
        let condition = format!("{} IN ({})", field, placeholders(values.len()));
        self.conditions.push(condition);

        for val in values {
            self.bindings.push(QueryValue::Text(val.as_ref().to_string()));
        }

        self
    }

    /// Build WHERE clause (empty if no conditions)
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn bindings(&self) -> &[QueryValue] {
        &self.bindings
    }

    /// Apply bindings to a SQLx query
    pub fn apply_bindings<'a>(
        &self,
        mut query: Query<'a, Sqlite, SqliteArguments<'a>>,
    ) -> Query<'a, Sqlite, SqliteArguments<'a>> {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s.clone()),
                QueryValue::Float(f) => query.bind(*f),
            };
        }
        query
    }

    /// Apply bindings to a SQLx query_as
    pub fn apply_bindings_as<'a, O>(
        &self,
        mut query: QueryAs<'a, Sqlite, O, SqliteArguments<'a>>,
    ) -> QueryAs<'a, Sqlite, O, SqliteArguments<'a>> {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s.clone()),
                QueryValue::Float(f) => query.bind(*f),
            };
        }
        query
    }
}

/// `?, ?, ?` for `n` values
pub fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// Rows per multi-row INSERT with `columns` values each
pub fn rows_per_chunk(columns: usize) -> usize {
    (BIND_CHUNK / columns.max(1)).max(1)
}

/// Normalized form stored in the `*_search` columns and used for needles
pub fn search_key(text: &str) -> String {
    text.to_lowercase()
}

fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

//! Builds the parameterized SELECT, INSERT, UPDATE, DELETE statements for the author table.

use crate::entity::{AuthorDraft, AuthorPatch};
use crate::sql::params::SqlParam;

pub const AUTHOR_TABLE: &str = "author";

/// Column list in `Author` field order.
const AUTHOR_COLUMNS: &[&str] = &["id", "first_name", "last_name", "created_at", "updated_at"];

/// Quote identifier for PostgreSQL (safe: only from config).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn select_column_list() -> String {
    AUTHOR_COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row. No ORDER BY: rows come back in store order.
pub fn select_all(schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, AUTHOR_TABLE);
    q.sql = format!("SELECT {} FROM {}", select_column_list(), table);
    q
}

pub fn select_by_id(schema: &str, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, AUTHOR_TABLE);
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(),
        table,
        quoted("id"),
        n
    );
    q
}

/// INSERT names only; id and both timestamps come from column defaults.
pub fn insert(schema: &str, draft: &AuthorDraft) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, AUTHOR_TABLE);
    let first = q.push_param(SqlParam::Text(draft.first_name.clone()));
    let last = q.push_param(SqlParam::Text(draft.last_name.clone()));
    q.sql = format!(
        "INSERT INTO {} ({}, {}) VALUES (${}, ${}) RETURNING {}",
        table,
        quoted("first_name"),
        quoted("last_name"),
        first,
        last,
        select_column_list()
    );
    q
}

/// UPDATE the supplied fields and always refresh updated_at.
pub fn update(schema: &str, id: i32, patch: &AuthorPatch) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, AUTHOR_TABLE);
    let mut sets: Vec<String> = Vec::new();
    if let Some(first_name) = &patch.first_name {
        let n = q.push_param(SqlParam::Text(first_name.clone()));
        sets.push(format!("{} = ${}", quoted("first_name"), n));
    }
    if let Some(last_name) = &patch.last_name {
        let n = q.push_param(SqlParam::Text(last_name.clone()));
        sets.push(format!("{} = ${}", quoted("last_name"), n));
    }
    sets.push(format!("{} = NOW()", quoted("updated_at")));
    let id_n = q.push_param(SqlParam::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        table,
        sets.join(", "),
        quoted("id"),
        id_n
    );
    q
}

pub fn delete(schema: &str, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, AUTHOR_TABLE);
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", table, quoted("id"), n);
    q
}

use std::marker::PhantomData;

use crate::database::record::Document;

/// Renders the SQL for one collection. Table and column names come from the
/// `Document` impl, never from request input; values are always bound.
pub struct QueryBuilder<D> {
    _phantom: PhantomData<fn() -> D>,
}

impl<D: Document> QueryBuilder<D> {
    fn table() -> String {
        quote_identifier(D::COLLECTION)
    }

    fn editable_columns() -> Vec<&'static str> {
        D::FIELDS.iter().map(|field| D::column(*field)).collect()
    }

    /// Columns returned by every statement, in `Record` order
    fn returning() -> String {
        let mut columns = vec!["id"];
        columns.extend(Self::editable_columns());
        columns.push("created_at");
        columns.push("updated_at");
        columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn create_table() -> String {
        let unique = D::column(D::UNIQUE);
        let mut columns = vec![
            "\"seq\" BIGSERIAL".to_string(),
            "\"id\" UUID PRIMARY KEY".to_string(),
        ];
        for column in Self::editable_columns() {
            let constraint = if column == unique { " UNIQUE" } else { "" };
            columns.push(format!("{} TEXT NOT NULL{}", quote_identifier(column), constraint));
        }
        columns.push("\"created_at\" TIMESTAMPTZ NOT NULL DEFAULT now()".to_string());
        columns.push("\"updated_at\" TIMESTAMPTZ NOT NULL DEFAULT now()".to_string());

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            Self::table(),
            columns.join(", ")
        )
    }

    pub fn select_all() -> String {
        format!(
            "SELECT {} FROM {} ORDER BY \"seq\"",
            Self::returning(),
            Self::table()
        )
    }

    pub fn select_where(field: D::Field) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = $1 ORDER BY \"seq\" LIMIT 1",
            Self::returning(),
            Self::table(),
            quote_identifier(D::column(field))
        )
    }

    pub fn select_by_id() -> String {
        format!(
            "SELECT {} FROM {} WHERE \"id\" = $1",
            Self::returning(),
            Self::table()
        )
    }

    /// `$1` is the id, `$2..` the editable fields in `FIELDS` order
    pub fn insert() -> String {
        let columns = Self::editable_columns();
        let names = std::iter::once("\"id\"".to_string())
            .chain(columns.iter().map(|c| quote_identifier(c)))
            .collect::<Vec<_>>()
            .join(", ");
        let params = (1..=columns.len() + 1)
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            Self::table(),
            names,
            params,
            Self::returning()
        )
    }

    /// `$1` is the id, `$2..` the editable fields in `FIELDS` order
    pub fn update_by_id() -> String {
        let assignments = Self::editable_columns()
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ${}", quote_identifier(c), i + 2))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE {} SET {}, \"updated_at\" = now() WHERE \"id\" = $1 RETURNING {}",
            Self::table(),
            assignments,
            Self::returning()
        )
    }

    pub fn delete_by_id() -> String {
        format!(
            "DELETE FROM {} WHERE \"id\" = $1 RETURNING {}",
            Self::table(),
            Self::returning()
        )
    }
}

/// Quote SQL identifier to prevent injection
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{Contact, ContactField, Group, GroupField};

    #[test]
    fn create_table_marks_unique_key() {
        let sql = QueryBuilder::<Contact>::create_table();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"contacts\""));
        assert!(sql.contains("\"mobile\" TEXT NOT NULL UNIQUE"));
        assert!(sql.contains("\"email\" TEXT NOT NULL,"));
        assert!(sql.contains("\"seq\" BIGSERIAL"));

        let sql = QueryBuilder::<Group>::create_table();
        assert!(sql.contains("\"name\" TEXT NOT NULL UNIQUE"));
    }

    #[test]
    fn insert_binds_id_then_fields() {
        let sql = QueryBuilder::<Group>::insert();
        assert_eq!(
            sql,
            "INSERT INTO \"groups\" (\"id\", \"name\") VALUES ($1, $2) \
             RETURNING \"id\", \"name\", \"created_at\", \"updated_at\""
        );

        let sql = QueryBuilder::<Contact>::insert();
        assert!(sql.contains("VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"));
    }

    #[test]
    fn update_touches_every_editable_field() {
        let sql = QueryBuilder::<Contact>::update_by_id();
        assert!(sql.contains("\"name\" = $2"));
        assert!(sql.contains("\"group_id\" = $8"));
        assert!(sql.contains("\"updated_at\" = now() WHERE \"id\" = $1"));
    }

    #[test]
    fn lookups_order_by_insertion() {
        assert!(QueryBuilder::<Contact>::select_all().ends_with("ORDER BY \"seq\""));
        let sql = QueryBuilder::<Contact>::select_where(ContactField::Mobile);
        assert!(sql.contains("WHERE \"mobile\" = $1"));
        let sql = QueryBuilder::<Group>::select_where(GroupField::Name);
        assert!(sql.contains("WHERE \"name\" = $1 ORDER BY \"seq\" LIMIT 1"));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}

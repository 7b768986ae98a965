
use schemaviz_objects::schema::{Column, ForeignKey, Table};
use schemaviz_objects::{build_column_graph, build_schema_graph, Graph};
use sqlx::FromRow;
use tracing::debug;

use crate::model::{Connection, Error, Result};

// information_schema exposes names as `sql_identifier`, cast to text so they
// decode as `String`.
const TABLES_QUERY: &str = "
    SELECT table_name::text AS table_name
    FROM information_schema.tables
    WHERE table_schema = $1
    ORDER BY table_name";

// Read from pg_constraint: constraint names are only unique per table, and
// information_schema hides constraints on tables the login does not own.
// A referenced table in another schema is schema qualified so it can never
// resolve to a local table of the same name.
const FOREIGN_KEYS_QUERY: &str = "
    SELECT
        con.conname::text AS constraint_name,
        src.relname::text AS table_name,
        CASE
            WHEN dst_ns.oid = con.connamespace THEN dst.relname::text
            ELSE dst_ns.nspname::text || '.' || dst.relname::text
        END AS foreign_table_name
    FROM pg_catalog.pg_constraint AS con
        JOIN pg_catalog.pg_namespace AS ns ON ns.oid = con.connamespace
        JOIN pg_catalog.pg_class AS src ON src.oid = con.conrelid
        JOIN pg_catalog.pg_class AS dst ON dst.oid = con.confrelid
        JOIN pg_catalog.pg_namespace AS dst_ns ON dst_ns.oid = dst.relnamespace
    WHERE con.contype = 'f'
      AND ns.nspname = $1
    ORDER BY table_name, constraint_name";

const COLUMNS_QUERY: &str = "
    SELECT column_name::text AS column_name
    FROM information_schema.columns
    WHERE table_schema = $1
      AND table_name = $2
    ORDER BY ordinal_position";

#[derive(Debug, FromRow)]
struct TableRow {
    table_name: String,
}

#[derive(Debug, FromRow)]
struct ForeignKeyRow {
    table_name: String,
    foreign_table_name: String,
}

#[derive(Debug, FromRow)]
struct ColumnRow {
    column_name: String,
}

fn fetch_err(query: &'static str) -> impl FnOnce(sqlx::Error) -> Error {
    move |ex| Error::MetadataFetch { query, cause: ex.to_string() }
}

pub struct CatalogBmc;

impl CatalogBmc {
    pub async fn list_tables(conn: &Connection) -> Result<Vec<Table>> {
        let rows: Vec<TableRow> = sqlx::query_as(TABLES_QUERY)
            .bind(conn.schema())
            .fetch_all(conn.db())
            .await
            .map_err(fetch_err("tables"))?;

        Ok(rows.into_iter().map(|row| Table::new(row.table_name)).collect())
    }

    pub async fn list_foreign_keys(conn: &Connection) -> Result<Vec<ForeignKey>> {
        let rows: Vec<ForeignKeyRow> = sqlx::query_as(FOREIGN_KEYS_QUERY)
            .bind(conn.schema())
            .fetch_all(conn.db())
            .await
            .map_err(fetch_err("foreign_keys"))?;

        Ok(rows
            .into_iter()
            .map(|row| ForeignKey::new(row.table_name, row.foreign_table_name))
            .collect())
    }

    pub async fn list_columns(conn: &Connection, table: &str) -> Result<Vec<Column>> {
        let rows: Vec<ColumnRow> = sqlx::query_as(COLUMNS_QUERY)
            .bind(conn.schema())
            .bind(table)
            .fetch_all(conn.db())
            .await
            .map_err(fetch_err("columns"))?;

        Ok(rows.into_iter().map(|row| Column::new(row.column_name)).collect())
    }

    pub async fn schema_graph(conn: &Connection) -> Result<Graph> {
        let tables = Self::list_tables(conn).await?;
        let foreign_keys = Self::list_foreign_keys(conn).await?;
        debug!(
            "{:<12} - {} tables, {} foreign keys in {}",
            "MODEL", tables.len(), foreign_keys.len(), conn.schema()
        );

        Ok(build_schema_graph(&tables, &foreign_keys))
    }

    pub async fn column_graph(conn: &Connection, table: &str) -> Result<Graph> {
        let columns = Self::list_columns(conn, table).await?;
        debug!("{:<12} - {} columns in {table}", "MODEL", columns.len());

        Ok(build_column_graph(table, &columns))
    }
}

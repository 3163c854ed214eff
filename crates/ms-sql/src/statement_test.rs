use super::*;
use crate::validator::validate_sql;
use chrono::TimeZone;

fn table(dialect: Dialect) -> MetaTable {
    MetaTable::new(dialect, "entity_meta").unwrap()
}

fn sample_entry() -> MetaEntry {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    MetaEntry {
        id: "3f1c2a0e-0000-4000-8000-000000000001".to_string(),
        object_type: "user".to_string(),
        object_id: "12345".to_string(),
        key: "theme".to_string(),
        value: "dark".to_string(),
        created_at: ts,
        updated_at: ts,
        deleted_at: None,
    }
}

#[test]
fn test_select_by_key_duckdb() {
    let stmt = table(Dialect::DuckDb).select_by_key("user", "12345", "theme");

    assert_eq!(
        stmt.sql,
        "SELECT \"id\", \"object_type\", \"object_id\", \"meta_key\", \"meta_value\", \
         \"created_at\", \"updated_at\", \"deleted_at\" FROM \"entity_meta\" \
         WHERE \"object_type\" = ? AND \"object_id\" = ? AND \"meta_key\" = ? LIMIT 1"
    );
    assert_eq!(
        stmt.params,
        vec![
            SqlValue::from("user"),
            SqlValue::from("12345"),
            SqlValue::from("theme")
        ]
    );
}

#[test]
fn test_select_by_key_postgres_numbers_params() {
    let stmt = table(Dialect::Postgres).select_by_key("user", "12345", "theme");
    assert!(stmt
        .sql
        .ends_with("\"object_type\" = $1 AND \"object_id\" = $2 AND \"meta_key\" = $3 LIMIT 1"));
}

#[test]
fn test_insert_binds_every_column() {
    let entry = sample_entry();
    let stmt = table(Dialect::Sqlite).insert(&entry);

    assert!(stmt.sql.starts_with("INSERT INTO \"entity_meta\" (\"id\", "));
    assert!(stmt.sql.ends_with("VALUES (?, ?, ?, ?, ?, ?, ?, ?)"));
    assert_eq!(stmt.params, entry.to_values());
    assert_eq!(stmt.params[7], SqlValue::Null);
}

#[test]
fn test_update_value_touches_only_value_and_updated_at() {
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let stmt = table(Dialect::Postgres).update_value("user", "12345", "theme", "light", ts);

    assert_eq!(
        stmt.sql,
        "UPDATE \"entity_meta\" SET \"meta_value\" = $1, \"updated_at\" = $2 \
         WHERE \"object_type\" = $3 AND \"object_id\" = $4 AND \"meta_key\" = $5"
    );
    assert_eq!(stmt.params[0], SqlValue::from("light"));
    assert_eq!(stmt.params[1], SqlValue::Timestamp(ts));
    assert!(!stmt.sql.contains("created_at"));
}

#[test]
fn test_upsert_mysql_uses_on_duplicate_key() {
    let stmt = table(Dialect::MySql).upsert(&sample_entry());

    assert!(stmt.sql.starts_with("INSERT INTO `entity_meta`"));
    assert!(stmt.sql.ends_with(
        "ON DUPLICATE KEY UPDATE `meta_value` = VALUES(`meta_value`), `updated_at` = VALUES(`updated_at`)"
    ));
    assert_eq!(stmt.params.len(), 8);
}

#[test]
fn test_mysql_upsert_key_comes_from_triple_unique_constraint() {
    // ON DUPLICATE KEY names no target: only the DDL's unique key on the
    // triple keeps a second set from inserting a fresh-id row.
    let table = table(Dialect::MySql);
    assert!(table
        .create_table()
        .contains("UNIQUE (`object_type`, `object_id`, `meta_key`)"));

    let stmt = table.upsert(&sample_entry());
    assert!(!stmt.sql.contains("ON CONFLICT"));
    assert!(!stmt.sql.contains("`id` = VALUES"));
}

#[test]
fn test_upsert_conflict_target_is_the_triple() {
    for dialect in [Dialect::Postgres, Dialect::Sqlite, Dialect::DuckDb] {
        let stmt = table(dialect).upsert(&sample_entry());
        assert!(
            stmt.sql.contains(
                "ON CONFLICT (\"object_type\", \"object_id\", \"meta_key\") DO UPDATE SET \
                 \"meta_value\" = excluded.\"meta_value\", \"updated_at\" = excluded.\"updated_at\""
            ),
            "{dialect}: {}",
            stmt.sql
        );
    }
}

#[test]
fn test_delete_by_key() {
    let stmt = table(Dialect::MySql).delete_by_key("user", "12345", "theme");
    assert_eq!(
        stmt.sql,
        "DELETE FROM `entity_meta` WHERE `object_type` = ? AND `object_id` = ? AND `meta_key` = ?"
    );
    assert_eq!(stmt.params.len(), 3);
}

#[test]
fn test_every_statement_parses_in_every_dialect() {
    let entry = sample_entry();
    for dialect in Dialect::ALL {
        let t = table(dialect);
        let statements = [
            t.select_by_key("user", "12345", "theme"),
            t.insert(&entry),
            t.update_value("user", "12345", "theme", "light", entry.updated_at),
            t.upsert(&entry),
            t.delete_by_key("user", "12345", "theme"),
        ];
        for stmt in statements {
            validate_sql(dialect, &stmt.sql)
                .unwrap_or_else(|e| panic!("{dialect}: {e}\n{}", stmt.sql));
        }
    }
}

#[test]
fn test_caller_strings_never_reach_sql_text() {
    let hostile = "x' OR '1'='1";
    let stmt = table(Dialect::DuckDb).select_by_key(hostile, hostile, hostile);
    assert!(!stmt.sql.contains(hostile));
    assert_eq!(stmt.params, vec![SqlValue::from(hostile); 3]);
}

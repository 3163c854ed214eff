//! SQL validation with sqlparser-rs

use ms_core::Dialect;
use sqlparser::ast::Statement;
use sqlparser::dialect::{
    Dialect as ParserDialect, DuckDbDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect,
};
use sqlparser::parser::Parser;

use crate::error::{SqlError, SqlResult};

fn parser_dialect(dialect: Dialect) -> Box<dyn ParserDialect> {
    match dialect {
        Dialect::MySql => Box::new(MySqlDialect {}),
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        Dialect::Sqlite => Box::new(SQLiteDialect {}),
        Dialect::DuckDb => Box::new(DuckDbDialect {}),
    }
}

/// Parse SQL into AST statements using the parser for `dialect`
pub fn parse_sql(dialect: Dialect, sql: &str) -> SqlResult<Vec<Statement>> {
    let parser = parser_dialect(dialect);
    Parser::parse_sql(parser.as_ref(), sql).map_err(|e| SqlError::ParseError(e.to_string()))
}

/// Check that `sql` is exactly one statement that parses under `dialect`
pub fn validate_sql(dialect: Dialect, sql: &str) -> SqlResult<Statement> {
    let mut stmts = parse_sql(dialect, sql)?;
    if stmts.len() != 1 {
        return Err(SqlError::StatementCount(stmts.len()));
    }
    Ok(stmts.remove(0))
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;

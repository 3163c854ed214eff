use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn parses_get_with_global_overrides() {
    let cli = Cli::try_parse_from([
        "ms",
        "get",
        "user",
        "42",
        "theme",
        "--default",
        "light",
        "--table",
        "entity_meta",
        "--db-type",
        "sqlite",
    ])
    .unwrap();

    assert_eq!(cli.global.table.as_deref(), Some("entity_meta"));
    assert_eq!(cli.global.db_type, Some(DbTypeArg::Sqlite));
    assert_eq!(cli.global.config, "metastore.yml");
    match cli.command {
        Commands::Get(args) => {
            assert_eq!(args.target.object_type, "user");
            assert_eq!(args.target.object_id, "42");
            assert_eq!(args.target.key, "theme");
            assert_eq!(args.default, "light");
            assert!(!args.json);
        }
        other => panic!("expected get, got {other:?}"),
    }
}

#[test]
fn set_requires_value() {
    assert!(Cli::try_parse_from(["ms", "set", "user", "42", "theme"]).is_err());
}

#[test]
fn find_output_defaults_to_text() {
    let cli = Cli::try_parse_from(["ms", "find", "user", "42", "theme"]).unwrap();
    match cli.command {
        Commands::Find(args) => assert_eq!(args.output, FindOutput::Text),
        other => panic!("expected find, got {other:?}"),
    }
}

#[test]
fn db_type_arg_maps_to_config_type() {
    assert_eq!(DbType::from(DbTypeArg::Duckdb), DbType::DuckDb);
    assert_eq!(DbType::from(DbTypeArg::Sqlite), DbType::Sqlite);
}

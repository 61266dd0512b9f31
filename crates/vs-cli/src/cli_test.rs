use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_status_defaults() {
    let cli = Cli::parse_from(["verstep", "status"]);
    match cli.command {
        Commands::Status(args) => {
            assert_eq!(args.format, OutputFormat::Table);
            assert!(args.subdomain.is_none());
        }
        other => panic!("expected status, got {other:?}"),
    }
    assert_eq!(cli.global.db, "verstep.duckdb");
}

#[test]
fn test_history_with_subdomain() {
    let cli = Cli::parse_from([
        "verstep", "history", "a-base", "--subdomain", "tenant-a", "--format", "json",
    ]);
    match cli.command {
        Commands::History(args) => {
            assert_eq!(args.module, "a-base");
            assert_eq!(args.subdomain.as_deref(), Some("tenant-a"));
            assert_eq!(args.format, OutputFormat::Json);
        }
        other => panic!("expected history, got {other:?}"),
    }
}

use crate::cli::{Cli, Command};

use clap::Parser;

#[test]
fn given_search_with_term_and_field_when_parsed_then_query_is_populated() {
    let cli = Cli::try_parse_from(["lor-search", "search", "--term", "gan", "--field", "name"])
        .unwrap();

    match cli.command {
        Command::Search(query) => {
            assert_eq!(query.term.as_deref(), Some("gan"));
            assert_eq!(query.field.as_deref(), Some("name"));
        }
        other => panic!("Expected Search, got {other:?}"),
    }
}

/// **VALUE**: Verifies that term/field coupling is left to the client, not clap.
///
/// **WHY THIS MATTERS**: The coupling rule lives in one place; the CLI must pass a
/// lone `--term` through so the client reports `InvalidQuery`.
#[test]
fn given_term_only_when_parsed_then_parsing_succeeds() {
    let cli = Cli::try_parse_from(["lor-search", "search", "--term", "gan"]).unwrap();

    assert!(matches!(cli.command, Command::Search(ref q) if q.field.is_none()));
}

#[test]
fn given_add_search_when_parsed_then_list_id_and_query_are_read() {
    let cli = Cli::try_parse_from([
        "lor-search",
        "-vv",
        "add-search",
        "3",
        "--term",
        "gan",
        "--field",
        "name",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    match cli.command {
        Command::AddSearch { list_id, query } => {
            assert_eq!(list_id, 3);
            assert_eq!(query.term.as_deref(), Some("gan"));
        }
        other => panic!("Expected AddSearch, got {other:?}"),
    }
}

#[test]
fn given_create_list_without_name_when_parsed_then_fails() {
    assert!(Cli::try_parse_from(["lor-search", "create-list"]).is_err());
}

//! Tests for the slug subcommand.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_slug() {
    match parse(&["caprename", "slug", "a red dragon on a shirt"]) {
        CliCommand::Slug {
            caption,
            max_slug_len,
        } => {
            assert_eq!(caption, "a red dragon on a shirt");
            assert!(max_slug_len.is_none());
        }
        _ => panic!("expected Slug"),
    }
}

#[test]
fn cli_parse_slug_max_len() {
    match parse(&["caprename", "slug", "blue wave", "--max-slug-len", "5"]) {
        CliCommand::Slug { max_slug_len, .. } => assert_eq!(max_slug_len, Some(5)),
        _ => panic!("expected Slug with --max-slug-len"),
    }
}

//! Tests for the for-each subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_for_each() {
    match parse(&["filekit", "for-each", "*.wav", "--", "ffmpeg", "-i", "%file", "%file.mp3"]) {
        CliCommand::ForEach {
            expressions,
            command,
            recursive,
            list_file,
            basename,
            progress,
            stop_on_error,
        } => {
            assert_eq!(expressions, vec!["*.wav"]);
            assert_eq!(command, vec!["ffmpeg", "-i", "%file", "%file.mp3"]);
            assert!(!recursive);
            assert!(!list_file);
            assert!(!basename);
            assert!(progress.is_none());
            assert!(!stop_on_error);
        }
        _ => panic!("expected ForEach"),
    }
}

#[test]
fn cli_parse_for_each_flags() {
    match parse(&[
        "filekit",
        "for-each",
        "-r",
        "-l",
        "-b",
        "-p",
        "/tmp/progress.txt",
        "--stop-on-error",
        "todo.lst",
        "--",
        "echo",
    ]) {
        CliCommand::ForEach {
            expressions,
            command,
            recursive,
            list_file,
            basename,
            progress,
            stop_on_error,
        } => {
            assert_eq!(expressions, vec!["todo.lst"]);
            assert_eq!(command, vec!["echo"]);
            assert!(recursive);
            assert!(list_file);
            assert!(basename);
            assert_eq!(
                progress.as_deref(),
                Some(std::path::Path::new("/tmp/progress.txt"))
            );
            assert!(stop_on_error);
        }
        _ => panic!("expected ForEach with flags"),
    }
}

#[test]
fn cli_parse_for_each_stdin_marker() {
    match parse(&["filekit", "for-each", "-", "--", "echo", "%file"]) {
        CliCommand::ForEach { expressions, .. } => assert_eq!(expressions, vec!["-"]),
        _ => panic!("expected ForEach"),
    }
}

#[test]
fn cli_for_each_requires_command() {
    assert!(Cli::try_parse_from(["filekit", "for-each", "*.wav"]).is_err());
    assert!(Cli::try_parse_from(["filekit", "for-each", "*.wav", "--"]).is_err());
}

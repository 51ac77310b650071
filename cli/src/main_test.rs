use std::io::Cursor;

use signin::{Credentials, validation::validate_credentials};

use super::*;

#[test]
fn cli_parses_login_flags() {
    let cli = Cli::try_parse_from([
        "signin",
        "--server-url",
        "http://localhost:9000",
        "login",
        "--email",
        "a@b.co",
        "--password",
        "hunter2",
    ])
    .unwrap();

    assert_eq!(cli.server_url, "http://localhost:9000");
    let Command::Login(args) = cli.command else {
        panic!("expected login command");
    };
    assert_eq!(args.email, "a@b.co");
    assert_eq!(args.password.as_deref(), Some("hunter2"));
}

#[test]
fn cli_accepts_bare_subcommands() {
    assert!(matches!(Cli::try_parse_from(["signin", "whoami"]).unwrap().command, Command::Whoami));
    assert!(matches!(Cli::try_parse_from(["signin", "logout"]).unwrap().command, Command::Logout));
}

#[test]
fn piped_password_drops_the_newline() {
    let mut input = Cursor::new("hunter2\n");
    assert_eq!(read_password(&mut input).unwrap(), "hunter2");
}

#[test]
fn piped_password_keeps_trailing_spaces_and_stops_at_first_line() {
    let mut input = Cursor::new("s3cret \r\nignored\n");
    assert_eq!(read_password(&mut input).unwrap(), "s3cret ");
}

#[test]
fn empty_stdin_is_missing_password() {
    let mut input = Cursor::new("");
    assert!(matches!(read_password(&mut input), Err(CliError::MissingPassword)));
}

#[test]
fn validation_failures_list_every_field() {
    let errors = validate_credentials(&Credentials::new("nope", ""));
    let err = CliError::from(LoginError::Invalid(errors));

    assert_eq!(err.to_string(), "invalid input: email: Please enter a valid email; password: Password is required");
}

#[test]
fn short_tokens_are_fully_masked() {
    assert_eq!(mask_token("abc123"), "***");
    assert_eq!(mask_token("0123456789abcdef"), "***");
}

#[test]
fn long_tokens_keep_a_prefix() {
    assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJhbGciOiJI...");
}

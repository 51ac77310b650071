//! Terminal front end for the login flow.
//!
//! `login` drives the same controller as the web page, with reqwest for the
//! network, a JSON file instead of `localStorage`, and stderr lines instead of
//! toasts. `whoami` and `logout` inspect and clear that file.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

mod store;
mod terminal;
mod transport;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use signin::{AuthError, LoginConfig, LoginError, LoginFormController, LoginPorts, ValidationErrors};
use tracing_subscriber::EnvFilter;

use crate::store::{FileSessionStore, SessionFileError};
use crate::terminal::{TerminalNavigator, TerminalNotifier};
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Login(#[from] AuthError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not read password: {0}")]
    Prompt(#[from] io::Error),
    #[error("session file: {0}")]
    Session(#[from] SessionFileError),
    #[error("no password given; pass --password, set LOGIN_PASSWORD or pipe it on stdin")]
    MissingPassword,
    #[error("not logged in")]
    NotLoggedIn,
}

impl From<LoginError> for CliError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::Invalid(errors) => Self::Invalid(describe_invalid(&errors)),
            LoginError::Authentication(e) => Self::Login(e),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "signin", about = "Sign in to the API and manage the saved session")]
struct Cli {
    #[arg(long, env = "LOGIN_SERVER_URL", default_value = "http://127.0.0.1:8000")]
    server_url: String,

    #[arg(long, env = "LOGIN_SESSION_FILE", default_value = ".signin/session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    config: LoginConfig,
    store: FileSessionStore,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and save the session.
    Login(LoginArgs),
    /// Show the saved session.
    Whoami,
    /// Forget the saved session.
    Logout,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long, env = "LOGIN_EMAIL", default_value = "")]
    email: String,

    /// Read from stdin when omitted.
    #[arg(long, env = "LOGIN_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = CliContext { config: LoginConfig::new(cli.server_url), store: FileSessionStore::new(cli.session_file) };

    let result = match cli.command {
        Command::Login(args) => run_login(&ctx, args).await,
        Command::Whoami => run_whoami(&ctx),
        Command::Logout => run_logout(&ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Already printed by the notifier.
        Err(CliError::Login(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_login(ctx: &CliContext, args: LoginArgs) -> Result<(), CliError> {
    let password = match args.password {
        Some(password) => password,
        None => obtain_password()?,
    };

    let controller = LoginFormController::new(
        ctx.config.clone(),
        LoginPorts {
            transport: Rc::new(ReqwestTransport::new()?),
            store: Rc::new(ctx.store.clone()),
            notifier: Rc::new(TerminalNotifier::stderr()),
            navigator: Rc::new(TerminalNavigator::default()),
        },
    );
    controller.set_email(args.email);
    controller.set_password(password);

    let session = controller.submit().await?;
    match signin::session::user_label(&session.user) {
        Some(label) => println!("Logged in as {label}."),
        None => println!("Logged in."),
    }
    println!("Session saved to {}", ctx.store.path().display());
    Ok(())
}

fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    let token = ctx.store.get_item(&ctx.config.token_key)?.ok_or(CliError::NotLoggedIn)?;
    let user = ctx.store.get_item(&ctx.config.user_key)?.unwrap_or_else(|| "null".to_owned());

    println!("token: {}", mask_token(&token));
    match serde_json::from_str::<serde_json::Value>(&user) {
        Ok(value) => println!("user:  {}", serde_json::to_string_pretty(&value).unwrap_or(user)),
        Err(_) => println!("user:  {user}"),
    }
    Ok(())
}

fn run_logout(ctx: &CliContext) -> Result<(), CliError> {
    if ctx.store.clear()? {
        println!("Logged out.");
    } else {
        println!("No saved session.");
    }
    Ok(())
}

/// Prompt with echo disabled on a terminal; otherwise read one line.
fn obtain_password() -> Result<String, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(rpassword::prompt_password("Password: ")?);
    }
    read_password(&mut stdin.lock())
}

/// First line of piped input, without its line terminator.
fn read_password(input: &mut impl BufRead) -> Result<String, CliError> {
    match rpassword::read_password_from_bufread(input) {
        Ok(password) => Ok(password),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(CliError::MissingPassword),
        Err(e) => Err(e.into()),
    }
}

fn describe_invalid(errors: &ValidationErrors) -> String {
    errors.iter().map(|(field, message)| format!("{field}: {message}")).collect::<Vec<_>>().join("; ")
}

fn mask_token(token: &str) -> String {
    if token.chars().count() <= 16 {
        return "***".to_owned();
    }
    format!("{}...", token.chars().take(12).collect::<String>())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use brewlog::api::{ApiClient, NewUser};
use brewlog::config::Config;
use brewlog::logging::init_tracing;
use brewlog::session::SessionStore;
use brewlog::ui::app::App;
use brewlog::ui::markup::to_plain_text;
use brewlog::ui::runtime;

/// Search beers and share reviews from the terminal.
#[derive(Parser)]
#[command(name = "brewlog", version)]
#[command(about = "Search beers, read reviews and post your own", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, short, help = "Path to config.toml (defaults to the user config dir)")]
    config: Option<PathBuf>,

    /// Override the server base URL from the config file
    #[arg(long, help = "Server base URL, e.g. http://127.0.0.1:8080")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// One-shot commands. Without one, the interactive UI starts.
#[derive(Subcommand)]
enum Command {
    /// Look up a beer by its exact name
    Search { name: String },
    /// Log in and remember the session
    Login { username: String, password: String },
    /// Create an account and remember the session
    Signup {
        username: String,
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    /// Review a beer, found by its exact name
    Review { beer: String, text: String },
    /// Forget the stored session
    Logout,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let rt = Runtime::new().context("failed to start async runtime")?;

    match cli.command {
        None => runtime::run(&config, rt.handle().clone()),
        Some(command) => rt.block_on(run_command(&config, command)),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.server.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

async fn run_command(config: &Config, command: Command) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.server)?;
    let mut app = App::new(SessionStore::new(config.session.resolved_path()));
    if let Err(err) = app.restore_session() {
        tracing::warn!(error = %err, "ignoring unreadable session file");
    }

    match command {
        Command::Search { name } => {
            let dispatch = app.submit_search(&name);
            app.drive(&api, dispatch).await;
        }
        Command::Login { username, password } => {
            let dispatch = app.submit_login(&username, &password);
            app.drive(&api, dispatch).await;
        }
        Command::Signup {
            username,
            password,
            first_name,
            last_name,
        } => {
            let dispatch = app.submit_signup(NewUser {
                username,
                password,
                first_name,
                last_name,
            });
            app.drive(&api, dispatch).await;
        }
        Command::Review { beer, text } => {
            let dispatch = app.submit_search(&beer);
            app.drive(&api, dispatch).await;
            if app.state().user_query_in_db() {
                app.toggle_review_entry();
                if let Some(dispatch) = app.submit_review(&text) {
                    app.drive(&api, dispatch).await;
                }
            }
        }
        Command::Logout => {
            app.logout()?;
            println!("Logged out.");
            return Ok(());
        }
    }

    print!("{}", to_plain_text(app.document()));
    Ok(())
}

// ABOUTME: CLI entrypoint for org-todoist command
// ABOUTME: Handles error exit codes, logging setup, and command dispatch

use clap::Parser;
use indicatif::ProgressBar;
use org_todoist::{
    api::ApiClient,
    auth::resolve_token,
    cli::{Cli, Commands},
    org::convert_to_org,
    render::write_org,
    tree::{build_todoist_tree, write_root_items},
    Result, TodoistState,
};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("org-todoist: [E{}] {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command();
    let token = resolve_token(cli.token, cli.token_file)?;
    let client = ApiClient::new(token, Some(cli.api_base))?;
    let state = fetch_state(&client)?;
    let tree = build_todoist_tree(&state);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Export => {
            let doc = convert_to_org(&tree)?;
            write_org(&mut out, &doc)?;
        }
        Commands::Roots => write_root_items(&mut out, &tree)?,
    }

    out.flush()?;
    Ok(())
}

fn fetch_state(client: &ApiClient) -> Result<TodoistState> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Syncing with Todoist...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let state = client.sync();
    spinner.finish_and_clear();
    state
}

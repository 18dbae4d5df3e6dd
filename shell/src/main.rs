use std::io;

use clap::Parser;
use todo_core::{TodoApi, TodoClient};
use todo_shell::terminal::{TerminalForm, TerminalView};
use todo_shell::{run_session, UreqTransport};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Terminal client for the todo service.
#[derive(Parser)]
#[command(name = "todo-shell")]
struct Args {
    /// Base URL of the todo service.
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    info!(base_url = %args.base_url, "starting");

    let mut client = TodoClient::new(
        TodoApi::new(&args.base_url),
        UreqTransport::new(),
        TerminalView::new(io::stdout()),
        TerminalForm::new(io::stderr()),
    );
    // A failed first fetch is already logged; the list just stays empty.
    if let Err(err) = client.initialize() {
        debug!(error = %err, "initial fetch did not complete");
    }

    let stdin = io::stdin();
    run_session(&mut client, stdin.lock(), &mut io::stdout())?;
    Ok(())
}

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};

use salve::backend::Backend;
use salve::backend::http::HttpBackend;
use salve::backend::local::LocalBackend;
use salve::banner::{BannerInfo, print_banner, print_session_summary};
use salve::commands::{CommandRegistry, CommandResult, SessionInfo};
use salve::config::Settings;
use salve::consts::{
    DEFAULT_ENDPOINT, GREETING_FIELD, NAME_FIELD, SUBMIT_CONTROL, default_db_path,
};
use salve::coordinator::{Coordinator, SessionStats};
use salve::page::Page;
use salve::page::terminal::{GreetingPane, SubmitControl, TextField};

#[derive(Debug, Clone, ValueEnum)]
enum Provider {
    Http,
    Local,
}

#[derive(Parser)]
#[command(name = "salve", version, about = "Say hello, get hello back.")]
struct Cli {
    /// Greeting service to talk to
    #[arg(short, long, value_enum, default_value_t = Provider::Http)]
    backend: Provider,

    /// Base URL of the greeting service (remembered for later sessions)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Settings database path (use :memory: for ephemeral)
    #[arg(long)]
    db: Option<String>,

    /// Greet this name once and exit (non-interactive)
    #[arg(short, long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_path = match cli.db {
        Some(path) => path,
        None => {
            let path = default_db_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).context("failed to create settings directory")?;
            }
            path.to_string_lossy().into_owned()
        }
    };

    let settings = Settings::open(&db_path)?;

    // Endpoint resolution: flag > remembered setting > compiled default.
    // A flag-supplied endpoint sticks for the next session.
    let endpoint = match &cli.endpoint {
        Some(endpoint) => {
            settings.set_endpoint(endpoint)?;
            endpoint.clone()
        }
        None => settings
            .endpoint()?
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
    };

    let (backend, backend_name): (Arc<dyn Backend>, &str) = match cli.backend {
        Provider::Http => (Arc::new(HttpBackend::new(&endpoint)), "http"),
        Provider::Local => (Arc::new(LocalBackend), "local"),
    };

    // The page the coordinator runs against. Ports are resolved by id
    // exactly once, here; a missing field fails the run before the
    // first prompt.
    let field = Arc::new(TextField::new());
    let pane = Arc::new(GreetingPane::new());
    let mut page = Page::new();
    page.add_input(NAME_FIELD, field.clone());
    page.add_output(GREETING_FIELD, pane.clone());
    page.add_trigger(SUBMIT_CONTROL, Arc::new(SubmitControl::new()));

    let coordinator = Coordinator::new(
        page.input(NAME_FIELD)?,
        page.output(GREETING_FIELD)?,
        page.trigger(SUBMIT_CONTROL)?,
        backend,
    );

    let mut stats = SessionStats::default();

    // One-shot mode
    if let Some(name) = cli.name {
        field.set(&name);
        stats.record(coordinator.submit().await);
        print_session_summary(stats);
        return Ok(());
    }

    let settings_label = if db_path == ":memory:" {
        "ephemeral"
    } else {
        &db_path
    };

    print_banner(&BannerInfo {
        backend: backend_name,
        endpoint: &endpoint,
        settings: settings_label,
    });

    let registry = CommandRegistry::new();

    // REPL: async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nsalve> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let info = SessionInfo {
            backend: backend_name,
            endpoint: &endpoint,
            db_path: settings_label,
            stats,
            last_greeting: pane.last(),
        };

        match registry.dispatch(&line, &info).await {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::NotACommand => {}
        }

        // The whole line becomes the field's value, verbatim; an empty
        // line is a valid submission too. The call is awaited to
        // settlement, and a pending submission cannot be cancelled.
        field.set(&line);
        stats.record(coordinator.submit().await);
    }

    print_session_summary(stats);
    Ok(())
}

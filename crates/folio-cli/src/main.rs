use std::io::{self, Write};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio_core::session::SessionError;
use folio_core::{
    BackendClient, CoreConfig, EntityKind, FileSessionStore, PortfolioStore, QueryForm,
    ResourceState, SessionGate, SubmissionController, SubmissionStatus, SyncController,
};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Terminal front end for the portfolio content client")]
struct Cli {
    /// Backend origin (defaults to FOLIO_API_URL, then localhost)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync all sections and print them
    Show,
    /// Submit a work query
    Submit {
        /// Your name
        #[arg(long)]
        name: String,
        /// Contact email
        #[arg(long)]
        email: String,
        /// The query text
        #[arg(long)]
        message: String,
    },
    /// Authenticate for the admin view
    Login,
    /// Drop the persisted admin session
    Logout,
    /// Print session and per-section sync state
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.api_url {
        Some(url) => CoreConfig::new(url),
        None => CoreConfig::from_env(),
    };
    let client = BackendClient::new(&config)?;

    match cli.command {
        Commands::Show => show(client).await,
        Commands::Submit {
            name,
            email,
            message,
        } => submit(client, name, email, message).await,
        Commands::Login => login(client).await,
        Commands::Logout => logout(),
        Commands::Status => status(client).await,
    }
}

fn session_store() -> Result<FileSessionStore> {
    FileSessionStore::default_location().context("no data directory available on this platform")
}

async fn show(client: BackendClient) -> Result<()> {
    let mut store = PortfolioStore::with_defaults();
    SyncController::new(client).sync_all(&mut store).await;

    println!("# {} — {}", store.profile.name, store.profile.title);
    println!("{} | {}", store.profile.location, store.profile.email);
    println!("\n{}\n", store.profile.bio);

    println!("## Skills");
    for skill in &store.skills {
        println!("  {} {} ({})", skill.icon, skill.name, skill.level);
    }

    println!("\n## Projects");
    for project in &store.projects {
        println!("  {} — {}", project.title, project.description);
        if let Some(link) = &project.demo_link {
            println!("    demo: {link}");
        }
    }

    println!("\n## Experience");
    for exp in store.experiences_by_recency() {
        println!("  {} {} @ {}", exp.year_range, exp.title, exp.institution);
    }

    println!("\n## Art");
    for art in &store.art {
        println!("  {} ({}) {}", art.title, art.medium, art.image);
    }

    println!("\n## Queries");
    for query in &store.queries {
        println!("  {} <{}>: {}", query.name, query.email, query.message);
    }

    Ok(())
}

async fn submit(client: BackendClient, name: String, email: String, message: String) -> Result<()> {
    let mut store = PortfolioStore::with_defaults();
    let mut controller = SubmissionController::new();
    controller.form = QueryForm {
        name,
        email,
        message,
    };

    controller.submit(&client, &mut store).await;
    match controller.status() {
        SubmissionStatus::Success => {
            println!("{}", controller.status_message());
            Ok(())
        }
        _ => bail!("{}", controller.status_message()),
    }
}

async fn login(client: BackendClient) -> Result<()> {
    let mut gate = SessionGate::restore(session_store()?);
    if gate.is_authenticated() {
        println!("Already authenticated.");
        return Ok(());
    }

    print!("Admin password: ");
    io::stdout().flush()?;
    let password = rpassword::read_password().context("failed to read password")?;

    match gate.login(&client, password.trim()).await {
        Ok(()) => {
            println!("Authenticated.");
            Ok(())
        }
        Err(SessionError::Rejected) => bail!("Invalid password"),
        Err(err) => bail!("{err}"),
    }
}

fn logout() -> Result<()> {
    let mut gate = SessionGate::restore(session_store()?);
    gate.logout()?;
    println!("Logged out.");
    Ok(())
}

async fn status(client: BackendClient) -> Result<()> {
    let gate = SessionGate::restore(session_store()?);
    println!(
        "session: {}",
        if gate.is_authenticated() {
            "authenticated"
        } else {
            "anonymous"
        }
    );

    let started = Instant::now();
    let mut store = PortfolioStore::with_defaults();
    SyncController::new(client).sync_all(&mut store).await;

    for kind in EntityKind::ALL {
        let state = match store.state(kind) {
            ResourceState::Pending => "pending",
            ResourceState::Ready => "ready",
            ResourceState::Stale => "stale",
            ResourceState::Failed => "failed (showing defaults)",
        };
        println!("{:12} {state}", format!("{kind:?}").to_lowercase());
    }
    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "sync finished");
    Ok(())
}

mod render;

use chrono::Utc;
use clap::{Parser, Subcommand};
use inbox_client::HttpRequestSource;
use inbox_core::constants::REQUEST_NOT_FOUND_MESSAGE;
use inbox_core::{DerivedView, Inbox, RequestService, RequestSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inbox")]
#[command(about = "Smart inbox CLI")]
struct Cli {
    /// Base URL of the inbox REST API (falls back to INBOX_API_URL, then http://localhost:3000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all requests from the API
    List,
    /// Show one request in detail
    Show {
        /// Request id
        id: String,
        /// Print the derived view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the bundled fixture without contacting a server
    Fixture,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let now = Utc::now();

    match cli.command {
        Some(Commands::List) => {
            let source = HttpRequestSource::from_env_or(cli.api_url)?;
            print_inbox(&source, now);
        }
        Some(Commands::Show { id, json }) => {
            let source = HttpRequestSource::from_env_or(cli.api_url)?;
            match source.request_by_id(&id) {
                Ok(Some(request)) => {
                    let view = DerivedView::new(&request, now);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    } else {
                        println!("{}", render::detail(&request, &view));
                    }
                }
                Ok(None) => println!("{REQUEST_NOT_FOUND_MESSAGE}"),
                Err(e) => eprintln!("Error fetching request {}: {}", id, e),
            }
        }
        Some(Commands::Fixture) => {
            let service = RequestService::from_fixture()?;
            print_inbox(&service, now);
        }
        None => {
            println!("Use 'inbox --help' for commands");
        }
    }

    Ok(())
}

fn print_inbox<S: RequestSource>(source: &S, now: chrono::DateTime<Utc>) {
    let inbox = Inbox::load(source, now);
    let views = inbox.views(now);
    println!(
        "{}",
        render::inbox(&inbox, &views, &inbox.sync_time_display(now))
    );
}

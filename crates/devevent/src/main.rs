use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devevent::{service, AppState, Config};
use devevent_core::booking::CreateBookingRequest;
use devevent_core::event::{generate_seed_events, Event};

/// DevEvent - Manage developer events and bookings
#[derive(Parser, Debug)]
#[command(name = "devevent")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, env = "DEVEVENT_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Connect to the database and report success
    Ping,
    /// Insert the demo events (existing slugs are skipped)
    Seed,
    /// Inspect events
    Events {
        #[command(subcommand)]
        command: EventsCommand,
    },
    /// Book a spot at an event
    Book {
        /// Event slug
        slug: String,
        /// Attendee email address
        email: String,
    },
    /// List the bookings of an event
    Bookings {
        /// Event slug
        slug: String,
    },
}

#[derive(Subcommand, Debug)]
enum EventsCommand {
    /// List all events, newest first
    List,
    /// Show one event as JSON
    Show {
        /// Event slug
        slug: String,
    },
    /// List events sharing a tag with the given event
    Similar {
        /// Event slug
        slug: String,
        /// Maximum number of events to show
        #[arg(long, short, default_value = "3")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration problems are fatal before anything else runs
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(cli.log_json);

    let state = AppState::connect(&config)
        .await
        .context("Failed to connect to the database")?;

    match cli.command {
        Command::Ping => {
            let attempts = state.connection().map_or(0, |cache| cache.attempts());
            tracing::info!(database = %config.database_name, attempts, "Database reachable");
            println!("ok");
        }
        Command::Seed => seed(&state).await?,
        Command::Events { command } => match command {
            EventsCommand::List => {
                for event in service::list_events(state.event_repo.as_ref()).await? {
                    print_event_line(&event);
                }
            }
            EventsCommand::Show { slug } => {
                let event = service::get_event_by_slug(state.event_repo.as_ref(), &slug).await?;
                let count = service::booking_count(state.booking_repo.as_ref(), event.id).await?;
                println!("{}", serde_json::to_string_pretty(&event)?);
                println!("bookings: {count}");
            }
            EventsCommand::Similar { slug, limit } => {
                for event in
                    service::similar_events(state.event_repo.as_ref(), &slug, limit).await?
                {
                    print_event_line(&event);
                }
            }
        },
        Command::Book { slug, email } => {
            let event = service::get_event_by_slug(state.event_repo.as_ref(), &slug).await?;
            let booking = service::create_booking(
                state.event_repo.as_ref(),
                state.booking_repo.as_ref(),
                CreateBookingRequest::new(event.id, email),
            )
            .await?;
            println!("{} booked {}", booking.email, event.slug);
        }
        Command::Bookings { slug } => {
            let event = service::get_event_by_slug(state.event_repo.as_ref(), &slug).await?;
            for booking in
                service::bookings_for_event(state.booking_repo.as_ref(), event.id).await?
            {
                println!("{}  {}", booking.created_at.to_rfc3339(), booking.email);
            }
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "devevent=info,devevent_core=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Creates the demo events, skipping any whose slug is already taken.
async fn seed(state: &AppState) -> Result<()> {
    let today = Utc::now().date_naive();
    let mut created = 0usize;

    for request in generate_seed_events(today) {
        let title = request.title.clone();
        match service::create_event(state.event_repo.as_ref(), request).await {
            Ok(event) => {
                created += 1;
                print_event_line(&event);
            }
            Err(err) if err.is_conflict() => {
                tracing::info!(title = %title, "Event already seeded, skipping");
            }
            Err(err) => return Err(err).with_context(|| format!("Failed to seed {title:?}")),
        }
    }

    tracing::info!(created, "Seeding finished");
    Ok(())
}

fn print_event_line(event: &Event) {
    println!(
        "{}  {} {}  {}  [{}]",
        event.slug,
        event.date,
        event.time,
        event.title,
        event.tags.join(", ")
    );
}

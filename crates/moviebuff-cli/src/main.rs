//! moviebuff - command-line front-end for the Moviebuff API.

/// Application configuration (TOML).
mod config;
/// Human-readable output.
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, config_file_path};
use moviebuff_api::{MoviebuffApi, MoviebuffClient, ResourceType};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Config directory (takes precedence over `MOVIEBUFF_CONFIG_DIR`).
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Override API base URL (takes precedence over `MOVIEBUFF_URL` and config).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Get movie details.
    Movie(IdArgs),
    /// Get person details.
    Person(IdArgs),
    /// Get entity details.
    Entity(IdArgs),
    /// List one page of people, movies or entities.
    Resources(ResourcesArgs),
    /// List certifications.
    Certifications(CertificationsArgs),
    /// Get the holiday calendar of a country.
    Holidays(HolidaysArgs),
    /// Get the movie mapped to a Composition Playlist.
    MappedCpl(MappedCplArgs),
}

/// Arguments for single-resource subcommands.
#[derive(clap::Args)]
struct IdArgs {
    /// Resource UUID or slug (e.g. "12-years-a-slave").
    id: String,
}

/// Resource kinds accepted by `resources`.
#[derive(Clone, Copy, ValueEnum)]
enum ResourceKind {
    /// People.
    People,
    /// Movies.
    Movies,
    /// Entities.
    Entities,
}

impl From<ResourceKind> for ResourceType {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::People => Self::People,
            ResourceKind::Movies => Self::Movies,
            ResourceKind::Entities => Self::Entities,
        }
    }
}

/// Arguments for the `resources` subcommand.
#[derive(clap::Args)]
struct ResourcesArgs {
    /// Resource kind.
    #[arg(value_enum)]
    kind: ResourceKind,
    /// Page size (max 50). 0 leaves it to the server.
    #[arg(long, default_value_t = 0)]
    limit: u32,
    /// Page number starting at 1. 0 leaves it to the server.
    #[arg(long, default_value_t = 0)]
    page: u32,
}

/// Arguments for the `certifications` subcommand.
#[derive(clap::Args)]
struct CertificationsArgs {
    /// Country UUID or ISO 3166-1 alpha-2 code (e.g. "IN"). All countries if omitted.
    #[arg(long)]
    country: Option<String>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
struct HolidaysArgs {
    /// Country UUID.
    country_id: String,
}

/// Arguments for the `mapped-cpl` subcommand.
#[derive(clap::Args)]
struct MappedCplArgs {
    /// CPL identifier.
    cpl_id: String,
}

/// Builds a `MoviebuffClient` from the environment and config file.
///
/// # Errors
///
/// Returns an error if `MOVIEBUFF_API_TOKEN` is not set, the config file
/// cannot be loaded, or the client fails to build.
#[instrument(skip_all)]
fn build_client(dir: Option<&PathBuf>, base_url: Option<&str>) -> Result<MoviebuffClient> {
    let static_token = std::env::var("MOVIEBUFF_API_TOKEN")
        .context("MOVIEBUFF_API_TOKEN environment variable is required")?;

    let config_path = config_file_path(
        dir.map(PathBuf::as_path),
        std::env::var("MOVIEBUFF_CONFIG_DIR").ok().as_deref(),
        std::env::var("HOME").ok().as_deref(),
    )?;
    let config = AppConfig::load(&config_path)?;
    let env_url = std::env::var("MOVIEBUFF_URL").ok();

    let mut builder = MoviebuffClient::builder()
        .static_token(static_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
    if let Some(url) = config.api.resolve_base_url(base_url, env_url.as_deref()) {
        builder = builder.base_url(url);
    }
    if let Some(timeout) = config.api.timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().context("failed to build Moviebuff client")
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_movie(client: &impl MoviebuffApi, args: &IdArgs) -> Result<()> {
    let movie = client
        .get_movie(&args.id)
        .await
        .with_context(|| format!("Moviebuff movie request failed for {}", args.id))?;
    report::report_movie(&movie);
    Ok(())
}

/// Runs the `person` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_person(client: &impl MoviebuffApi, args: &IdArgs) -> Result<()> {
    let person = client
        .get_person(&args.id)
        .await
        .with_context(|| format!("Moviebuff person request failed for {}", args.id))?;
    report::report_person(&person);
    Ok(())
}

/// Runs the `entity` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_entity(client: &impl MoviebuffApi, args: &IdArgs) -> Result<()> {
    let entity = client
        .get_entity(&args.id)
        .await
        .with_context(|| format!("Moviebuff entity request failed for {}", args.id))?;
    report::report_entity(&entity);
    Ok(())
}

/// Runs the `resources` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_resources(client: &impl MoviebuffApi, args: &ResourcesArgs) -> Result<()> {
    let page = client
        .get_resources(args.kind.into(), args.limit, args.page)
        .await
        .context("Moviebuff resources request failed")?;
    report::report_resources(&page);
    Ok(())
}

/// Runs the `certifications` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_certifications(client: &impl MoviebuffApi, args: &CertificationsArgs) -> Result<()> {
    let certifications = client
        .get_certifications(args.country.as_deref().unwrap_or_default())
        .await
        .context("Moviebuff certifications request failed")?;
    report::report_certifications(&certifications);
    Ok(())
}

/// Runs the `holidays` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_holidays(client: &impl MoviebuffApi, args: &HolidaysArgs) -> Result<()> {
    let calendar = client
        .get_holiday_calendar(&args.country_id)
        .await
        .with_context(|| format!("Moviebuff holidays request failed for {}", args.country_id))?;
    report::report_calendar(&calendar);
    Ok(())
}

/// Runs the `mapped-cpl` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_mapped_cpl(client: &impl MoviebuffApi, args: &MappedCplArgs) -> Result<()> {
    let mapped = client
        .get_mapped_cpl(&args.cpl_id)
        .await
        .with_context(|| format!("Moviebuff mapped CPL request failed for {}", args.cpl_id))?;
    report::report_mapped_cpl(&mapped);
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let client = build_client(cli.dir.as_ref(), cli.base_url.as_deref())?;
    match cli.command {
        Commands::Movie(args) => run_movie(&client, &args).await,
        Commands::Person(args) => run_person(&client, &args).await,
        Commands::Entity(args) => run_entity(&client, &args).await,
        Commands::Resources(args) => run_resources(&client, &args).await,
        Commands::Certifications(args) => run_certifications(&client, &args).await,
        Commands::Holidays(args) => run_holidays(&client, &args).await,
        Commands::MappedCpl(args) => run_mapped_cpl(&client, &args).await,
    }
}

//! Tracing configuration for World Atlas
//!
//! Installs the global `tracing-subscriber` registry used by every crate of
//! the workspace.
//!
//! ## Layers / 层
//!
//! - **EnvFilter**: `RUST_LOG` wins, otherwise per-crate defaults
//! - **Console**: stderr, so stdout stays free for command output
//! - **File**: non-blocking `world-atlas.log` in the app log directory
//! - **Sentry**: only when `SENTRY_DSN` is set
//!
//! `log` records (reqwest, `atlas-infra::fs`) are bridged into tracing.

use std::{fs, io, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "world-atlas.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for app crates
/// - **Production**: info level for app crates
/// - **HTTP stack**: always warn, connection pool chatter is not useful
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![app_level.to_string()];
    for krate in ["atlas_core", "atlas_app", "atlas_infra", "atlas_shell", "world_atlas"] {
        directives.push(format!("{krate}={app_level}"));
    }
    directives.extend(
        ["reqwest=warn", "hyper=warn", "hyper_util=warn", "rustls=warn"]
            .into_iter()
            .map(String::from),
    );
    directives
}

/// Initialize the tracing subscriber
///
/// ## Behavior / 行为
///
/// 1. Creates an env-filter for level control
/// 2. Enables Sentry when `SENTRY_DSN` is set
/// 3. Sets up console and file fmt layers
/// 4. Registers the global subscriber and the `log` bridge
///
/// Call once, at the top of `main`, before anything logs.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // Guard must outlive the subscriber
    let sentry_layer = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        let guard = sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        ));

        if SENTRY_GUARD.set(guard).is_err() {
            eprintln!("Sentry guard already initialized");
        }

        sentry_tracing::layer()
    });

    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer() {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, using console only: {err}");
            None
        }
    };

    // "2025-01-15 10:30:45.123 INFO atlas_app::usecases: src/...rs:42: message"
    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    // try_init already bridges `log` when tracing-subscriber carries its
    // tracing-log feature; a second logger is refused.
    if tracing_log::LogTracer::init().is_err() {
        tracing::trace!("log bridge already installed");
    }

    Ok(())
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = atlas_infra::fs::logs_dir()?;
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

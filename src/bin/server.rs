use std::{
    fs::OpenOptions,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{
    AppState, build_router, graceful_shutdown, initialize_db, logging_middleware,
    storage::{DEFAULT_STORAGE_KEY, FileStorage, MemoryStorage, SqliteStorage},
    transaction::PersistPolicy,
};

/// The web server for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a SQLite database to save transactions in.
    ///
    /// With neither this nor `--data-file`, transactions are kept in memory
    /// and lost when the server stops.
    #[arg(long)]
    db_path: Option<String>,

    /// File path to a JSON file to save transactions in.
    #[arg(long, conflicts_with = "db_path")]
    data_file: Option<PathBuf>,

    /// The key the transactions are saved under in the SQLite database.
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Do not overwrite saved transactions with an empty list.
    #[arg(long)]
    skip_empty_writes: bool,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// File path for the debug log.
    #[arg(long, default_value = "debug.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(&args.log_path);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let app_state = build_app_state(&args);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(app_state))
        .layer(middleware::from_fn(logging_middleware));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}

fn build_app_state(args: &Args) -> AppState {
    let persist_policy = if args.skip_empty_writes {
        PersistPolicy::SkipEmpty
    } else {
        PersistPolicy::Always
    };

    if let Some(db_path) = &args.db_path {
        let connection = Connection::open(db_path)
            .unwrap_or_else(|error| panic!("Could not open database at {db_path}: {error}"));
        initialize_db(&connection).expect("Could not initialize database");
        tracing::info!("Saving transactions to {db_path} under {:?}", args.storage_key);

        let storage = SqliteStorage::new(Arc::new(Mutex::new(connection)), &args.storage_key);
        AppState::new(storage, persist_policy)
    } else if let Some(data_file) = &args.data_file {
        tracing::info!("Saving transactions to {}", data_file.display());

        AppState::new(FileStorage::new(data_file), persist_policy)
    } else {
        tracing::warn!("No storage given, transactions will be lost when the server stops");

        AppState::new(MemoryStorage::new(), persist_policy)
    }
}

fn setup_logging(log_path: &Path) {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}

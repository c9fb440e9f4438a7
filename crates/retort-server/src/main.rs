mod http;
mod service;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use retort_core::SimpleRng;
use retort_engine::{Engine, Pipeline, ResponseTree};
use retort_lang::{
    EditDistanceSpellchecker, PolarityScorer, RuleTagger, StaticThesaurus, WordTokenizer,
};
use service::ChatService;

#[derive(Parser)]
#[command(name = "retort-server", about = "retort canned-reply chatbot — API server")]
struct Cli {
    /// HTTP port
    #[arg(long, default_value = "17000")]
    port: u16,
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Response tree definition (CSV, one path per row)
    #[arg(long, default_value = "data/responses.csv")]
    tree: PathBuf,
    /// Lexicon word list (one word per line)
    #[arg(long, default_value = "data/lexicon.txt")]
    lexicon: PathBuf,
    /// RNG seed for response selection (default: time-derived)
    #[arg(long)]
    seed: Option<u64>,
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    // Startup barrier: both resources load and the tree builds before
    // the listener is bound, so no query can see a partial tree.
    let lexicon = match retort_parser::load_lexicon(&cli.lexicon) {
        Ok(lexicon) => lexicon,
        Err(err) => {
            tracing::error!(error = %err, "failed to load lexicon");
            std::process::exit(1);
        }
    };
    let rows = match retort_parser::load_rows(&cli.tree) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "failed to load response table");
            std::process::exit(1);
        }
    };
    let tree = match ResponseTree::from_rows(&rows) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::error!(error = %err, "response table is malformed");
            std::process::exit(1);
        }
    };
    tracing::info!(
        words = lexicon.len(),
        rows = rows.len(),
        nodes = tree.len(),
        "resources loaded"
    );
    tracing::debug!("response tree:\n{}", tree.render());

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    });

    let pipeline = Pipeline::new(
        WordTokenizer::new(),
        EditDistanceSpellchecker::new(lexicon.clone()),
        RuleTagger::new(),
        PolarityScorer::new(),
        StaticThesaurus::new(),
        lexicon,
    );
    let svc = Arc::new(ChatService::new(Engine::new(
        tree,
        pipeline,
        SimpleRng::new(seed),
    )));

    let app = http::routes()
        .layer(CorsLayer::permissive())
        .with_state(svc);

    let addr = format!("{}:{}", cli.host, cli.port);
    tracing::info!("retort server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

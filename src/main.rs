use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use postsearch::config::Settings;
use postsearch::index::loader;
use postsearch::{state, Document, SearchHit, SearchIndex};

/// Query a static-site search store.
#[derive(Debug, Parser)]
#[command(name = "postsearch", version, about)]
struct Cli {
    /// Settings file (defaults to ./postsearch.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search store to load (JSON array or generated lunr-store.js)
    #[arg(long, global = true)]
    index: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print documents matching a query, in index order
    Search {
        query: String,
        /// Maximum number of results to print
        #[arg(long)]
        limit: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every document in the store
    List {
        #[arg(long)]
        json: bool,
    },
    /// Validate the store and report duplicate urls
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .init();

    let index_path = cli
        .index
        .clone()
        .or_else(|| settings.index_path.clone())
        .ok_or_else(|| anyhow!("No search store given: pass --index or set index_path"))?;

    match cli.command {
        Command::Search { query, limit, json } => {
            run_search(&index_path, &query, limit.or(settings.max_results), json, &settings)
        }
        Command::List { json } => run_list(&index_path, json),
        Command::Check => run_check(&index_path),
    }
}

fn run_search(
    path: &Path,
    query: &str,
    limit: Option<usize>,
    json: bool,
    settings: &Settings,
) -> anyhow::Result<()> {
    let hits: Vec<SearchHit> = match state::init_from_file(path) {
        Ok(index) => index.search_hits(query.trim(), settings.snippet_chars),
        Err(_) => {
            eprintln!("search unavailable");
            Vec::new()
        }
    };

    let output = if json {
        render_hits_json(&hits, limit)?
    } else {
        render_hits_text(&hits, limit)
    };
    print!("{output}");
    Ok(())
}

fn limited(hits: &[SearchHit], limit: Option<usize>) -> &[SearchHit] {
    &hits[..limit.unwrap_or(hits.len()).min(hits.len())]
}

fn render_hits_json(hits: &[SearchHit], limit: Option<usize>) -> serde_json::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(limited(hits, limit))?))
}

/// "No results" is decided on the full match set, before the limit applies.
fn render_hits_text(hits: &[SearchHit], limit: Option<usize>) -> String {
    if hits.is_empty() {
        return "No results found.\n".to_string();
    }
    limited(hits, limit)
        .iter()
        .map(|hit| format!("{}\n  {}\n  {}\n", hit.title, hit.url, hit.snippet))
        .collect()
}

fn run_list(path: &Path, json: bool) -> anyhow::Result<()> {
    let index = SearchIndex::load_file(path)
        .with_context(|| format!("Failed to load search store {}", path.display()))?;

    if json {
        println!("{}", render_documents_json(index.documents())?);
        return Ok(());
    }

    for doc in &index {
        let date = doc
            .published_on()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "----------".to_string());
        println!("{date}  {}  {}", doc.title, doc.url);
    }
    Ok(())
}

fn render_documents_json(documents: &[Document]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(documents)
}

fn run_check(path: &Path) -> anyhow::Result<()> {
    let documents = loader::load_file(path)
        .with_context(|| format!("Failed to load search store {}", path.display()))?;

    println!("{} documents", documents.len());
    for url in loader::duplicate_urls(&documents) {
        println!("duplicate url: {url}");
    }
    Ok(())
}

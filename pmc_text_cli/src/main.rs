use std::path::PathBuf;
use std::process::exit;

use crate::args::{Args, Commands};
use clap::Parser;
use pmc_text::{EuropePmc, PmcText, Sanitizer, TagConfig};
use reqwest::Client;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use url::Url;

mod args;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let pmc_text = build(args.config, args.base_url);

    let result = match args.command {
        Commands::Clean { xml, pmcid } => clean(&pmc_text, xml, pmcid).await,
        Commands::Search { query, page_size } => search(&pmc_text, &query, page_size).await,
    };

    write_output(args.output, result);
}

fn build(config: Option<PathBuf>, base_url: Option<String>) -> PmcText {
    let tag_config = match config {
        Some(path) => match TagConfig::parse_path(&path) {
            Ok(config) => config,
            Err(error) => {
                log::error!("Failed to read tag config {}: {error}", path.display());
                exit(1);
            }
        },
        None => TagConfig::default(),
    };

    let sanitizer = match Sanitizer::new(tag_config) {
        Ok(sanitizer) => sanitizer,
        Err(error) => {
            log::error!("{error}");
            exit(1);
        }
    };
    log::debug!("Preserved tags: {}", sanitizer.config().preserve.join(", "));
    log::debug!("Removed tags: {}", sanitizer.config().remove.join(", "));

    let europe_pmc = match base_url.map(|url| Url::parse(&url)) {
        Some(Ok(url)) => EuropePmc::new(url),
        Some(Err(error)) => {
            log::error!("Invalid base url: {error}");
            exit(1);
        }
        None => EuropePmc::default(),
    };
    log::debug!("Using Europe PMC at '{}'", europe_pmc.base_url());

    PmcText::from_parts(sanitizer, europe_pmc)
}

async fn clean(
    pmc_text: &PmcText,
    xml_file: Option<PathBuf>,
    pmcid: Option<String>,
) -> Result<String, String> {
    if let Some(path) = xml_file {
        let bytes = std::fs::read(&path)
            .map_err(|error| format!("Failed to read {}: {error}", path.display()))?;
        return pmc_text
            .sanitizer()
            .sanitize_bytes(&bytes)
            .map_err(|error| error.to_string());
    }

    if let Some(pmcid) = pmcid {
        return pmc_text
            .fetch_clean(&pmcid, &Client::new())
            .await
            .map_err(|error| error.to_string());
    }

    Err("Either --xml or --pmcid is required".into())
}

async fn search(pmc_text: &PmcText, query: &str, page_size: u32) -> Result<String, String> {
    let ids = pmc_text
        .search(query, page_size, &Client::new())
        .await
        .map_err(|error| error.to_string())?;
    log::info!("Found {} articles for '{query}'", ids.len());
    Ok(ids.join("\n"))
}

fn write_output(output: Option<PathBuf>, result: Result<String, String>) {
    let text = match result {
        Ok(text) => text,
        Err(error) => {
            log::error!("{error}");
            exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(error) = std::fs::write(&path, text) {
                log::error!("Failed to write {}: {error}", path.display());
                exit(1);
            }
            log::info!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
}

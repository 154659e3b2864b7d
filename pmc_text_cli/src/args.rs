use clap::{command, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,

    /// Tag config file with `preserve:` and `remove:` lines
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Europe PMC REST endpoint to talk to
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Destination of resulting text file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a full-text article to plain text
    Clean {
        /// Source XML file
        #[arg(long, value_name = "FILE")]
        xml: Option<PathBuf>,

        /// PMC identifier to download the XML for
        #[arg(long, value_name = "PMCID")]
        pmcid: Option<String>,
    },
    /// Print the PMC identifiers matching a query
    Search {
        /// Keywords, URL-encoded before they are sent (write spaces, not `%20`)
        #[arg(long)]
        query: String,

        /// Number of results, between 1 and 1000
        #[arg(long, default_value_t = pmc_text::DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
}

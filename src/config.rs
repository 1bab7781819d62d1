//! Command-line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;
use crate::filter::DEFAULT_MAX_YEARS;

/// Papers kept per result list; anything beyond is reported as the limit.
pub const DEFAULT_NUM_RESULTS: usize = 200;

#[derive(Parser, Debug, Clone)]
#[command(name = "paperview", about = "Browse conference papers and their nearest neighbours")]
pub struct ServeArgs {
    #[arg(long, env = "PAPERS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, env = "PAPERS_PORT", default_value_t = 5000, help = "port to serve on")]
    pub port: u16,

    #[arg(
        short,
        long,
        env = "PAPERS_DATA",
        default_value = "db.json",
        help = "JSON file with papers and similarity lists"
    )]
    pub data: PathBuf,

    #[arg(
        short = 'r',
        long = "num-results",
        default_value_t = DEFAULT_NUM_RESULTS,
        help = "number of results to return per query"
    )]
    pub num_results: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_YEARS, help = "year columns in the filter panel")]
    pub max_years: usize,

    #[arg(long, help = "hide workshop papers from navigation and similarity filters")]
    pub no_workshop_papers: bool,

    #[arg(long, default_value = "static", help = "directory served under /static")]
    pub static_dir: PathBuf,
}

/// Immutable settings shared with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
    pub num_results: usize,
    pub max_years: usize,
    pub include_workshop_papers: bool,
}

impl Config {
    pub fn from_args(args: &ServeArgs) -> Result<Self, AppError> {
        let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
        Ok(Self {
            addr,
            data_path: args.data.clone(),
            static_dir: args.static_dir.clone(),
            num_results: args.num_results,
            max_years: args.max_years,
            include_workshop_papers: !args.no_workshop_papers,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            data_path: PathBuf::from("db.json"),
            static_dir: PathBuf::from("static"),
            num_results: DEFAULT_NUM_RESULTS,
            max_years: DEFAULT_MAX_YEARS,
            include_workshop_papers: true,
        }
    }
}

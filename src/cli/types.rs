use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "slugpages")]
#[command(about = "Serve and edit generated pages addressed by slug", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding one directory per page (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Slug index file, relative to the root unless absolute (defaults to slugs.json)
    #[arg(short, long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Configuration file (YAML, TOML or JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(short = 'H', long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on; overrides the PORT environment variable
    #[arg(short = 'P', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Settings given on the command line, to be layered over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            root: self.root.clone(),
            index_file: self.index.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}

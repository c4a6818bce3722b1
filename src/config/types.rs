use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::defaults;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory under which one directory per slug is created
    #[serde(default = "defaults::default_root")]
    pub root: PathBuf,

    /// Persisted slug index
    #[serde(default = "defaults::default_index_file")]
    pub index_file: PathBuf,

    /// Address to bind to
    #[serde(default = "defaults::default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "defaults::default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: defaults::default_root(),
            index_file: defaults::default_index_file(),
            host: defaults::default_host(),
            port: defaults::default_port(),
        }
    }
}

impl Config {
    /// Index file location, resolved against `root` when relative
    pub fn index_path(&self) -> PathBuf {
        if self.index_file.is_absolute() {
            self.index_file.clone()
        } else {
            self.root.join(&self.index_file)
        }
    }
}

/// Values that may be set by a configuration file; unset keys keep the
/// current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub index_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl ConfigOverrides {
    /// Apply every set value onto `config`
    pub fn merge_into(self, config: &mut Config) {
        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(index_file) = self.index_file {
            config.index_file = index_file;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
    }
}

use crate::config::Config;

/// Listener settings for the HTTP shell
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn new(address: &str, port: u16) -> Self {
        ServerConfig {
            address: address.to_string(),
            port,
        }
    }

    /// Get the full address string (e.g., "127.0.0.1:3000")
    pub fn address_string(&self) -> String {
        if self.address.contains(':') {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }

    /// Get the full URL (e.g., "http://localhost:3000")
    pub fn url(&self) -> String {
        let address = match self.address.as_str() {
            "127.0.0.1" | "0.0.0.0" => "localhost".to_string(),
            addr if addr.contains(':') => format!("[{}]", addr),
            addr => addr.to_string(),
        };

        format!("http://{}:{}", address, self.port)
    }
}

impl From<&Config> for ServerConfig {
    fn from(config: &Config) -> Self {
        ServerConfig::new(&config.host, config.port)
    }
}

//! Command-line and environment configuration.
//!
//! Every flag can also be set through an environment variable, and a `.env`
//! file in the working directory is loaded before parsing.

use clap::Parser;
use intervu_http::{CorsConfig, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "intervu-daemon", version, about = "InterVu interview-practice backend")]
pub struct Args {
    /// IP address to listen on
    #[arg(long, env = "INTERVU_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "INTERVU_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Deployment environment name
    #[arg(long = "env", env = "ENV", default_value = "development")]
    pub environment: String,

    /// Comma-separated list of allowed browser origins
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub cors_origins: Vec<String>,

    /// Regex an origin must fully match to be allowed
    #[arg(long, env = "CORS_ORIGIN_REGEX")]
    pub cors_origin_regex: Option<String>,

    /// Also append logs to `<dir>/backend.log`
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn server_config(&self) -> Result<ServerConfig, String> {
        let addr: SocketAddr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {}", e))?;

        let allowed_origins = self
            .cors_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        let origin_regex = self
            .cors_origin_regex
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(ServerConfig {
            addr,
            environment: self.environment.clone(),
            cors: CorsConfig {
                allowed_origins,
                origin_regex,
            },
        })
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long a deployment may go without a progress update before the
    /// timeout sweep fails it (default: `300`).
    pub deploy_timeout_secs: u64,
    /// Interval between timeout sweep runs (default: `10`).
    pub sweep_interval_secs: u64,
    /// Shared secret the provisioning backend must send in `x-api-key`
    /// on progress callbacks. `None` disables the check.
    pub api_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `HOST`                | `0.0.0.0`               |
    /// | `PORT`                | `3000`                  |
    /// | `CORS_ORIGINS`        | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`| `30`                    |
    /// | `DEPLOY_TIMEOUT_SECS` | `300`                   |
    /// | `SWEEP_INTERVAL_SECS` | `10`                    |
    /// | `DEPLOY_API_KEY`      | unset (check disabled)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let deploy_timeout_secs: u64 = std::env::var("DEPLOY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("DEPLOY_TIMEOUT_SECS must be a valid u64");

        let sweep_interval_secs: u64 = std::env::var("SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SWEEP_INTERVAL_SECS must be a valid u64");

        let api_key = std::env::var("DEPLOY_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            deploy_timeout_secs,
            sweep_interval_secs,
            api_key,
        }
    }
}

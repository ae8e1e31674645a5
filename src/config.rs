use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    // Sent as `x-axa-api-key` on upload and schedule calls
    pub axa_api: Option<String>,

    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,

    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,

    // Prefix stored uploads with a generated id instead of overwriting by name
    #[serde(default)]
    pub unique_upload_names: bool,

    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_upstream_base_url() -> String {
    "https://goodmorning-axa-dev.azure-api.net".to_string()
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

fn default_max_file_size() -> u64 {
    50
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config: Config = envy::from_iter(vars)?;
        config.upstream_base_url = config.upstream_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }

    pub fn max_request_body_bytes(&self) -> usize {
        // Allow some overhead for multipart boundaries/headers.
        let bytes = self
            .max_file_size_mb
            .saturating_add(10)
            .saturating_mul(1024 * 1024);
        usize::try_from(bytes).unwrap_or(usize::MAX)
    }
}

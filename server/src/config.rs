use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 4444;

#[derive(Debug, Clone)]
pub struct ServerConfig
{
    pub port: u16,
    /// Host pages.
    pub public_dir: PathBuf,
    /// Output of the wasm build, served under `/pkg`.
    pub client_dist_dir: PathBuf,
    /// JSON room catalogue served from `/linkdata`.
    pub rooms_file: PathBuf,
}

impl Default for ServerConfig
{
    fn default() -> Self
    {
        Self {
            port: DEFAULT_PORT,
            public_dir: PathBuf::from("./server/public"),
            client_dist_dir: PathBuf::from("./client/pkg"),
            rooms_file: PathBuf::from("./server/rooms.json"),
        }
    }
}

impl ServerConfig
{
    /// Reads `PORT`, `PUBLIC_DIR`, `CLIENT_DIST_DIR` and `ROOMS_FILE`, with
    /// `.env` already loaded by the caller.
    pub fn from_env() -> Self
    {
        let defaults = Self::default();
        let path_var = |name: &str, default: PathBuf| dotenvy::var(name).map(PathBuf::from).unwrap_or(default);

        Self {
            port: parse_port(dotenvy::var("PORT").ok()),
            public_dir: path_var("PUBLIC_DIR", defaults.public_dir),
            client_dist_dir: path_var("CLIENT_DIST_DIR", defaults.client_dist_dir),
            rooms_file: path_var("ROOMS_FILE", defaults.rooms_file),
        }
    }
}

fn parse_port(value: Option<String>) -> u16
{
    let Some(port_str) = value else {
        return DEFAULT_PORT;
    };
    port_str.parse::<u16>().unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse PORT value '{}': {}. Defaulting to {}.",
            port_str,
            e,
            DEFAULT_PORT
        );
        DEFAULT_PORT
    })
}

use std::env;

pub const DEFAULT_DATABASE_URL: &str = "forum.sqlite3";

/// Where the forum database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Loads `.env` if present, then resolves the database URL: an explicit
    /// value wins over `DATABASE_URL`, which wins over the default.
    pub fn load(database_url: Option<String>) -> Config {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                warn!("ignoring unreadable .env file: {}", err);
            }
        }
        Config::resolve(database_url, env::var("DATABASE_URL").ok())
    }

    fn resolve(explicit: Option<String>, from_env: Option<String>) -> Config {
        let database_url = explicit
            .or(from_env)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

        Config { database_url }
    }
}

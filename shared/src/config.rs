use anyhow::Result;

use crate::env::{which, Environment};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: database_name_for(which(), &std::env::var("DATABASE_NAME")?),
        };
        let server = ServerConfig {
            port: match std::env::var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => DEFAULT_PORT,
            },
        };

        Ok(Self { database, server })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct ServerConfig {
    pub port: u16,
}

const DEFAULT_PORT: u16 = 3000;

// テスト環境では本番データと混ざらないよう専用のデータベースに接続する
fn database_name_for(env: Environment, base: &str) -> String {
    match env {
        Environment::Test => format!("{base}_test"),
        Environment::Development | Environment::Production => base.to_string(),
    }
}

use std::env;

use strum::EnumString;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    #[default]
    Production,
}

/// 実行環境を示す。接続先データベースとログレベルの切り替えに用いる。
pub fn which() -> Environment {
    // debug_assertions が true の場合はデバッグビルド
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Ok(v) => parse_or(&v, default_env),
        Err(_) => default_env,
    }
}

fn parse_or(value: &str, default_env: Environment) -> Environment {
    value.parse().unwrap_or(default_env)
}

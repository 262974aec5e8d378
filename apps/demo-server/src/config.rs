//! # デモサーバー設定
//!
//! 環境変数からデモサーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DEMO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `DEMO_PORT` | No | ポート番号（デフォルト: `3100`） |

use std::{env, num::ParseIntError};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3100;

/// 設定読み込みのエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DEMO_PORT は有効なポート番号である必要があります: {value:?}")]
    InvalidPort {
        value:  String,
        #[source]
        source: ParseIntError,
    },
}

/// デモサーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl DemoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("DEMO_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("DEMO_PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidPort {
            value: value.to_string(),
            source,
        })
}

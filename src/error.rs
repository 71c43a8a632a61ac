use std::{net::AddrParseError, num::ParseIntError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IpcalcError {
    // IPv4アドレスのパース失敗 (アドレス・ネットマスク共通)
    #[error("Address parse error: {0}")]
    AddrParseError(#[from] AddrParseError),

    // プレフィックス長の数値パース失敗
    #[error("Integer parse error: {0}")]
    ParseIntError(#[from] ParseIntError),

    // プレフィックス長が 0..=32 の範囲外
    #[error("Invalid prefix length: {0} (must be 0-32)")]
    InvalidPrefix(u32),

    // "address/prefix" 形式になっていない
    #[error("Malformed CIDR: {0}")]
    MalformedCidr(String),

    // JSON出力のシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // CLIなどからの不正な入力
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

use std::path::PathBuf;
use thiserror::Error;

/// ブリッジ統一エラー型
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Invalid import pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("File not found: {url} (referenced from {})", .previous.display())]
    FileNotFound { url: String, previous: PathBuf },

    #[error(
        "Cannot convert {kind}: only string, number, boolean, list, map and null can be converted"
    )]
    Conversion { kind: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

impl BridgeError {
    /// 構築時の致命的エラーかどうか
    ///
    /// 構築時エラーはインポート処理前に発生し、リクエスト単位では回復しない。
    pub fn is_construction(&self) -> bool {
        matches!(self, BridgeError::InvalidPattern { .. })
    }
}

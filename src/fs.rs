//! ファイルシステム抽象化
//!
//! ブリッジが触れるファイル操作の抽象化レイヤー。解決は存在確認のみ、
//! 読み込みはハンドラ／ローダー側で行う読み取り専用の界面に絞っている。

use crate::error::Result;
use std::path::Path;

/// ファイルシステム操作を抽象化するトレイト
///
/// テスト時に MockFs を注入してファイル操作をモック化できる。
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// パスが通常ファイルとして存在するか（シンボリックリンク追従）
    ///
    /// ディレクトリや存在しないパスに対しては false。
    fn is_file(&self, path: &Path) -> bool;

    /// ファイル内容を読み込み
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;

//! 解決済みファイルをホスト値として読むローダ
//!
//! ハンドラの典型形「ファイルを読んで値を返す」を部品化したもの。
//! `LoaderHandler` で包めばそのままインポートハンドラになる。

use crate::error::Result;
use crate::fs::{FileSystem, RealFs};
use crate::importer::{HandlerOutput, ImportHandler};
use crate::value::SassValue;
use std::path::Path;

/// 解決済みパスをホスト値に読み込む trait
pub trait Loader: Send + Sync {
    fn load(&self, path: &Path) -> Result<SassValue>;
}

/// JSON ドキュメントをホスト値として読むローダ
///
/// 数値はすべて倍精度浮動小数点として読む。オブジェクトのキーは
/// パーサのソート順で並ぶ。
pub struct JsonLoader {
    fs: Box<dyn FileSystem>,
}

impl JsonLoader {
    pub fn new() -> Self {
        Self {
            fs: Box::new(RealFs),
        }
    }

    /// ファイルシステム実装を差し替えて構築（テスト用）
    pub fn with_fs<F>(fs: F) -> Self
    where
        F: FileSystem + 'static,
    {
        Self { fs: Box::new(fs) }
    }
}

impl Default for JsonLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader for JsonLoader {
    fn load(&self, path: &Path) -> Result<SassValue> {
        let text = self.fs.read_to_string(path)?;
        let json: serde_json::Value = serde_json::from_str(&text)?;
        Ok(SassValue::from_json(json))
    }
}

/// ローダを割当文ハンドラとして使うアダプタ
///
/// 読み込んだ値はインポータ側で basename を変数名とする割当文になる。
pub struct LoaderHandler<L> {
    loader: L,
}

impl<L> LoaderHandler<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }
}

impl<L> ImportHandler for LoaderHandler<L>
where
    L: Loader,
{
    fn handle(&self, path: &Path, _previous: &Path) -> Result<HandlerOutput> {
        Ok(HandlerOutput::Value(self.loader.load(path)?))
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;

//! インポータアダプタ
//!
//! プリプロセッサエンジンとホスト側ハンドラの橋渡し。ディレクティブ毎に
//! ゲート判定 → パス解決 → ハンドラ実行 → 直列化のパイプラインを実行する。
//! エンジンは戻り値を受け取るまでブロックし、アダプタは最終結果
//! （素通し・内容・エラー）以外を返さない。
//!
//! ## リクエスト毎の状態遷移
//!
//! ```text
//!     ┌──────┐ ゲート不一致 ┌─────────────┐
//!     │ Idle │────────────▶│ PassThrough │ [終端]
//!     └──┬───┘             └─────────────┘
//!        │ ゲート一致
//!        ▼
//!   ┌───────────┐ 未発見   ┌───────┐
//!   │ Resolving │────────▶│ Error │ [終端]
//!   └─────┬─────┘         └───────┘
//!         │ 解決
//!         ▼
//!   ┌──────────┐ テキスト  ┌──────┐
//!   │ Handling │─────────▶│ Done │ [終端]
//!   └─────┬────┘          └──────┘
//!         │ ホスト値
//!         ▼
//!  ┌─────────────┐ 変換成功 ┌──────┐
//!  │ Serializing │────────▶│ Done │ [終端]
//!  └──────┬──────┘         └──────┘
//!         │ 変換不能
//!         ▼
//!     ┌───────┐
//!     │ Error │ [終端]
//!     └───────┘
//! ```

use crate::config::IncludePaths;
use crate::error::Result;
use crate::fs::{FileSystem, RealFs};
use crate::matcher::{Matcher, RegexMatcher};
use crate::resolve;
use crate::serialize;
use crate::value::SassValue;
use std::path::Path;

/// ハンドラの戻り値
///
/// すでに構文テキストならそのまま通し、ホスト値なら割当文に直列化される。
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutput {
    /// すでに有効なスタイルシート構文
    Text(String),
    /// 直列化対象のホスト値
    Value(SassValue),
}

impl From<String> for HandlerOutput {
    fn from(text: String) -> Self {
        HandlerOutput::Text(text)
    }
}

impl From<SassValue> for HandlerOutput {
    fn from(value: SassValue) -> Self {
        HandlerOutput::Value(value)
    }
}

/// インポートハンドラ
///
/// 解決済みパスとインポート元パスを受け取り、構文テキストかホスト値を返す
/// 外部供給の不透明な能力。ブリッジは 1 リクエストにつき 1 回呼ぶ以上の
/// ライフサイクル責務を持たない。ハンドラが停止すればパイプライン全体が
/// 停止する（タイムアウトは無い）。
pub trait ImportHandler: Send + Sync {
    fn handle(&self, path: &Path, previous: &Path) -> Result<HandlerOutput>;
}

impl<F> ImportHandler for F
where
    F: Fn(&Path, &Path) -> Result<HandlerOutput> + Send + Sync,
{
    fn handle(&self, path: &Path, previous: &Path) -> Result<HandlerOutput> {
        self(path, previous)
    }
}

/// アダプタの最終結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportResult {
    /// ゲート不一致。エンジンは既定のインポート解決にフォールバックする
    PassThrough,
    /// エンジンに返すスタイルシート内容
    Contents(String),
}

/// インポータアダプタ
///
/// パターンゲート・ハンドラ・インクルードパス設定を束ね、エンジンから
/// ディレクティブ毎に呼ばれる。呼び出し間で解決結果をキャッシュしない。
pub struct Importer {
    matcher: Box<dyn Matcher>,
    handler: Box<dyn ImportHandler>,
    include_paths: IncludePaths,
    fs: Box<dyn FileSystem>,
}

impl Importer {
    /// 正規表現ゲートでインポータを構築
    ///
    /// 不正なパターンは最初のインポートを処理する前に `InvalidPattern` で
    /// 失敗する。
    pub fn new<H>(pattern: &str, handler: H) -> Result<Self>
    where
        H: ImportHandler + 'static,
    {
        Ok(Self::with_matcher(RegexMatcher::new(pattern)?, handler))
    }

    /// 任意のマッチャーでインポータを構築
    pub fn with_matcher<M, H>(matcher: M, handler: H) -> Self
    where
        M: Matcher + 'static,
        H: ImportHandler + 'static,
    {
        Self {
            matcher: Box::new(matcher),
            handler: Box::new(handler),
            include_paths: IncludePaths::new(),
            fs: Box::new(RealFs),
        }
    }

    /// インクルードパス設定を差し替える
    ///
    /// 未設定ならインポート元ファイルのディレクトリのみ探索される。
    pub fn with_include_paths(mut self, include_paths: IncludePaths) -> Self {
        self.include_paths = include_paths;
        self
    }

    /// ファイルシステム実装を差し替える（テスト用）
    pub fn with_fs<F>(mut self, fs: F) -> Self
    where
        F: FileSystem + 'static,
    {
        self.fs = Box::new(fs);
        self
    }

    /// インポートディレクティブを 1 件処理する
    ///
    /// 1. ゲート判定（不一致なら `PassThrough`）
    /// 2. パス解決（失敗なら `FileNotFound`）
    /// 3. ハンドラを `(解決済みパス, インポート元)` で実行
    /// 4. テキストは無変更、ホスト値は basename を変数名とする割当文に
    /// 5. 変換不能な値は `Conversion` で失敗
    pub fn handle_import(&self, url: &str, previous: &Path) -> Result<ImportResult> {
        if !self.matcher.matches(url) {
            return Ok(ImportResult::PassThrough);
        }

        let resolved = resolve::resolve(self.fs.as_ref(), url, previous, &self.include_paths)?;

        let contents = match self.handler.handle(&resolved.path, previous)? {
            HandlerOutput::Text(text) => text,
            HandlerOutput::Value(value) => serialize::assign(&resolved.base_name, &value)?,
        };

        Ok(ImportResult::Contents(contents))
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;

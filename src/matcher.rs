//! インポート URL のパターンゲート
//!
//! このブリッジが処理すべきインポートかどうかを判定する述語。
//! マッチ戦略は `Matcher` trait の背後にあり、正規表現・拡張子・glob の
//! どれでもアダプタの契約を満たせる。

use crate::error::{BridgeError, Result};

/// インポート URL を判定する述語 trait
///
/// 純粋であること。副作用を持ってはならない。
pub trait Matcher: Send + Sync {
    /// URL がこのブリッジの対象かどうか
    fn matches(&self, url: &str) -> bool;
}

impl Matcher for regex::Regex {
    fn matches(&self, url: &str) -> bool {
        self.is_match(url)
    }
}

/// 正規表現マッチャー
///
/// 不正なパターンは構築時に `InvalidPattern` で失敗する。
/// リクエスト処理中にパターン起因で失敗することはない。
#[derive(Debug)]
pub struct RegexMatcher {
    pattern: regex::Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = regex::Regex::new(pattern).map_err(|e| BridgeError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern: compiled })
    }
}

impl Matcher for RegexMatcher {
    fn matches(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

/// 拡張子（リテラルサフィックス）マッチャー
#[derive(Debug)]
pub struct ExtensionMatcher {
    extensions: Vec<String>,
}

impl ExtensionMatcher {
    /// 例: `ExtensionMatcher::new([".js", ".json"])`
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Matcher for ExtensionMatcher {
    fn matches(&self, url: &str) -> bool {
        self.extensions.iter().any(|ext| url.ends_with(ext.as_str()))
    }
}

/// glob パターンマッチャー
#[derive(Debug)]
pub struct GlobMatcher {
    pattern: glob::Pattern,
}

impl GlobMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = glob::Pattern::new(pattern).map_err(|e| BridgeError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern: compiled })
    }
}

impl Matcher for GlobMatcher {
    fn matches(&self, url: &str) -> bool {
        self.pattern.matches(url)
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;

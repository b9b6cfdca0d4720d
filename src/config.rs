//! インクルードパス設定
//!
//! エンジンから渡される検索ディレクトリの順序付きリスト。
//! リスト順がそのまま優先順位になる。

use std::path::PathBuf;

/// 設定文字列の区切り文字（Unix は `:`、Windows は `;`）
#[cfg(windows)]
const LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const LIST_SEPARATOR: char = ':';

/// インポート解決に使う検索ディレクトリの順序付きリスト
///
/// 先頭から順に探索され、最初に見つかったファイルが勝つ。
/// インポート元ファイルのディレクトリはここには含まれない
/// （リゾルバが候補リストの先頭に加える）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludePaths {
    dirs: Vec<PathBuf>,
}

impl IncludePaths {
    /// 空のリストを作成（インポート元のディレクトリのみ探索される）
    pub fn new() -> Self {
        Self::default()
    }

    /// 区切り文字で連結された設定文字列をパース
    ///
    /// 順序を保持し、空のエントリは捨てる。
    pub fn parse(list: &str) -> Self {
        let dirs = list
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        Self { dirs }
    }

    /// SASS_PATH 環境変数からパース（未設定・空文字列は空リスト）
    pub fn from_env() -> Self {
        match std::env::var("SASS_PATH") {
            Ok(value) if !value.is_empty() => Self::parse(&value),
            _ => Self::new(),
        }
    }

    /// ディレクトリを末尾に追加
    pub fn push(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.push(dir.into());
    }

    /// 検索順のディレクトリ一覧
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for IncludePaths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            dirs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

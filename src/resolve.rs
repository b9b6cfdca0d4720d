//! インポートパス解決
//!
//! インポート元ファイルのディレクトリ、続いて設定されたインクルードパスの
//! 順で候補ディレクトリを走査し、最初に存在したファイルを返す。

use crate::config::IncludePaths;
use crate::error::{BridgeError, Result};
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// 解決済みファイル
///
/// `base_name` は最終セグメントから末尾の拡張子を除いた名前で、
/// 割当文の変数名になる。キャッシュせず毎回導出する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub base_name: String,
}

/// URL を候補ディレクトリから解決する
///
/// 最初に通常ファイルとして存在した候補が勝ち、以降のディレクトリは見ない。
/// どの候補にも無ければ URL とインポート元を携えた `FileNotFound` で失敗する。
/// 同期・ブロッキングで、リトライも部分成功もない。
pub fn resolve(
    fs: &dyn FileSystem,
    url: &str,
    previous: &Path,
    include_paths: &IncludePaths,
) -> Result<ResolvedFile> {
    for dir in candidate_dirs(previous, include_paths) {
        let candidate = dir.join(url);
        if fs.is_file(&candidate) {
            let base_name = base_name(&candidate);
            return Ok(ResolvedFile {
                path: candidate,
                base_name,
            });
        }
    }

    Err(BridgeError::FileNotFound {
        url: url.to_string(),
        previous: previous.to_path_buf(),
    })
}

/// 候補ディレクトリを優先順に列挙
///
/// 先頭はインポート元ファイルのディレクトリ（親を持たない場合は `.`）、
/// 以降は設定されたインクルードパスの並び順。
fn candidate_dirs(previous: &Path, include_paths: &IncludePaths) -> Vec<PathBuf> {
    let previous_dir = match previous.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut dirs = Vec::with_capacity(1 + include_paths.dirs().len());
    dirs.push(previous_dir);
    dirs.extend(include_paths.dirs().iter().cloned());
    dirs
}

/// 最終セグメントから末尾の拡張子を除いた名前
fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;

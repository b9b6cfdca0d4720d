//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// ファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockEntryKind {
    File,
    Dir,
}

struct MockEntry {
    content: String,
    kind: MockEntryKind,
}

/// テスト用モックファイルシステム
pub struct MockFs {
    entries: RwLock<HashMap<String, MockEntry>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.entries.write().unwrap().insert(
            path.to_string(),
            MockEntry {
                content: content.to_string(),
                kind: MockEntryKind::File,
            },
        );
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.entries.write().unwrap().insert(
            path.to_string(),
            MockEntry {
                content: String::new(),
                kind: MockEntryKind::Dir,
            },
        );
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn is_file(&self, path: &Path) -> bool {
        self.entries
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .map(|e| e.kind == MockEntryKind::File)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.entries
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .filter(|e| e.kind == MockEntryKind::File)
            .map(|e| e.content.clone())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into())
    }
}

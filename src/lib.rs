//! スタイルシートプリプロセッサの拡張インポートブリッジ
//!
//! `@import` ディレクティブをホスト側ハンドラへ委譲するための部品群。
//!
//! - パターンゲート: 処理対象 URL の判定（`matcher`）
//! - パス解決: インポート元ディレクトリとインクルードパスの順序探索（`resolve`）
//! - 直列化: ホスト値から Sass リテラル・割当文への変換（`value`, `serialize`）
//! - アダプタ: ゲート判定から内容返却までのパイプライン（`importer`）
//! - ローダ: ファイルを読んで値を返すハンドラ部品（`loader`）
//!
//! ```no_run
//! use sass_bridge::{HandlerOutput, ImportResult, Importer, Result, SassValue};
//! use std::path::Path;
//!
//! # fn run() -> Result<()> {
//! let importer = Importer::new(r"\.json$", |_: &Path, _: &Path| -> Result<HandlerOutput> {
//!     Ok(HandlerOutput::Value(SassValue::from("blue")))
//! })?;
//!
//! match importer.handle_import("theme.json", Path::new("main.scss"))? {
//!     ImportResult::Contents(text) => println!("{text}"),
//!     ImportResult::PassThrough => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod importer;
pub mod loader;
pub mod matcher;
pub mod resolve;
pub mod serialize;
pub mod value;

pub use config::IncludePaths;
pub use error::{BridgeError, Result};
pub use fs::{FileSystem, RealFs};
pub use importer::{HandlerOutput, ImportHandler, ImportResult, Importer};
pub use loader::{JsonLoader, Loader, LoaderHandler};
pub use matcher::{ExtensionMatcher, GlobMatcher, Matcher, RegexMatcher};
pub use resolve::{resolve, ResolvedFile};
pub use serialize::{assign, serialize};
pub use value::{InvalidKind, SassValue};

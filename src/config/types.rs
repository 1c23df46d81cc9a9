use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 媒體根目錄的環境變數名稱
pub const MEDIA_FOLDER_VAR: &str = "MEDIA_FOLDER";
/// 試跑模式的環境變數名稱
pub const DRY_RUN_VAR: &str = "DRY_RUN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl FileTypeTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_file
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let video_extensions = self.video_extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| video_extensions.contains(&format!(".{}", ext.to_lowercase())))
    }
}

/// 執行設定（來自環境變數或 `.env`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// 要處理的媒體根目錄
    pub media_folder: PathBuf,
    /// 只顯示會怎麼改名，不實際改名
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
    pub settings: Settings,
}

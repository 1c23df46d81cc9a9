use crate::config::types::{Config, DRY_RUN_VAR, FileTypeTable, MEDIA_FOLDER_VAR, Settings};
use anyhow::{Context, Result, bail};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// 編譯時嵌入的影片副檔名表（不需要外部檔案）
const FILE_TYPE_TABLE_JSON: &str = include_str!("../data/file_type_table.json");

impl Config {
    /// 載入 `.env`、讀取環境變數並建立設定
    pub fn new() -> Result<Self> {
        load_env_file(Path::new(".env"));
        let settings = Settings::from_env()?;
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Result<Self> {
        let file_type_table = Self::load_embedded_file_type_table()?;

        Ok(Self {
            file_type_table,
            settings,
        })
    }

    /// 從編譯時嵌入的 JSON 載入檔案類型表
    fn load_embedded_file_type_table() -> Result<FileTypeTable> {
        serde_json::from_str(FILE_TYPE_TABLE_JSON).context("無法解析嵌入的檔案類型設定")
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 以自訂的查詢函式讀取設定
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let media_folder = lookup(MEDIA_FOLDER_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let Some(media_folder) = media_folder else {
            bail!("未設定 {MEDIA_FOLDER_VAR} 環境變數，請指定要處理的媒體資料夾");
        };

        let dry_run = lookup(DRY_RUN_VAR).is_some_and(|value| parse_flag(&value));

        Ok(Self {
            media_folder: PathBuf::from(media_folder),
            dry_run,
        })
    }
}

/// 解析開關型的環境變數值
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// 載入 `.env` 檔，已存在的環境變數不會被覆蓋
///
/// 檔案不存在時視為正常情況
pub fn load_env_file(path: &Path) {
    if !path.exists() {
        return;
    }

    match dotenvy::from_path(path) {
        Ok(()) => debug!("已載入環境設定檔: {}", path.display()),
        Err(e) => warn!("無法載入環境設定檔 {}: {e}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_settings_from_lookup() {
        let settings =
            Settings::from_lookup(lookup_from(&[("MEDIA_FOLDER", " /media/tv "), ("DRY_RUN", "1")]))
                .unwrap();
        assert_eq!(settings.media_folder, PathBuf::from("/media/tv"));
        assert!(settings.dry_run);
    }

    #[test]
    fn test_settings_dry_run_defaults_off() {
        let settings = Settings::from_lookup(lookup_from(&[("MEDIA_FOLDER", "/media")])).unwrap();
        assert!(!settings.dry_run);

        let settings =
            Settings::from_lookup(lookup_from(&[("MEDIA_FOLDER", "/media"), ("DRY_RUN", "0")]))
                .unwrap();
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_settings_missing_media_folder() {
        assert!(Settings::from_lookup(lookup_from(&[])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[("MEDIA_FOLDER", "  ")])).is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_embedded_file_type_table() {
        let table = Config::load_embedded_file_type_table().unwrap();
        assert!(table.is_video_file(Path::new("/a/Show.S01E01.MKV")));
        assert!(table.is_video_file(Path::new("b.mp4")));
        assert!(!table.is_video_file(Path::new("readme.txt")));
        assert!(!table.is_video_file(Path::new("no_extension")));
    }
}

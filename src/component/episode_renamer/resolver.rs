//! 檔名推斷流程
//!
//! 正規化 → 辨識集數 → 擷取欄位 → 推斷節目名稱與清理標題 → 格式化。
//! 整個流程不做任何 I/O，也沒有共用的可變狀態，可在多執行緒中平行呼叫。

use super::field_extractor::extract_fields;
use super::formatter::format_episode_name;
use super::normalizer::normalize_separators;
use super::pattern_matcher::{PatternKind, match_episode};
use super::show_name_resolver::resolve_show_name;
use super::title_cleaner::clean_title;
use std::path::Path;
use thiserror::Error;

/// 無法推斷時的原因，呼叫端應略過該檔案並回報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unmatched {
    #[error("no episode pattern found in filename")]
    NoPatternMatch,
    #[error("could not determine show name from folder or filename")]
    EmptyShowName,
}

/// 推斷結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub show_name: String,
    pub season: Option<u32>,
    pub episode: u32,
    pub episode_end: Option<u32>,
    pub title: String,
    /// 副檔名（不含前導點）
    pub extension: String,
    pub kind: PatternKind,
}

impl ResolvedName {
    /// 產生 Jellyfin 格式的檔名
    #[must_use]
    pub fn file_name(&self) -> String {
        format_episode_name(
            &self.show_name,
            self.season,
            self.episode,
            self.episode_end,
            &self.title,
            &self.extension,
        )
    }
}

/// 待推斷的原始檔名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawName {
    pub stem: String,
    /// 副檔名（不含前導點）
    pub extension: String,
    /// 上層資料夾名稱，由近到遠，不含掃描根目錄
    pub ancestors: Vec<String>,
}

impl RawName {
    /// 由檔案路徑建立，`root` 為掃描根目錄
    ///
    /// 路徑沒有檔名時回傳 `None`
    pub fn from_path(path: &Path, root: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_string_lossy().to_string();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();

        let ancestors = path
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .map(|relative| {
                relative
                    .components()
                    .rev()
                    .map(|c| c.as_os_str().to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            stem,
            extension,
            ancestors,
        })
    }

    pub fn resolve(&self) -> Result<ResolvedName, Unmatched> {
        let ancestors: Vec<&str> = self.ancestors.iter().map(String::as_str).collect();
        resolve_in(&self.stem, &self.extension, &ancestors)
    }
}

/// 推斷單一檔案的 Jellyfin 名稱
///
/// # Arguments
/// * `stem` - 不含副檔名的檔名
/// * `extension` - 副檔名
/// * `parent_folder` - 直接上層資料夾名稱；檔案位於掃描根目錄時為 `None`
pub fn resolve(
    stem: &str,
    extension: &str,
    parent_folder: Option<&str>,
) -> Result<ResolvedName, Unmatched> {
    let ancestors: Vec<&str> = parent_folder.into_iter().collect();
    resolve_in(stem, extension, &ancestors)
}

/// 同 [`resolve`]，但可傳入整串上層資料夾（由近到遠）
///
/// 例如 `Breaking Bad/Season 01/x.mkv` 傳入 `["Season 01", "Breaking Bad"]`，
/// 季資料夾會被略過，節目名稱取自 `Breaking Bad`。
pub fn resolve_in(
    stem: &str,
    extension: &str,
    ancestors: &[&str],
) -> Result<ResolvedName, Unmatched> {
    let normalized = normalize_separators(stem);
    let matched = match_episode(&normalized).ok_or(Unmatched::NoPatternMatch)?;
    let parsed = extract_fields(&normalized, &matched);

    let show =
        resolve_show_name(ancestors, &parsed.show_prefix).ok_or(Unmatched::EmptyShowName)?;
    let title = clean_title(&parsed.raw_title, parsed.episode);

    Ok(ResolvedName {
        show_name: show.name,
        season: parsed.season.or(show.folder_season),
        episode: parsed.episode,
        episode_end: parsed.episode_end,
        title,
        extension: extension.trim_start_matches('.').to_string(),
        kind: parsed.kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_standard() {
        let resolved = resolve("Show.Name.S01E01.Episode.Title", "mkv", None).unwrap();
        assert_eq!(resolved.show_name, "Show Name");
        assert_eq!(resolved.season, Some(1));
        assert_eq!(resolved.episode, 1);
        assert_eq!(resolved.title, "Episode Title");
        assert_eq!(resolved.file_name(), "Show Name - S01E01 - Episode Title.mkv");
    }

    #[test]
    fn test_resolve_lowercase_underscores() {
        let resolved = resolve("show_name_s01e01_ep_name", "mkv", None).unwrap();
        assert_eq!(resolved.show_name, "show name");
        assert_eq!(resolved.season, Some(1));
        assert_eq!(resolved.episode, 1);
        assert_eq!(resolved.title, "ep name");
    }

    #[test]
    fn test_resolve_fallback_title() {
        let resolved = resolve("01", "mkv", Some("Some Show")).unwrap();
        assert_eq!(resolved.title, "Episode 01");
        assert_eq!(resolved.file_name(), "Some Show - E01 - Episode 01.mkv");
    }

    #[test]
    fn test_resolve_empty_show_name() {
        assert_eq!(resolve("01", "mkv", None), Err(Unmatched::EmptyShowName));
        assert_eq!(
            resolve("S01E01.Pilot", "mkv", Some("Season 01")),
            Err(Unmatched::EmptyShowName)
        );
    }

    #[test]
    fn test_resolve_no_match() {
        assert_eq!(resolve("readme", "txt", None), Err(Unmatched::NoPatternMatch));
        assert_eq!(resolve("poster", "jpg", Some("Show")), Err(Unmatched::NoPatternMatch));
    }

    #[test]
    fn test_resolve_keyword_season_not_repeated_in_show_name() {
        let resolved = resolve("Show.S02.Ep05.Title", "mkv", None).unwrap();
        assert_eq!(resolved.file_name(), "Show - S02E05 - Title.mkv");

        let resolved = resolve("Show.Season.2.Episode.5.Title", "mkv", None).unwrap();
        assert_eq!(resolved.file_name(), "Show - S02E05 - Title.mkv");
    }

    #[test]
    fn test_resolve_inherits_folder_season() {
        let resolved = resolve_in("05 - Title", "mkv", &["Season 02", "Show"]).unwrap();
        assert_eq!(resolved.file_name(), "Show - S02E05 - Title.mkv");
    }

    #[test]
    fn test_filename_season_wins_over_folder() {
        let resolved = resolve_in("Show.S03E01", "mkv", &["Season 02", "Show"]).unwrap();
        assert_eq!(resolved.season, Some(3));
    }

    #[test]
    fn test_raw_name_from_path() {
        let root = PathBuf::from("/media");
        let path = root
            .join("Breaking Bad")
            .join("Season 01")
            .join("breaking.bad.S01E01.Pilot.mkv");
        let raw = RawName::from_path(&path, &root).unwrap();
        assert_eq!(raw.stem, "breaking.bad.S01E01.Pilot");
        assert_eq!(raw.extension, "mkv");
        assert_eq!(raw.ancestors, vec!["Season 01", "Breaking Bad"]);

        let resolved = raw.resolve().unwrap();
        assert_eq!(resolved.file_name(), "Breaking Bad - S01E01 - Pilot.mkv");
    }

    #[test]
    fn test_raw_name_at_root() {
        let root = PathBuf::from("/media");
        let raw = RawName::from_path(&root.join("Show.S01E05.Title.mp4"), &root).unwrap();
        assert!(raw.ancestors.is_empty());
        assert_eq!(raw.resolve().unwrap().file_name(), "Show - S01E05 - Title.mp4");
    }
}

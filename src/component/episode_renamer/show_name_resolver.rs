//! 節目名稱推斷模組
//!
//! 優先使用上層資料夾名稱（略過 `Season 01` 這類季資料夾），
//! 找不到時改用檔名中集數標記之前的文字。

use super::normalizer::clean_fragment;
use regex::Regex;
use std::sync::LazyLock;

/// 只表示季數的資料夾名稱（已經過 [`clean_fragment`]）
static REGEX_SEASON_FOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:season|series)\s?(\d{1,3})\b.*|s(\d{1,3})|specials?)$")
        .expect("Invalid regex")
});

/// 推斷出的節目名稱
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowName {
    pub name: String,
    /// 途中略過的季資料夾所標示的季數
    pub folder_season: Option<u32>,
}

/// 判斷資料夾是否為季資料夾
///
/// # Returns
/// 不是季資料夾時回傳 `None`；是季資料夾時回傳其季數（`Specials` 為 `Some(None)`）
pub fn season_folder(folder_name: &str) -> Option<Option<u32>> {
    let cleaned = clean_fragment(folder_name);
    let captures = REGEX_SEASON_FOLDER.captures(&cleaned)?;
    Some(
        captures
            .get(1)
            .or_else(|| captures.get(2))
            .and_then(|m| m.as_str().parse().ok()),
    )
}

/// 推斷節目名稱
///
/// # Arguments
/// * `ancestors` - 上層資料夾名稱，由近到遠
/// * `show_prefix` - 檔名中集數標記之前的文字
///
/// # Returns
/// 兩種來源都是空的時候回傳 `None`
pub fn resolve_show_name(ancestors: &[&str], show_prefix: &str) -> Option<ShowName> {
    let mut folder_season = None;

    for folder in ancestors {
        if let Some(season) = season_folder(folder) {
            folder_season = folder_season.or(season);
            continue;
        }

        let name = clean_fragment(folder);
        if !name.is_empty() {
            return Some(ShowName {
                name,
                folder_season,
            });
        }
    }

    let name = clean_fragment(show_prefix);
    if name.is_empty() {
        return None;
    }

    Some(ShowName {
        name,
        folder_season,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_folder_detection() {
        assert_eq!(season_folder("Season 01"), Some(Some(1)));
        assert_eq!(season_folder("season.2"), Some(Some(2)));
        assert_eq!(season_folder("S03"), Some(Some(3)));
        assert_eq!(season_folder("Series 4"), Some(Some(4)));
        assert_eq!(season_folder("Specials"), Some(None));
        assert_eq!(season_folder("Breaking Bad"), None);
        assert_eq!(season_folder("Show.S01"), None);
    }

    #[test]
    fn test_season_folder_with_suffix() {
        assert_eq!(season_folder("Season 1 (2008)"), Some(Some(1)));
        assert_eq!(season_folder("Season 01 - Extras"), Some(Some(1)));
        assert_eq!(season_folder("S01 Extras"), None);

        let show =
            resolve_show_name(&["Season 1 (2008)", "Breaking Bad"], "breaking bad ").unwrap();
        assert_eq!(show.name, "Breaking Bad");
        assert_eq!(show.folder_season, Some(1));
    }

    #[test]
    fn test_prefers_parent_folder() {
        let show = resolve_show_name(&["Chernobyl"], "chernobyl ").unwrap();
        assert_eq!(show.name, "Chernobyl");
        assert_eq!(show.folder_season, None);
    }

    #[test]
    fn test_skips_season_folder() {
        let show = resolve_show_name(&["Season 01", "Breaking Bad"], "breaking bad ").unwrap();
        assert_eq!(show.name, "Breaking Bad");
        assert_eq!(show.folder_season, Some(1));
    }

    #[test]
    fn test_folder_separators_normalized() {
        let show = resolve_show_name(&["The_Office.US"], "").unwrap();
        assert_eq!(show.name, "The Office US");
    }

    #[test]
    fn test_falls_back_to_prefix() {
        let show = resolve_show_name(&[], "Show Name - ").unwrap();
        assert_eq!(show.name, "Show Name");

        let show = resolve_show_name(&["Season 2"], "breaking bad ").unwrap();
        assert_eq!(show.name, "breaking bad");
        assert_eq!(show.folder_season, Some(2));
    }

    #[test]
    fn test_empty_sources() {
        assert_eq!(resolve_show_name(&[], ""), None);
        assert_eq!(resolve_show_name(&["Season 01", " _ "], " - "), None);
    }
}

//! 分隔字元正規化模組
//!
//! 將 `.`、`_` 與空白統一成單一空白。連字號在此不處理，
//! 等到切出節目名稱與標題片段後再由 [`clean_fragment`] 判斷。

use regex::Regex;
use std::sync::LazyLock;

static REGEX_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._\s]+").expect("Invalid regex"));

/// 緊鄰空白或位於片段邊緣的連字號視為欄位分隔
static REGEX_SEPARATOR_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)-+|-+(?:$|\s)").expect("Invalid regex"));

static REGEX_MULTIPLE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// 正規化檔名中的分隔字元（保留所有連字號）
pub fn normalize_separators(stem: &str) -> String {
    REGEX_SEPARATORS.replace_all(stem, " ").trim().to_string()
}

/// 清理檔名片段
///
/// 分隔字元轉為空白、移除作為分隔用的連字號、合併空白。
/// 夾在兩個非空白字元之間的連字號（如 `Thirty-Seven`）會保留。
pub fn clean_fragment(text: &str) -> String {
    let result = REGEX_SEPARATORS.replace_all(text, " ");
    let result = REGEX_SEPARATOR_HYPHENS.replace_all(&result, " ");
    let result = REGEX_MULTIPLE_SPACES.replace_all(&result, " ");
    result.trim().to_string()
}

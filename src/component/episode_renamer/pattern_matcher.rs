//! 集數標記辨識模組
//!
//! 依固定優先順序嘗試各種集數格式，第一個成功的辨識器即為結果。
//! 所有辨識器都作用在已正規化的檔名上（`.`、`_` 已轉為空白）。

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

/// 命中的集數格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// `S01E01`、`s1e1`、`S01E01-E02`
    Standard,
    /// `2x04`
    AltNxNN,
    /// `101`：第 1 季第 01 集
    ThreeDigit,
    /// `Ep01`、`Episode 7`、`E05`
    KeywordEp,
    /// `05 - Title`、`01`
    BareNumber,
}

/// 辨識結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeMatch {
    pub kind: PatternKind,
    pub season: Option<u32>,
    pub episode: u32,
    /// 多集檔案的最後一集（例如 `S01E01-E02` 的 2）
    pub episode_end: Option<u32>,
    /// 集數標記在正規化檔名中的位元組範圍
    pub span: Range<usize>,
    /// 節目名稱前綴的結束位置，前方另有季數標記時會早於 `span.start`
    pub prefix_end: usize,
}

type Recognizer = fn(&str) -> Option<EpisodeMatch>;

const RECOGNIZERS: [Recognizer; 5] = [
    match_standard,
    match_alt_nxnn,
    match_three_digit,
    match_keyword,
    match_bare_number,
];

static REGEX_STANDARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bs(\d{1,3})\s?e(\d{1,4})(?:-?e(\d{1,4}))?").expect("Invalid regex")
});

static REGEX_ALT_NXNN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})x(\d{2,3})\b").expect("Invalid regex"));

static REGEX_THREE_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([1-9])(\d{2})\b").expect("Invalid regex"));

static REGEX_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:ep(?:isode)?[\s-]*|e)(\d{1,4})(?:-e(\d{1,4}))?\b")
        .expect("Invalid regex")
});

/// 關鍵字格式前方獨立出現的季數標記（`S02`、`Season 2`）
static REGEX_SEASON_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:season|s)\s?(\d{1,3})\b").expect("Invalid regex"));

static REGEX_BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,3})\b").expect("Invalid regex"));

/// 依優先順序辨識集數標記
///
/// 找不到任何格式時回傳 `None`。
pub fn match_episode(normalized: &str) -> Option<EpisodeMatch> {
    RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(normalized))
}

fn capture_number(captures: &Captures<'_>, index: usize) -> Option<u32> {
    captures.get(index).and_then(|m| m.as_str().parse().ok())
}

/// 季數或集數為 0 的候選一律不採用
fn build_match(
    kind: PatternKind,
    season: Option<u32>,
    episode: Option<u32>,
    episode_end: Option<u32>,
    span: Range<usize>,
) -> Option<EpisodeMatch> {
    let episode = episode.filter(|&e| e > 0)?;
    if season == Some(0) {
        return None;
    }

    Some(EpisodeMatch {
        kind,
        season,
        episode,
        episode_end: episode_end.filter(|&end| end > episode),
        prefix_end: span.start,
        span,
    })
}

fn match_standard(normalized: &str) -> Option<EpisodeMatch> {
    REGEX_STANDARD.captures_iter(normalized).find_map(|caps| {
        let span = caps.get(0)?.range();
        build_match(
            PatternKind::Standard,
            capture_number(&caps, 1),
            capture_number(&caps, 2),
            capture_number(&caps, 3),
            span,
        )
    })
}

fn match_alt_nxnn(normalized: &str) -> Option<EpisodeMatch> {
    REGEX_ALT_NXNN.captures_iter(normalized).find_map(|caps| {
        let span = caps.get(0)?.range();
        build_match(
            PatternKind::AltNxNN,
            capture_number(&caps, 1),
            capture_number(&caps, 2),
            None,
            span,
        )
    })
}

/// 三位數格式可能誤判解析度或編碼標記（如 `H 264`），因此排在其他數字格式之後
///
/// 出現在 `Ep01`、`E01` 之後的三位數屬於標題，不採用
fn match_three_digit(normalized: &str) -> Option<EpisodeMatch> {
    let title_start = REGEX_KEYWORD.find(normalized).map(|m| m.end());

    REGEX_THREE_DIGIT.captures_iter(normalized).find_map(|caps| {
        let span = caps.get(0)?.range();
        if title_start.is_some_and(|start| span.start >= start) {
            return None;
        }
        build_match(
            PatternKind::ThreeDigit,
            capture_number(&caps, 1),
            capture_number(&caps, 2),
            None,
            span,
        )
    })
}

fn match_keyword(normalized: &str) -> Option<EpisodeMatch> {
    REGEX_KEYWORD.captures_iter(normalized).find_map(|caps| {
        let span = caps.get(0)?.range();
        let season_token = REGEX_SEASON_TOKEN
            .captures_iter(&normalized[..span.start])
            .last();
        let season = season_token
            .as_ref()
            .and_then(|season_caps| capture_number(season_caps, 1));
        let prefix_end = season_token
            .as_ref()
            .and_then(|season_caps| season_caps.get(0))
            .map_or(span.start, |m| m.start());

        let mut matched = build_match(
            PatternKind::KeywordEp,
            season,
            capture_number(&caps, 1),
            capture_number(&caps, 2),
            span,
        )?;
        matched.prefix_end = prefix_end;
        Some(matched)
    })
}

fn match_bare_number(normalized: &str) -> Option<EpisodeMatch> {
    REGEX_BARE_NUMBER.captures_iter(normalized).find_map(|caps| {
        let span = caps.get(0)?.range();
        build_match(
            PatternKind::BareNumber,
            None,
            capture_number(&caps, 1),
            None,
            span,
        )
    })
}

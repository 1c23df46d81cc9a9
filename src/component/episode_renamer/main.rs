//! 集數重新命名主模組
//!
//! 掃描媒體資料夾、推斷每個影片的 Jellyfin 名稱，再依序執行改名

use super::resolver::{RawName, ResolvedName, Unmatched};
use crate::config::Config;
use crate::tools::{scan_video_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 集數重新命名器
pub struct EpisodeRenamer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

/// 單一檔案的改名計畫
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub source: PathBuf,
    pub target: PathBuf,
    pub resolved: ResolvedName,
}

/// 單一檔案的推斷結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePlan {
    Rename(PlannedRename),
    /// 檔名已符合格式
    Compliant(PathBuf),
    Unmatched(PathBuf, Unmatched),
}

/// 重新命名結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameSummary {
    /// 已改名（試跑模式下為預計改名）的檔案數
    pub renamed: usize,
    pub already_compliant: usize,
    /// 無法推斷的檔案數
    pub unmatched: usize,
    /// 目標檔案已存在而跳過的檔案數
    pub skipped: usize,
    pub errors: usize,
}

impl EpisodeRenamer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<RenameSummary> {
        let root = &self.config.settings.media_folder;
        let dry_run = self.config.settings.dry_run;

        println!("{}", style("=== Jellyfin 集數重新命名 ===").cyan().bold());
        validate_directory_exists(root)?;

        if dry_run {
            println!("{}", style("試跑模式：不會實際改名任何檔案").yellow());
        }
        info!("處理資料夾: {}", root.display());

        let video_files = scan_video_files(root, &self.config.file_type_table)?;
        if video_files.is_empty() {
            println!("{}", style("找不到任何影片檔案").yellow());
            return Ok(RenameSummary::default());
        }

        println!(
            "{}",
            style(format!("找到 {} 個影片檔案", video_files.len())).green()
        );

        let mut summary = RenameSummary::default();
        let mut renames = Vec::new();

        for plan in self.plan_renames(&video_files, root) {
            match plan {
                FilePlan::Rename(planned) => renames.push(planned),
                FilePlan::Compliant(path) => {
                    info!("已符合格式: {}", display_name(&path));
                    summary.already_compliant += 1;
                }
                FilePlan::Unmatched(path, reason) => {
                    warn!("無法解析集數資訊: {} ({reason})", display_name(&path));
                    summary.unmatched += 1;
                }
            }
        }

        if dry_run {
            self.display_preview(&renames, &mut summary);
        } else {
            self.execute_renames(&renames, &mut summary);
        }

        self.display_summary(&summary, dry_run);
        Ok(summary)
    }

    /// 平行推斷所有檔案的新名稱，輸出順序與輸入相同
    pub fn plan_renames(&self, files: &[PathBuf], root: &Path) -> Vec<FilePlan> {
        files.par_iter().map(|path| plan_file(path, root)).collect()
    }

    fn display_preview(&self, renames: &[PlannedRename], summary: &mut RenameSummary) {
        println!();
        println!("{}", style("預覽重新命名結果：").cyan());
        println!();

        for planned in renames {
            println!("    {} {}", style("舊:").dim(), display_name(&planned.source));
            println!("    {} {}", style("新:").dim(), display_name(&planned.target));
            println!();
            info!(
                "[DRY RUN] {}  →  {}",
                display_name(&planned.source),
                display_name(&planned.target)
            );
            summary.renamed += 1;
        }
    }

    /// 依序改名，避免同一資料夾內兩個檔案搶同一個目標名稱
    fn execute_renames(&self, renames: &[PlannedRename], summary: &mut RenameSummary) {
        if renames.is_empty() {
            return;
        }

        let progress_bar = ProgressBar::new(renames.len() as u64);
        if let Ok(progress_style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        ) {
            progress_bar.set_style(progress_style.progress_chars("#>-"));
        }
        progress_bar.set_message("重新命名中...");

        for planned in renames {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷信號，停止改名");
                progress_bar.abandon_with_message("操作已中斷");
                return;
            }

            if planned.target.exists() {
                warn!(
                    "目標檔案已存在，跳過: {}  →  {}",
                    display_name(&planned.source),
                    display_name(&planned.target)
                );
                summary.skipped += 1;
                progress_bar.inc(1);
                continue;
            }

            match fs::rename(&planned.source, &planned.target) {
                Ok(()) => {
                    info!(
                        "已改名: {}  →  {}",
                        display_name(&planned.source),
                        display_name(&planned.target)
                    );
                    summary.renamed += 1;
                }
                Err(e) => {
                    error!("改名失敗 {}: {e}", planned.source.display());
                    summary.errors += 1;
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("完成");
    }

    fn display_summary(&self, summary: &RenameSummary, dry_run: bool) {
        let renamed_label = if dry_run { "預計改名" } else { "成功" };

        println!();
        println!("{}", style("=== 重新命名結果 ===").cyan().bold());
        println!("  {}: {} 個", renamed_label, style(summary.renamed).green());
        if summary.already_compliant > 0 {
            println!("  已符合格式: {} 個", style(summary.already_compliant).dim());
        }
        if summary.unmatched > 0 {
            println!("  無法解析: {} 個", style(summary.unmatched).yellow());
        }
        if summary.skipped > 0 {
            println!("  跳過: {} 個", style(summary.skipped).yellow());
        }
        if summary.errors > 0 {
            println!("  失敗: {} 個", style(summary.errors).red());
        }

        info!(
            "重新命名完成 - {}: {}, 已符合: {}, 無法解析: {}, 跳過: {}, 失敗: {}",
            renamed_label,
            summary.renamed,
            summary.already_compliant,
            summary.unmatched,
            summary.skipped,
            summary.errors
        );
    }
}

/// 推斷單一檔案的新路徑
pub fn plan_file(path: &Path, root: &Path) -> FilePlan {
    let Some(raw) = RawName::from_path(path, root) else {
        return FilePlan::Unmatched(path.to_path_buf(), Unmatched::NoPatternMatch);
    };

    match raw.resolve() {
        Ok(resolved) => {
            let new_name = resolved.file_name();
            if path.file_name().is_some_and(|name| name.to_string_lossy() == new_name) {
                return FilePlan::Compliant(path.to_path_buf());
            }

            let target = path.with_file_name(&new_name);
            FilePlan::Rename(PlannedRename {
                source: path.to_path_buf(),
                target,
                resolved,
            })
        }
        Err(reason) => FilePlan::Unmatched(path.to_path_buf(), reason),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}

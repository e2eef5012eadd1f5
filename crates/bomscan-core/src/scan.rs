//! 扫描主流程：目录遍历 + 前缀比对
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::bom::BomKind;
use crate::error::{FileAccessError, ScanError};
use crate::options::{ScanOptions, ScanStats};
use crate::prefix::detect_file;

/// 遍历 `opts.root` 并将检测结果逐行写入 `out`
/// - 单线程，顺序与文件系统枚举顺序一致（不排序）
/// - 排除目录在进入前剪枝；根目录本身永不剪枝
/// - 单文件打开/读取失败仅记 debug 日志并跳过
pub fn scan_and_write(opts: &ScanOptions, out: &mut dyn Write) -> Result<ScanStats, ScanError> {
    scan_with(opts, |kind, path| write_report_line(&mut *out, kind, path))
}

/// 便捷接口：每个命中文件对应一行输出（不含换行），与 `boms_found` 一一对应
pub fn scan_to_vec(opts: &ScanOptions) -> Result<(Vec<String>, ScanStats), ScanError> {
    let mut lines: Vec<String> = Vec::new();
    let stats = scan_with(opts, |kind, path| {
        lines.push(format_report_line(kind, path));
        Ok(())
    })?;
    Ok((lines, stats))
}

/// 遍历主循环：每检测到一个 BOM 调用一次 `on_bom`
/// `on_bom` 返回的 IO 错误会中止扫描并以 `ScanError::Output` 返回
pub fn scan_with<F>(opts: &ScanOptions, mut on_bom: F) -> Result<ScanStats, ScanError>
where
    F: FnMut(BomKind, &Path) -> io::Result<()>,
{
    check_root(&opts.root)?;

    let mut stats = ScanStats::default();
    let walker = WalkDir::new(&opts.root)
        .into_iter()
        .filter_entry(|e| !is_pruned(e, opts));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(error = %err, "skipping unreadable walk entry");
                continue;
            }
        };
        if !is_candidate_file(&entry) { continue; }

        record_detection(&mut stats, entry.path(), detect_file(entry.path()), &mut on_bom)?;
    }

    Ok(stats)
}

/// 处理单个文件的检测结果：更新统计，命中则回调；访问错误只记日志
fn record_detection<F>(
    stats: &mut ScanStats,
    path: &Path,
    result: Result<Option<BomKind>, FileAccessError>,
    on_bom: &mut F,
) -> io::Result<()>
where
    F: FnMut(BomKind, &Path) -> io::Result<()>,
{
    match result {
        Ok(Some(kind)) => {
            stats.files_scanned += 1;
            stats.boms_found += 1;
            on_bom(kind, path)?;
        }
        Ok(None) => {
            stats.files_scanned += 1;
            trace!(path = %path.display(), "no bom");
        }
        Err(err) => {
            stats.files_skipped += 1;
            debug!(error = %err, "skipping file");
        }
    }
    Ok(())
}

/// 输出格式：`BOM found (<ENCODING>): <path>`
pub fn format_report_line(kind: BomKind, path: &Path) -> String {
    format!("BOM found ({}): {}", kind.encoding_label(), path.display())
}

pub(crate) fn write_report_line(out: &mut dyn Write, kind: BomKind, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", format_report_line(kind, path))
}

/// 根目录必须存在且为目录；这是唯一会中止扫描的前置条件
fn check_root(root: &Path) -> Result<(), ScanError> {
    let md = std::fs::metadata(root)
        .map_err(|source| ScanError::RootInaccessible { path: root.to_path_buf(), source })?;
    if !md.is_dir() {
        return Err(ScanError::RootNotDirectory { path: root.to_path_buf() });
    }
    Ok(())
}

/// 深度 > 0 且名称命中排除列表的目录被剪枝；同名普通文件照常扫描
fn is_pruned(entry: &DirEntry, opts: &ScanOptions) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() { return false; }
    match entry.file_name().to_str() {
        Some(name) => opts.is_excluded(name),
        None => false,
    }
}

/// 普通文件，或不指向目录的符号链接（指向目录的链接不跟随）
/// 悬空链接也算文件，打开时失败并计入跳过
fn is_candidate_file(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    ft.is_file() || (ft.is_symlink() && !entry.path().is_dir())
}

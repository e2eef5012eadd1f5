//! 扫描选项与统计信息（模块）
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 默认剪枝的目录名（依赖管理器缓存目录）
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 扫描根目录
    pub root: PathBuf,
    /// 需要剪枝的目录名；命中的目录在进入前即被跳过，其内容永不访问
    pub excluded_dirs: BTreeSet<String>,
}

impl ScanOptions {
    /// 以默认排除列表构建选项
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 目录名是否在排除列表中（按名称精确匹配，区分大小写）
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.excluded_dirs.contains(dir_name)
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// 成功读取前缀的文件数
    pub files_scanned: usize,
    /// 因打开/读取失败而跳过的文件数
    pub files_skipped: usize,
    /// 检测到 BOM 并已输出的文件数
    pub boms_found: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_node_modules_only() {
        let opts = ScanOptions::new("/tmp");
        assert!(opts.is_excluded("node_modules"));
        assert!(!opts.is_excluded("Node_Modules"));
        assert!(!opts.is_excluded("src"));
        assert_eq!(opts.excluded_dirs.len(), 1);
    }
}

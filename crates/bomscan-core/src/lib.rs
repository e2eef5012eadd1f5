//! BOM 扫描核心库
//!
//! 设计要点：
//! - 递归遍历目录，读取每个文件最多 4 个前缀字节，与 UTF-8 / UTF-16 BOM 签名比对。
//! - 依赖管理器缓存目录（默认 `node_modules`）在进入前剪枝。
//! - 单文件错误只记日志并跳过；只有根目录不可用或输出写失败才会返回错误。

mod bom;
mod error;
mod options;
mod prefix;
mod scan;

pub use bom::{classify, BomKind, ByteOrder, MAX_PREFIX_LEN};
pub use error::{FileAccessError, ScanError};
pub use options::{ScanOptions, ScanStats, DEFAULT_EXCLUDED_DIRS};
pub use prefix::{detect_file, read_prefix};
pub use scan::{format_report_line, scan_and_write, scan_to_vec, scan_with};

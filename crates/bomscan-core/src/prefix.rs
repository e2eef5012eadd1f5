//! 单文件前缀读取
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::bom::{classify, BomKind, MAX_PREFIX_LEN};
use crate::error::FileAccessError;

/// 读取文件开头最多 `MAX_PREFIX_LEN` 字节（文件更短时读到 EOF 为止）
/// 文件句柄在任何返回路径上都会随 drop 关闭
pub fn read_prefix(path: &Path) -> Result<Vec<u8>, FileAccessError> {
    let file = File::open(path).map_err(|source| FileAccessError::Open { path: path.to_path_buf(), source })?;
    let mut buf = Vec::with_capacity(MAX_PREFIX_LEN);
    // take + read_to_end 会处理短读与 Interrupted
    file.take(MAX_PREFIX_LEN as u64)
        .read_to_end(&mut buf)
        .map_err(|source| FileAccessError::Read { path: path.to_path_buf(), source })?;
    Ok(buf)
}

/// 读取前缀并分类
pub fn detect_file(path: &Path) -> Result<Option<BomKind>, FileAccessError> {
    let prefix = read_prefix(path)?;
    Ok(classify(&prefix))
}

//! BOM 签名与分类（纯函数，仅依赖前缀字节）
use std::fmt;

/// 读取的最大前缀长度（字节）
pub const MAX_PREFIX_LEN: usize = 4;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// UTF-16 字节序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

/// 检测到的 BOM 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16(ByteOrder),
}

impl BomKind {
    /// 输出用的编码名称；UTF-16 不区分字节序
    pub fn encoding_label(&self) -> &'static str {
        match self {
            BomKind::Utf8 => "UTF-8",
            BomKind::Utf16(_) => "UTF-16",
        }
    }
}

impl fmt::Display for BomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoding_label())
    }
}

/// 按前缀字节分类
/// - UTF-8 优先判断；未命中时才检查 UTF-16 两种字节序
/// - `FF FE 00 00`（UTF-32LE）同样归为 UTF-16
pub fn classify(prefix: &[u8]) -> Option<BomKind> {
    if prefix.starts_with(UTF8_BOM) {
        Some(BomKind::Utf8)
    } else if prefix.starts_with(UTF16_LE_BOM) {
        Some(BomKind::Utf16(ByteOrder::Little))
    } else if prefix.starts_with(UTF16_BE_BOM) {
        Some(BomKind::Utf16(ByteOrder::Big))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_bom() {
        assert_eq!(classify(&[0xEF, 0xBB, 0xBF, 0x48]), Some(BomKind::Utf8));
        assert_eq!(classify(&[0xEF, 0xBB, 0xBF]), Some(BomKind::Utf8));
    }

    #[test]
    fn utf16_both_byte_orders() {
        assert_eq!(classify(&[0xFF, 0xFE, 0x41, 0x00]), Some(BomKind::Utf16(ByteOrder::Little)));
        assert_eq!(classify(&[0xFE, 0xFF, 0x00, 0x41]), Some(BomKind::Utf16(ByteOrder::Big)));
        assert_eq!(classify(&[0xFF, 0xFE, 0x00, 0x00]), Some(BomKind::Utf16(ByteOrder::Little)));
    }

    #[test]
    fn short_or_plain_prefix_has_no_bom() {
        assert_eq!(classify(b""), None);
        assert_eq!(classify(&[0xEF]), None);
        assert_eq!(classify(&[0xEF, 0xBB]), None);
        assert_eq!(classify(&[0xFF]), None);
        assert_eq!(classify(b"Hell"), None);
        // BOM 不在开头不算
        assert_eq!(classify(&[0x00, 0xEF, 0xBB, 0xBF]), None);
    }

    #[test]
    fn labels() {
        assert_eq!(BomKind::Utf8.to_string(), "UTF-8");
        assert_eq!(BomKind::Utf16(ByteOrder::Big).encoding_label(), "UTF-16");
        assert_eq!(BomKind::Utf16(ByteOrder::Little).to_string(), "UTF-16");
    }
}

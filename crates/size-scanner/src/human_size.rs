/// 体积后缀：B 打印为整数，k/M/G 保留一位小数
struct Suffix {
    ext: &'static str,
    frac: bool,
}

const SUFFIXES: [Suffix; 4] = [
    Suffix { ext: "B", frac: false },
    Suffix { ext: "k", frac: true },
    Suffix { ext: "M", frac: true },
    Suffix { ext: "G", frac: true },
];

/// 把字节数格式化为人类可读的二进制单位字符串，
/// 取满足 `bytes < 1024^(i+1)` 的最小单位
pub fn human_size(bytes: u64) -> String {
    for (i, suffix) in SUFFIXES.iter().enumerate() {
        let base = 1u64 << (10 * i);
        if bytes < base << 10 {
            if suffix.frac {
                return format!("{:.1}{}", bytes as f64 / base as f64, suffix.ext);
            }
            return format!("{}{}", bytes / base, suffix.ext);
        }
    }

    // 超出 G 的表示范围时回退为原始字节数
    bytes.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_printed_as_integer() {
        assert_eq!(human_size(0), "0B");
        assert_eq!(human_size(1), "1B");
        assert_eq!(human_size(512), "512B");
        assert_eq!(human_size(1023), "1023B");
    }

    #[test]
    fn test_binary_units_one_decimal() {
        assert_eq!(human_size(1024), "1.0k");
        assert_eq!(human_size(1536), "1.5k");
        assert_eq!(human_size(1024 * 1024), "1.0M");
        assert_eq!(human_size(3_670_016), "3.5M");
        assert_eq!(human_size(1024 * 1024 * 1024), "1.0G");
        assert_eq!(human_size(1_700_000_000), "1.6G");
    }

    #[test]
    fn test_fallback_beyond_largest_unit() {
        let tib = 1u64 << 40;
        assert_eq!(human_size(tib), "1099511627776");
        assert_eq!(human_size(tib + 12345), (tib + 12345).to_string());
        assert_eq!(human_size(tib - 1), "1024.0G");
    }

    #[test]
    fn test_unit_is_smallest_bound() {
        // 每个阈值两侧应落在相邻单位上
        assert!(human_size(1023).ends_with('B'));
        assert!(human_size(1024).ends_with('k'));
        assert!(human_size((1 << 20) - 1).ends_with('k'));
        assert!(human_size(1 << 20).ends_with('M'));
        assert!(human_size((1 << 30) - 1).ends_with('M'));
        assert!(human_size(1 << 30).ends_with('G'));
    }
}

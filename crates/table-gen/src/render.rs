use binsize_domain::BinRow;

/// 表头列名，分隔行的横线宽度与其一致
const COLS: [&str; 3] = ["Name", "Language", "Description"];

/// 渲染 github markdown 表格：表头、分隔行、每条记录一行，
/// name 列包在反引号里
pub fn render_table(rows: &[BinRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!("| {} |\n", COLS.join(" | ")));

    let dashes: Vec<String> = COLS.iter().map(|col| "-".repeat(col.len())).collect();
    out.push_str(&format!("| {} |\n", dashes.join(" | ")));

    for row in rows {
        out.push_str(&format!("| `{}` | {} | {} |\n", row.name, row.lang, row.text));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, lang: &str, text: &str) -> BinRow {
        BinRow {
            name: name.to_string(),
            lang: lang.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_render_single_row() {
        let out = render_table(&[row("a", "Go", "x")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "| Name | Language | Description |",
                "| ---- | -------- | ----------- |",
                "| `a` | Go | x |",
            ]
        );
    }

    #[test]
    fn test_render_keeps_input_order() {
        let out = render_table(&[
            row("hi-c", "C", "plain c"),
            row("hi-asm", "Assembly", "direct syscalls"),
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "| `hi-c` | C | plain c |");
        assert_eq!(lines[3], "| `hi-asm` | Assembly | direct syscalls |");
    }

    #[test]
    fn test_render_no_rows() {
        let out = render_table(&[]);
        assert_eq!(out.lines().count(), 2);
    }
}

use std::io;
use regex::Regex;

/// 將 shell 風格的檔名 glob 轉為完整比對的正規表示式
/// 支援 `*`、`?`、`[...]` 與 `[!...]`；未閉合的 `[` 視為一般字元
/// `*`、`?` 亦可匹配換行字元，與 fnmatch 相同
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2 + 6);
    out.push_str("(?s)^");
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => match parse_class(&chars, i) {
                Some((class, next)) => {
                    out.push_str(&class);
                    i = next;
                    continue;
                }
                None => out.push_str(r"\["),
            },
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
        i += 1;
    }
    out.push('$');
    out
}

// 回傳 (字元類別, 下一個索引)；找不到結尾的 `]` 時回傳 None
fn parse_class(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut j = start + 1;
    // 只有 `!` 代表否定；開頭的 `^` 是一般字元
    let negate = chars.get(j) == Some(&'!');
    if negate {
        j += 1;
    }
    // 緊接在開頭的 `]` 屬於類別內容
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    if j >= chars.len() {
        return None;
    }

    let body_start = start + 1 + usize::from(negate);
    let mut class = String::from("[");
    if negate {
        class.push('^');
    }
    for &c in &chars[body_start..j] {
        match c {
            '\\' | '[' | ']' | '^' | '&' | '~' => {
                class.push('\\');
                class.push(c);
            }
            _ => class.push(c),
        }
    }
    class.push(']');
    Some((class, j + 1))
}

pub fn compile_glob(pattern: &str) -> io::Result<Regex> {
    Regex::new(&glob_to_regex(pattern)).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("無效的 glob 模式 '{}': {}", pattern, e),
        )
    })
}

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn format_size(size_bytes: u64, human_readable: bool) -> String {
    if !human_readable {
        return format!("{} B", size_bytes);
    }
    let mut size = size_bytes as f64;
    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    // 超過 TB 仍以 TB 表示
    format!("{:.1} {}", size, SIZE_UNITS[SIZE_UNITS.len() - 1])
}

pub fn format_seconds(seconds: f64, human_readable: bool) -> String {
    if !human_readable {
        return format!("{} seconds", seconds.round() as i64);
    }
    if seconds < 1.0 {
        format!("{:.2} ms", seconds * 1000.0)
    } else if seconds < 60.0 {
        format!("{:.2} seconds", seconds)
    } else if seconds < 3_600.0 {
        format!("{:.2} minutes", seconds / 60.0)
    } else if seconds < 86_400.0 {
        format!("{:.2} hours", seconds / 3_600.0)
    } else if seconds < 31_536_000.0 {
        format!("{:.2} days", seconds / 86_400.0)
    } else {
        let years = seconds / 31_536_000.0;
        if years >= 2.0 {
            format!("{:.0} years", years)
        } else {
            "1 year".to_string()
        }
    }
}

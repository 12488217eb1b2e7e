use std::fmt;
use std::sync::OnceLock;
use regex::Regex;

// 單位字母區分大小寫：m 為分鐘，M 為月
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Hour,
    Minute,
    Day,
    Month,
    Year,
}

impl DurationUnit {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'h' => Some(DurationUnit::Hour),
            'm' => Some(DurationUnit::Minute),
            'D' => Some(DurationUnit::Day),
            'M' => Some(DurationUnit::Month),
            'Y' => Some(DurationUnit::Year),
            _ => None,
        }
    }

    /// 每個單位對應的固定秒數（月 = 30 天，年 = 365 天）
    pub fn seconds(self) -> u64 {
        match self {
            DurationUnit::Hour => 3_600,
            DurationUnit::Minute => 60,
            DurationUnit::Day => 86_400,
            DurationUnit::Month => 2_592_000,
            DurationUnit::Year => 31_536_000,
        }
    }

    fn letter(self) -> char {
        match self {
            DurationUnit::Hour => 'h',
            DurationUnit::Minute => 'm',
            DurationUnit::Day => 'D',
            DurationUnit::Month => 'M',
            DurationUnit::Year => 'Y',
        }
    }
}

/// 解析後的期間表達式，例如 `1Y3M`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationSpec {
    pub parts: Vec<(u64, DurationUnit)>,
}

fn duration_regex() -> &'static Regex {
    static DURATION_RE: OnceLock<Regex> = OnceLock::new();
    DURATION_RE.get_or_init(|| Regex::new(r"(\d+)([hmDMY])").expect("duration regex is valid"))
}

impl DurationSpec {
    /// 擷取字串中所有 `<數字><單位>` 片段，其餘字元一律忽略
    pub fn parse(input: &str) -> Self {
        let parts = duration_regex()
            .captures_iter(input)
            .filter_map(|caps| {
                // 超出 u64 的數字視為 u64::MAX，避免整個解析失敗
                let magnitude = caps[1].parse::<u64>().unwrap_or(u64::MAX);
                let unit = caps[2].chars().next().and_then(DurationUnit::from_letter)?;
                Some((magnitude, unit))
            })
            .collect();
        DurationSpec { parts }
    }

    pub fn total_seconds(&self) -> u64 {
        self.parts
            .iter()
            .fold(0u64, |acc, (magnitude, unit)| acc.saturating_add(magnitude.saturating_mul(unit.seconds())))
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for DurationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (magnitude, unit) in &self.parts {
            write!(f, "{}{}", magnitude, unit.letter())?;
        }
        Ok(())
    }
}

pub fn parse_duration_string(input: &str) -> u64 {
    DurationSpec::parse(input).total_seconds()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1h", 3_600)]
    #[case("1m", 60)]
    #[case("1D", 86_400)]
    #[case("1M", 2_592_000)]
    #[case("1Y", 31_536_000)]
    #[case("1Y3M", 31_536_000 + 3 * 2_592_000)]
    #[case("3M1Y", 31_536_000 + 3 * 2_592_000)]
    #[case("abc1Y3Mxyz", 31_536_000 + 3 * 2_592_000)]
    #[case("2D12h30m", 2 * 86_400 + 12 * 3_600 + 30 * 60)]
    #[case("", 0)]
    #[case("nothing here", 0)]
    #[case("5d5H5y5w", 0)]
    fn parses_total_seconds(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_duration_string(input), expected);
    }

    #[test]
    fn minute_and_month_are_distinct() {
        assert_eq!(parse_duration_string("10m"), 600);
        assert_eq!(parse_duration_string("10M"), 25_920_000);
        assert_ne!(parse_duration_string("1m"), parse_duration_string("1M"));
    }

    #[test]
    fn keeps_token_order() {
        let spec = DurationSpec::parse("1Y 3M 2D");
        assert_eq!(
            spec.parts,
            vec![(1, DurationUnit::Year), (3, DurationUnit::Month), (2, DurationUnit::Day)]
        );
        assert_eq!(spec.to_string(), "1Y3M2D");
    }

    #[test]
    fn huge_magnitudes_saturate() {
        assert_eq!(parse_duration_string("99999999999999999999999Y"), u64::MAX);
        assert_eq!(parse_duration_string("1000Y"), 31_536_000_000);
    }
}

use clap::Parser;
use std::io;
use std::path::Path;
use crate::config::ports::RunMode;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "age_sweep",
    about = "刪除指定目錄中符合 glob 模式且超過保留期間的檔案，並可備份至或還原自 S3",
    long_about = "掃描目錄中符合 glob 模式（以及可選的正規表示式）的檔案，找出修改時間早於保留期間的檔案。\n預設僅列出結果；指定 --destroy 才會真正刪除。\n期間格式為 <數字><單位>，單位區分大小寫：h=時、m=分、D=日、M=月（30 天）、Y=年（365 天），例如 1Y3M。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 要掃描的目錄
    pub directory: String,
    /// 比對檔名的 glob 模式，例如 '*.txt'
    pub glob_pattern: String,
    /// 保留期間，例如 '1Y3M' 代表一年三個月
    pub cutoff_duration: String,
    /// 遞迴掃描子目錄
    #[arg(short, long)]
    pub recursive: bool,
    /// 真正刪除檔案；未指定時僅試跑
    #[arg(long)]
    pub destroy: bool,
    /// 逐檔輸出符合或刪除的檔案
    #[arg(short, long)]
    pub verbose: bool,
    /// 輸出更多細節，包含尚未過期的檔案與除錯日誌
    #[arg(short = 'V', long)]
    pub very_verbose: bool,
    /// 以人類可讀單位顯示大小與時間
    #[arg(short = 'H', long)]
    pub human_readable: bool,
    /// 備份或還原使用的 S3 bucket
    #[arg(long)]
    pub s3_bucket: Option<String>,
    /// S3 區域，未指定時使用 AWS 預設設定
    #[arg(long)]
    pub s3_region: Option<String>,
    /// 自訂 S3 相容端點，例如 MinIO
    #[arg(long)]
    pub s3_endpoint: Option<String>,
    /// 從 S3 還原檔案，略過本地掃描
    #[arg(long)]
    pub restore_from_s3: bool,
    /// 備份過期檔案至 S3；搭配 --destroy 時先備份後刪除
    #[arg(long)]
    pub backup_to_s3: bool,
    /// 備份失敗時不刪除該檔案
    #[arg(long)]
    pub strict_backup: bool,
    /// 試跑；未指定 --destroy 時即為預設行為
    #[arg(long)]
    pub pretend: bool,
    /// 額外比對完整路徑的正規表示式
    #[arg(short = 'R', long)]
    pub regex_pattern: Option<String>,
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        RunMode::from_flags(self.destroy, self.backup_to_s3, self.restore_from_s3)
    }

    /// -V 至少開啟 debug 日誌
    pub fn effective_log_level(&self) -> &str {
        if self.very_verbose && matches!(self.log_level.as_str(), "error" | "warn" | "info") {
            "debug"
        } else {
            &self.log_level
        }
    }
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("目錄 '{}' 不存在", input),
        ));
    }
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' 不是目錄", input),
        ));
    }
    Ok(path)
}

pub fn validate_remote_args(mode: RunMode, bucket: Option<&str>) -> io::Result<()> {
    if mode.needs_remote() && bucket.map_or(true, |b| b.trim().is_empty()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "備份或還原需要 S3 bucket 名稱，請使用 '--s3-bucket' 參數",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["age_sweep"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn parses_positionals_and_flags() {
        let cli = parse(&["/tmp/logs", "*.log", "1Y", "-r", "-v", "-H", "-R", "app", "--destroy"]);
        assert_eq!(cli.directory, "/tmp/logs");
        assert_eq!(cli.glob_pattern, "*.log");
        assert_eq!(cli.cutoff_duration, "1Y");
        assert!(cli.recursive && cli.verbose && cli.human_readable && cli.destroy);
        assert_eq!(cli.regex_pattern.as_deref(), Some("app"));
        assert_eq!(cli.run_mode(), RunMode::Destroy);
    }

    #[test]
    fn very_verbose_raises_log_level() {
        let cli = parse(&[".", "*", "1D", "-V"]);
        assert_eq!(cli.effective_log_level(), "debug");
        let cli = parse(&[".", "*", "1D", "-V", "--log-level", "trace"]);
        assert_eq!(cli.effective_log_level(), "trace");
    }

    #[test]
    fn remote_modes_require_bucket() {
        assert!(validate_remote_args(RunMode::Backup, None).is_err());
        assert!(validate_remote_args(RunMode::Restore, Some("  ")).is_err());
        assert!(validate_remote_args(RunMode::Restore, Some("bucket")).is_ok());
        assert!(validate_remote_args(RunMode::Destroy, None).is_ok());
    }

    #[test]
    fn missing_directory_is_not_found() {
        let err = validate_input_path("/definitely/not/here/age_sweep").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

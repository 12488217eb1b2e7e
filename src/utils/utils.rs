use std::io;
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};
use log;

pub fn log_level_filter(log_level: &str) -> log::LevelFilter {
    match log_level {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    }
}

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    env_logger::Builder::new()
        .filter_level(log_level_filter(log_level))
        .format_timestamp(None)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

/// 掃描期間原地重繪的進度行
pub struct ProgressManager {
    pb: ProgressBar,
    hidden: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(hidden: bool) -> Self {
        let pb = if hidden {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            // 模板為常數，解析失敗時退回預設樣式
            let style = ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            pb.set_style(style);
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        };
        ProgressManager {
            pb,
            hidden,
            start: Instant::now(),
        }
    }

    pub fn update(&self, files_matched: u64, files_deleted: u64, directories_scanned: u64) {
        if self.hidden {
            return;
        }
        self.pb.set_message(format!(
            "Files matched: {} - Files deleted: {} - Directories scanned: {}",
            files_matched, files_deleted, directories_scanned
        ));
    }

    /// 在進度行上方輸出一行，不破壞進度顯示
    pub fn println(&self, line: &str) {
        if self.hidden {
            println!("{}", line);
        } else {
            self.pb.println(line);
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(&self) {
        if self.hidden {
            return;
        }
        self.pb.finish();
    }
}

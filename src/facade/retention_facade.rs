use std::fs;
use std::io;
use log::{debug, info};
use crate::config::ports::{AppConfig, RunMode};
use crate::facade::traits::i_retention::RetentionFacadeTrait;
use crate::models::scan::WalkEvent;
use crate::models::summary::RunSummary;
use crate::service::age::AgeClassifier;
use crate::service::dispatch::ActionDispatcher;
use crate::service::report::{render_header, Reporter};
use crate::service::scan::TreeWalker;
use crate::service::traits::i_service::RemoteStorage;

pub struct RetentionFacade {
    config: AppConfig,
    remote: Box<dyn RemoteStorage>,
}

impl RetentionFacade {
    pub fn new(config: AppConfig, remote: Box<dyn RemoteStorage>) -> Self {
        RetentionFacade { config, remote }
    }
}

impl RetentionFacadeTrait for RetentionFacade {
    fn execute_retention(&self) -> io::Result<RunSummary> {
        let config = &self.config;
        let reporter = Reporter::new(config);
        let dispatcher = ActionDispatcher::new(config, self.remote.as_ref());
        let root = &config.criteria.root;
        let display_root = fs::canonicalize(root).unwrap_or_else(|_| root.clone());
        println!("{}", render_header(config, &display_root));

        let mut summary = RunSummary::default();
        if config.mode == RunMode::Restore {
            info!("開始還原，目標目錄：{}，命名空間：{}", root.display(), dispatcher.namespace());
            dispatcher.restore_all(&mut summary, &reporter)?;
        } else {
            info!("開始掃描，目錄：{}，模式：{:?}，期間：{} 秒", root.display(), config.mode, config.cutoff_seconds);
            scan_tree(config, &dispatcher, &reporter, &mut summary);
        }

        summary.elapsed = reporter.elapsed();
        reporter.finish(&summary, config, dispatcher.namespace());
        Ok(summary)
    }
}

// 截止時間只在開始時計算一次
fn scan_tree(config: &AppConfig, dispatcher: &ActionDispatcher<'_>, reporter: &Reporter, summary: &mut RunSummary) {
    let classifier = AgeClassifier::starting_now(config.cutoff_seconds);
    for event in TreeWalker::new(&config.criteria).events() {
        match event {
            WalkEvent::Directory(path) => {
                summary.directories_scanned += 1;
                debug!("掃描目錄：{}", path.display());
            }
            WalkEvent::File { path, size, modified } => {
                let aged_out = classifier.is_aged_out(modified);
                let candidate = classifier.candidate(path, size, modified);
                if aged_out {
                    dispatcher.handle_aged(&candidate, summary, reporter);
                } else {
                    summary.files_too_recent += 1;
                    reporter.too_recent(&candidate);
                }
            }
        }
        reporter.progress(summary);
    }
}

use std::io;
use clap::Parser;
use log::{debug, warn};
use crate::action::interactive::{confirm_run, DialoguerPrompt};
use crate::config::config::{validate_input_path, validate_remote_args, Cli};
use crate::config::ports::{AppConfig, ConfigPort, RemoteConfig, RunMode};
use crate::service::traits::i_service::ConfirmPrompt;
use crate::facade::retention_facade::RetentionFacade;
use crate::facade::traits::i_retention::RetentionFacadeTrait;
use crate::models::scan::ScanCriteria;
use crate::models::summary::RunSummary;
use crate::service::config_service::ConfigService;
use crate::service::remote::create_remote_storage;
use crate::utils::duration::DurationSpec;
use crate::utils::utils::setup_logging;

/// 回傳 None 代表使用者在確認步驟中止
pub fn process_args(args: Vec<String>) -> io::Result<Option<RunSummary>> {
    let cli = Cli::parse_from(args);
    setup_logging(cli.effective_log_level())?;
    process_cli_mode(cli, &DialoguerPrompt)
}

pub fn process_cli_mode(cli: Cli, prompt: &dyn ConfirmPrompt) -> io::Result<Option<RunSummary>> {
    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;

    // 危險組合必須在任何 I/O 之前確認
    if !confirm_run(&config, prompt)? {
        return Ok(None);
    }

    let remote = create_remote_storage(&config)?;
    debug!("遠端儲存：{}", remote.backend_name());
    let facade: Box<dyn RetentionFacadeTrait> = Box::new(RetentionFacade::new(config, remote));
    facade.execute_retention().map(Some)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let cli = &self.cli;
        let mode = cli.run_mode();

        validate_remote_args(mode, cli.s3_bucket.as_deref())?;
        let criteria = ScanCriteria::new(
            &cli.directory,
            &cli.glob_pattern,
            cli.regex_pattern.as_deref(),
            cli.recursive,
        )?;
        validate_input_path(&cli.directory)?;

        let cutoff = DurationSpec::parse(&cli.cutoff_duration);
        if cutoff.is_empty() && mode != RunMode::Restore {
            warn!("期間 '{}' 沒有可辨識的片段，所有符合模式的檔案都會視為過期", cli.cutoff_duration);
        }
        if cli.s3_bucket.is_some() && !mode.needs_remote() {
            warn!("指定了 --s3-bucket 但未要求備份或還原，bucket 不會被使用");
        }
        if cli.strict_backup && mode != RunMode::BackupThenDestroy {
            debug!("--strict-backup 只在同時備份與刪除時生效");
        }
        if cli.pretend {
            debug!("--pretend 為預設行為，無額外效果");
        }

        Ok(AppConfig {
            cutoff_seconds: cutoff.total_seconds(),
            cutoff,
            criteria,
            mode,
            destroy_requested: cli.destroy,
            strict_backup: cli.strict_backup,
            verbose: cli.verbose,
            very_verbose: cli.very_verbose,
            human_readable: cli.human_readable,
            remote: RemoteConfig {
                bucket: cli.s3_bucket.clone(),
                region: cli.s3_region.clone(),
                endpoint: cli.s3_endpoint.clone(),
            },
        })
    }
}

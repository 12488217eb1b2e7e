use dialoguer::Confirm;
use std::io;
use log::info;
use crate::config::ports::AppConfig;
use crate::service::traits::i_service::ConfirmPrompt;

// 以 dialoguer 在終端機詢問使用者
pub struct DialoguerPrompt;

impl ConfirmPrompt for DialoguerPrompt {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("確認輸入失敗: {}", e)))
    }
}

/// 同時指定刪除與還原時要求確認；拒絕則整次執行中止
pub fn confirm_run(config: &AppConfig, prompt: &dyn ConfirmPrompt) -> io::Result<bool> {
    if !config.needs_confirmation() {
        return Ok(true);
    }
    let confirmed = prompt.confirm(
        "Both --destroy and --restore-from-s3 are set. Restoring will overwrite local files. Continue?",
    )?;
    if !confirmed {
        info!("使用者取消執行");
        println!("Aborted: no changes were made.");
    }
    Ok(confirmed)
}

use std::io;

use age_sweep::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args)? {
        Some(summary) => {
            log::info!(
                "執行完成：符合 {} 個檔案，刪除 {} 個，掃描 {} 個目錄",
                summary.files_matched, summary.files_deleted, summary.directories_scanned
            );
            if summary.has_failures() {
                log::warn!(
                    "部分遠端或刪除操作失敗：上傳 {}，刪除 {}，還原 {}",
                    summary.upload_failures, summary.delete_failures, summary.restore_failures
                );
            }
        }
        None => log::info!("已中止，未進行任何變更"),
    }
    Ok(())
}

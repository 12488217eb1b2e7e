use std::io;
use crate::models::summary::RunSummary;

// Facade 接口，負責協調一次完整的保留期間掃描
pub trait RetentionFacadeTrait {
    /// 執行掃描或還原
    /// # 回傳
    /// - 成功時返回本次執行的統計，致命錯誤時返回 IO 錯誤
    fn execute_retention(&self) -> io::Result<RunSummary>;
}

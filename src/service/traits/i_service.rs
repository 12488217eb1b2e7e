use std::io;
use std::path::Path;
use crate::models::remote::ObjectMetadata;

// 遠端物件儲存接口，負責備份與還原的實際傳輸
pub trait RemoteStorage: Send + Sync {
    /// 上傳本地檔案
    /// # 參數
    /// - local_path: 本地檔案路徑
    /// - bucket / key: 目標位置
    /// - metadata: 附加於物件的原始修改時間
    fn upload(&self, local_path: &Path, bucket: &str, key: &str, metadata: &ObjectMetadata) -> io::Result<()>;

    /// 下載物件至本地路徑，回傳物件附帶的 metadata
    fn download(&self, bucket: &str, key: &str, local_path: &Path) -> io::Result<ObjectMetadata>;

    /// 列出前綴下所有物件的 key
    fn list_objects(&self, bucket: &str, prefix: &str) -> io::Result<Vec<String>>;

    fn backend_name(&self) -> &'static str;
}

// 確認互動接口，讓危險組合在任何 I/O 之前可被中止
pub trait ConfirmPrompt {
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

use std::io;
use std::path::{Component, Path, PathBuf};
use crate::config::ports::AppConfig;
use crate::models::remote::ObjectMetadata;
use crate::service::traits::i_service::RemoteStorage;

/// 未要求遠端操作時使用；任何呼叫都回傳錯誤
pub struct UnavailableRemote;

impl UnavailableRemote {
    fn error() -> io::Error {
        io::Error::new(io::ErrorKind::Unsupported, "未設定遠端儲存")
    }
}

impl RemoteStorage for UnavailableRemote {
    fn upload(&self, _local_path: &Path, _bucket: &str, _key: &str, _metadata: &ObjectMetadata) -> io::Result<()> {
        Err(Self::error())
    }

    fn download(&self, _bucket: &str, _key: &str, _local_path: &Path) -> io::Result<ObjectMetadata> {
        Err(Self::error())
    }

    fn list_objects(&self, _bucket: &str, _prefix: &str) -> io::Result<Vec<String>> {
        Err(Self::error())
    }

    fn backend_name(&self) -> &'static str {
        "unavailable"
    }
}

/// 依執行模式建立遠端儲存；不需要時回傳 UnavailableRemote
pub fn create_remote_storage(config: &AppConfig) -> io::Result<Box<dyn RemoteStorage>> {
    if !config.mode.needs_remote() {
        return Ok(Box::new(UnavailableRemote));
    }
    #[cfg(feature = "s3")]
    {
        let storage = crate::service::s3::S3RemoteStorage::new(&config.remote)?;
        Ok(Box::new(storage))
    }
    #[cfg(not(feature = "s3"))]
    {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "此版本未啟用 s3 功能，無法備份或還原",
        ))
    }
}

/// 將本地根目錄正規化為遠端命名空間前綴，例如 `./var/log/` -> `var/log`
pub fn namespace_prefix(root: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in root.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                if parts.last().map_or(true, |last| last == "..") {
                    parts.push("..".to_string());
                } else {
                    parts.pop();
                }
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    parts.join("/")
}

/// 列舉時使用的前綴，避免 `var/log` 誤含 `var/log2`
pub fn listing_prefix(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("{}/", namespace)
    }
}

/// 檔案在遠端的 key：命名空間加上相對於根目錄的路徑
pub fn object_key(namespace: &str, root: &Path, file_path: &Path) -> String {
    let relative = pathdiff::diff_paths(file_path, root).unwrap_or_else(|| file_path.to_path_buf());
    let relative = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    format!("{}{}", listing_prefix(namespace), relative)
}

/// 由 key 去掉命名空間前綴還原本地路徑；會跳出根目錄的 key 回傳 None
pub fn restore_path(namespace: &str, root: &Path, key: &str) -> Option<PathBuf> {
    let relative = key.strip_prefix(&listing_prefix(namespace))?;
    if relative.is_empty() || relative.ends_with('/') {
        return None;
    }
    let relative = Path::new(relative);
    if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_is_normalised() {
        assert_eq!(namespace_prefix(Path::new("/var/log/")), "var/log");
        assert_eq!(namespace_prefix(Path::new("./data/./logs")), "data/logs");
        assert_eq!(namespace_prefix(Path::new("data/tmp/../logs")), "data/logs");
        assert_eq!(namespace_prefix(Path::new("../shared")), "../shared");
        assert_eq!(namespace_prefix(Path::new(".")), "");
    }

    #[test]
    fn keys_mirror_relative_structure() {
        let root = Path::new("/var/log");
        let key = object_key("var/log", root, Path::new("/var/log/nginx/access.log"));
        assert_eq!(key, "var/log/nginx/access.log");
        assert_eq!(object_key("", Path::new("."), Path::new("./a.log")), "a.log");
    }

    #[test]
    fn restore_strips_namespace() {
        let root = Path::new("/srv/restore");
        assert_eq!(
            restore_path("var/log", root, "var/log/nginx/access.log"),
            Some(PathBuf::from("/srv/restore/nginx/access.log"))
        );
    }

    #[test]
    fn restore_rejects_escapes_and_markers() {
        let root = Path::new("/srv");
        assert_eq!(restore_path("ns", root, "ns/../../etc/passwd"), None);
        assert_eq!(restore_path("ns", root, "ns/dir/"), None);
        assert_eq!(restore_path("ns", root, "other/file"), None);
        assert_eq!(restore_path("ns", root, "ns2/file"), None);
    }

    #[test]
    fn unavailable_remote_refuses_everything() {
        let remote = UnavailableRemote;
        assert_eq!(
            remote.list_objects("b", "p").unwrap_err().kind(),
            io::ErrorKind::Unsupported
        );
        assert_eq!(remote.backend_name(), "unavailable");
    }
}

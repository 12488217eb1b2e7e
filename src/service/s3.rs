use std::fs;
use std::io;
use std::path::Path;
use aws_sdk_s3::primitives::ByteStream;
use log::{debug, error, info};
use tokio::runtime::Runtime;
use crate::config::ports::RemoteConfig;
use crate::models::remote::{ObjectMetadata, LAST_MODIFIED_KEY};
use crate::service::traits::i_service::RemoteStorage;

fn s3_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, e))
}

/// S3 相容物件儲存；內部持有單執行緒 runtime，每次呼叫皆同步等待完成
pub struct S3RemoteStorage {
    runtime: Runtime,
    client: aws_sdk_s3::Client,
}

impl S3RemoteStorage {
    pub fn new(config: &RemoteConfig) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let client = runtime.block_on(async {
            let mut sdk_config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = &config.region {
                sdk_config_builder = sdk_config_builder.region(aws_config::Region::new(region.clone()));
            }
            let sdk_config = sdk_config_builder.load().await;

            let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&sdk_config);
            if let Some(endpoint) = &config.endpoint {
                // 自訂端點（MinIO 等）通常需要 path-style 位址
                s3_config_builder = s3_config_builder.endpoint_url(endpoint).force_path_style(true);
            }
            aws_sdk_s3::Client::from_conf(s3_config_builder.build())
        });

        info!("初始化 S3 儲存，區域：{:?}，端點：{:?}", config.region, config.endpoint);
        Ok(S3RemoteStorage { runtime, client })
    }
}

impl RemoteStorage for S3RemoteStorage {
    fn upload(&self, local_path: &Path, bucket: &str, key: &str, metadata: &ObjectMetadata) -> io::Result<()> {
        self.runtime.block_on(async {
            let body = ByteStream::from_path(local_path)
                .await
                .map_err(|e| s3_error("讀取本地檔案失敗", e))?;

            let mut request = self.client.put_object().bucket(bucket).key(key).body(body);
            if let Some(value) = metadata.last_modified_value() {
                request = request.metadata(LAST_MODIFIED_KEY, value);
            }

            request.send().await.map_err(|e| {
                error!("上傳至 S3 失敗：{}：{}", key, e);
                s3_error("上傳至 S3 失敗", e)
            })?;
            debug!("已上傳 '{}' 至 bucket '{}'，key '{}'", local_path.display(), bucket, key);
            Ok::<(), io::Error>(())
        })
    }

    fn download(&self, bucket: &str, key: &str, local_path: &Path) -> io::Result<ObjectMetadata> {
        self.runtime.block_on(async {
            let output = self
                .client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| {
                    error!("自 S3 下載失敗：{}：{}", key, e);
                    s3_error("自 S3 下載失敗", e)
                })?;

            let metadata = output
                .metadata()
                .and_then(|m| m.get(LAST_MODIFIED_KEY))
                .map(|value| ObjectMetadata::from_last_modified_value(value))
                .unwrap_or_default();

            let content = output
                .body
                .collect()
                .await
                .map_err(|e| s3_error("讀取 S3 回應內容失敗", e))?
                .into_bytes();

            fs::write(local_path, &content)?;
            debug!("已下載 bucket '{}' 的 key '{}' 至 '{}'", bucket, key, local_path.display());
            Ok::<ObjectMetadata, io::Error>(metadata)
        })
    }

    fn list_objects(&self, bucket: &str, prefix: &str) -> io::Result<Vec<String>> {
        self.runtime.block_on(async {
            let mut keys = Vec::new();
            let mut continuation_token: Option<String> = None;
            loop {
                let response = self
                    .client
                    .list_objects_v2()
                    .bucket(bucket)
                    .prefix(prefix)
                    .set_continuation_token(continuation_token.take())
                    .send()
                    .await
                    .map_err(|e| s3_error("列出 S3 物件失敗", e))?;

                keys.extend(response.contents().iter().filter_map(|obj| obj.key().map(String::from)));

                if response.is_truncated() == Some(true) {
                    continuation_token = response.next_continuation_token().map(String::from);
                    if continuation_token.is_none() {
                        break;
                    }
                } else {
                    break;
                }
            }
            debug!("bucket '{}' 前綴 '{}' 下共 {} 個物件", bucket, prefix, keys.len());
            Ok::<Vec<String>, io::Error>(keys)
        })
    }

    fn backend_name(&self) -> &'static str {
        "s3"
    }
}

//! 上传编排 / upload orchestration
//!
//! 逐张顺序上传，任一抛出的错误中止整批并发出一条通知；非200状态只跳过
//! 当前图片 / images upload sequentially; a raised error aborts the whole
//! batch with a single notification while a non-200 status only skips the
//! current image

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;

use crate::config::{ConfigProvider, ObsConfig, CONFIG_KEY};
use crate::request::build_upload_request;
use crate::types::{HttpRequest, HttpResponse, ImageRecord, Notification};
use crate::utils::date_path;

/// HTTP传输层 / HTTP transport collaborator
#[async_trait]
pub trait Transport: Send + Sync {
    /// 发送一次请求 / dispatch a single request
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// 基于reqwest的默认传输层 / default transport backed by reqwest
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|e| anyhow!("无效的HTTP方法 {}: {}", method, e))?;

        let mut builder = self.client.request(method, url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(body)
            .send()
            .await
            .map_err(|e| anyhow!("OBS请求失败: {}", e))?;

        Ok(HttpResponse {
            status_code: response.status().as_u16(),
        })
    }
}

/// 通知接收方，向用户展示失败信息 / notification sink for user-facing failures
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 默认通知器，写入日志 / default notifier backed by tracing
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::error!("{}: {}", notification.title, notification.body);
    }
}

/// OBS上传器 / OBS uploader
pub struct ObsUploader {
    config: ObsConfig,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for ObsUploader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObsUploader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ObsUploader {
    /// 使用默认协作方创建 / create with the default collaborators
    pub fn new(config: ObsConfig) -> Self {
        Self::with_collaborators(config, Arc::new(ReqwestTransport::new()), Arc::new(LogNotifier))
    }

    /// 注入自定义传输层与通知器 / inject custom transport and notifier
    pub fn with_collaborators(
        config: ObsConfig,
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            transport,
            notifier,
        }
    }

    /// 从宿主配置存储读取配置并创建 / build from the host configuration store
    ///
    /// 配置缺失是硬错误，直接返回给调用方而不发通知 / a missing config is a
    /// hard error returned to the caller, not a notification
    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self> {
        let value = provider
            .get_config(CONFIG_KEY)
            .ok_or_else(|| anyhow!("找不到华为OBS图床配置文件"))?;
        Ok(Self::new(ObsConfig::from_value(value)?))
    }

    pub fn config(&self) -> &ObsConfig {
        &self.config
    }

    /// 上传全部图片，就地更新记录 / upload all images, mutating records in place
    pub async fn upload_all(&self, images: &mut [ImageRecord]) {
        if let Err(err) = self.try_upload_all(images).await {
            tracing::error!("OBS上传中止: {}", err);
            self.notifier.notify(Notification {
                title: "上传失败！".to_string(),
                body: err.to_string(),
            });
        }
    }

    async fn try_upload_all(&self, images: &mut [ImageRecord]) -> Result<()> {
        for img in images.iter_mut() {
            // 缺少文件名或内容的记录跳过不动 / records without a name or
            // content are left untouched
            if img.file_name.is_empty() {
                continue;
            }
            let body = match resolve_content(img)? {
                Some(body) => body,
                None => continue,
            };

            let request = build_upload_request(&self.config, &img.file_name, body)?;
            tracing::debug!("上传OBS对象: {} -> {}", img.file_name, request.url);

            let response = self.transport.request(request).await?;
            if response.status_code == 200 {
                img.base64_image = None;
                img.buffer = None;

                let url = self.public_url(&img.file_name);
                img.url = Some(url.clone());
                img.img_url = Some(if self.config.image_process.is_empty() {
                    url
                } else {
                    format!("{}{}", url, self.config.image_process)
                });
            } else {
                // 非200不算错误，跳过该图继续下一张 / non-200 is not an
                // error, skip this image and continue
                tracing::warn!(
                    "OBS返回状态{}，跳过: {}",
                    response.status_code,
                    img.file_name
                );
            }
        }
        Ok(())
    }

    /// 上传成功后的公开访问地址，不做URL编码 / public URL after upload, unencoded
    fn public_url(&self, file_name: &str) -> String {
        let config = &self.config;
        let domain = if config.custom_domain.is_empty() {
            format!("https://{}.{}", config.bucket_name, config.endpoint)
        } else {
            config.custom_domain.clone()
        };
        let path = if config.path.is_empty() {
            String::new()
        } else {
            format!("/{}", config.path)
        };
        format!(
            "{}{}{}/{}",
            domain,
            path,
            date_path(config.is_auto_archive),
            file_name
        )
    }
}

/// 解析图片内容：优先buffer，缺失时解码base64 / resolve content: prefer the
/// buffer, fall back to decoding base64
fn resolve_content(img: &ImageRecord) -> Result<Option<Bytes>> {
    if let Some(ref buffer) = img.buffer {
        return Ok(Some(buffer.clone()));
    }
    match img.base64_image {
        Some(ref b64) if !b64.is_empty() => {
            let bytes = BASE64
                .decode(b64.as_bytes())
                .map_err(|e| anyhow!("base64图片数据解码失败: {}", e))?;
            Ok(Some(Bytes::from(bytes)))
        }
        _ => Ok(None),
    }
}

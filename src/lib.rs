//! 华为云OBS图床上传核心 / Huawei Cloud OBS image uploader core
//!
//! 计算OBS请求签名并通过HTTP PUT逐张上传图片 / computes the OBS request
//! signature and uploads images one by one over HTTP PUT

pub mod config;
pub mod factory;
pub mod request;
pub mod signer;
pub mod types;
pub mod uploader;
pub mod utils;

pub use config::{ConfigProvider, ObsConfig, CONFIG_KEY};
pub use factory::{ConfigItem, ObsUploaderFactory};
pub use request::build_upload_request;
pub use types::{HttpRequest, HttpResponse, ImageRecord, Notification};
pub use uploader::{LogNotifier, Notifier, ObsUploader, ReqwestTransport, Transport};

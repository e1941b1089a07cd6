//! 数据类型定义 / data types

use std::collections::HashMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// 待上传的图片记录 / pending image record
///
/// 由宿主管道创建，上传成功后就地更新：清空图片内容并写入公开地址 /
/// created by the host pipeline and mutated in place; on success the
/// content fields are cleared and the public URLs filled in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRecord {
    /// 文件名 / file name
    pub file_name: String,
    /// 原始图片数据 / raw image bytes
    #[serde(skip)]
    pub buffer: Option<Bytes>,
    /// base64编码的图片数据，buffer缺失时解码使用 / base64 fallback content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_image: Option<String>,
    /// 上传后的公开地址 / public URL after upload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 展示地址，带图片处理后缀 / display URL, carries the image process suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

/// 与传输层解耦的HTTP请求 / transport-neutral HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

/// HTTP响应，上传只关心状态码 / HTTP response, only the status matters here
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
}

/// 用户通知 / user-facing notification
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

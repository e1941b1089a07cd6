//! 上传请求组装 / upload request composition

use std::collections::HashMap;

use anyhow::Result;
use bytes::Bytes;

use crate::config::ObsConfig;
use crate::signer::{generate_signature, object_path, resolve_mime_type};
use crate::types::HttpRequest;
use crate::utils::http_date;

/// 组装带签名的PUT上传请求 / compose the signed PUT request
///
/// 日期与对象路径只生成一次，签名和请求头共用，跨秒也不会错位 / the date and
/// object path are produced once and shared between signature and headers,
/// so a second boundary cannot desynchronize them
pub fn build_upload_request(
    config: &ObsConfig,
    file_name: &str,
    body: Bytes,
) -> Result<HttpRequest> {
    let mime_type = resolve_mime_type(file_name)?;
    let date = http_date();
    let path = object_path(config, file_name);
    let signature = generate_signature(config, &path, &mime_type, &date)?;

    let mut headers = HashMap::new();
    headers.insert("Authorization".to_string(), signature);
    headers.insert("Date".to_string(), date);
    headers.insert("content-type".to_string(), mime_type);

    Ok(HttpRequest {
        method: "PUT".to_string(),
        url: format!("https://{}.{}{}", config.bucket_name, config.endpoint, path),
        headers,
        body,
    })
}

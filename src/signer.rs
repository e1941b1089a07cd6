//! OBS请求签名 / OBS request signing
//!
//! 待签名串的布局必须与OBS服务端逐字节一致，否则上传会被拒绝 / the
//! string-to-sign layout must match the service byte for byte or the
//! upload is rejected

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::config::ObsConfig;
use crate::utils::{date_path, encode_uri};

type HmacSha1 = Hmac<Sha1>;

/// 根据文件扩展名解析MIME类型 / resolve the MIME type from the file extension
pub fn resolve_mime_type(file_name: &str) -> Result<String> {
    mime_guess::from_path(file_name)
        .first_raw()
        .map(|m| m.to_string())
        .ok_or_else(|| anyhow!("No mime type found for file {}", file_name))
}

/// 对象在桶内的路径，签名与请求URL共用同一份 / object path inside the bucket,
/// shared by the signature and the request URL so the two cannot drift
pub fn object_path(config: &ObsConfig, file_name: &str) -> String {
    let mut path = String::new();
    if !config.path.is_empty() {
        path.push('/');
        path.push_str(&encode_uri(&config.path));
    }
    path.push_str(&date_path(config.is_auto_archive));
    path.push('/');
    path.push_str(&encode_uri(file_name));
    path
}

/// 生成OBS Authorization签名 / generate the OBS Authorization signature
pub fn generate_signature(
    config: &ObsConfig,
    object_path: &str,
    mime_type: &str,
    date: &str,
) -> Result<String> {
    // Content-MD5留空，因此mimeType前是连续两个换行 / the Content-MD5 field is
    // blank, hence the doubled newline before the MIME type
    let str_to_sign = format!(
        "PUT\n\n{}\n{}\n/{}{}",
        mime_type, date, config.bucket_name, object_path
    );

    let mut mac = HmacSha1::new_from_slice(config.access_key_secret.as_bytes())
        .map_err(|e| anyhow!("HMAC密钥无效: {}", e))?;
    mac.update(str_to_sign.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    Ok(format!("OBS {}:{}", config.access_key_id, signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ObsConfig {
        ObsConfig {
            access_key_id: "XLHAFIDTRNX8SD6GYF1K".to_string(),
            access_key_secret: "JuVs00Hua1YEDtJpEGaoOetYun3CFengXvjVbts4".to_string(),
            bucket_name: "bucket01".to_string(),
            endpoint: "obs.cn-south-1.myhuaweicloud.com".to_string(),
            path: "img".to_string(),
            image_process: String::new(),
            custom_domain: String::new(),
            is_auto_archive: false,
        }
    }

    const DATE: &str = "Tue, 05 Mar 2024 12:00:00 GMT";

    #[test]
    fn test_resolve_mime_type() {
        assert_eq!(resolve_mime_type("a.png").unwrap(), "image/png");
        assert_eq!(resolve_mime_type("pic.jpg").unwrap(), "image/jpeg");
        assert_eq!(resolve_mime_type("anim.gif").unwrap(), "image/gif");
    }

    #[test]
    fn test_resolve_mime_type_unknown_extension() {
        let err = resolve_mime_type("file.unknownext").unwrap_err();
        assert!(err.to_string().contains("No mime type found"));
    }

    #[test]
    fn test_object_path_with_prefix() {
        let config = test_config();
        assert_eq!(object_path(&config, "a.png"), "/img/a.png");
    }

    #[test]
    fn test_object_path_without_prefix() {
        let mut config = test_config();
        config.path = String::new();
        // path为空时不产生空路径段 / no empty segment when path is unset
        assert_eq!(object_path(&config, "a.png"), "/a.png");
    }

    #[test]
    fn test_object_path_multi_segment_prefix() {
        let mut config = test_config();
        config.path = "img/github".to_string();
        assert_eq!(object_path(&config, "a.png"), "/img/github/a.png");
    }

    #[test]
    fn test_object_path_encodes_file_name() {
        let config = test_config();
        assert_eq!(
            object_path(&config, "截图.png"),
            "/img/%E6%88%AA%E5%9B%BE.png"
        );
    }

    #[test]
    fn test_signature_known_vector() {
        let config = test_config();
        let path = object_path(&config, "a.png");
        let signature = generate_signature(&config, &path, "image/png", DATE).unwrap();
        assert_eq!(
            signature,
            "OBS XLHAFIDTRNX8SD6GYF1K:OxT76IP7Wt60rp4cwq1tSCupEJo="
        );
    }

    #[test]
    fn test_signature_deterministic_for_fixed_date() {
        let config = test_config();
        let path = object_path(&config, "a.png");
        let first = generate_signature(&config, &path, "image/png", DATE).unwrap();
        let second = generate_signature(&config, &path, "image/png", DATE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_signature_changes_with_inputs() {
        let config = test_config();
        let path = object_path(&config, "a.png");
        let base = generate_signature(&config, &path, "image/png", DATE).unwrap();

        let mut other = test_config();
        other.access_key_secret = "another-secret".to_string();
        assert_ne!(
            generate_signature(&other, &path, "image/png", DATE).unwrap(),
            base
        );

        let mut other = test_config();
        other.bucket_name = "bucket02".to_string();
        assert_ne!(
            generate_signature(&other, &path, "image/png", DATE).unwrap(),
            base
        );

        let other_path = object_path(&config, "b.png");
        assert_ne!(
            generate_signature(&config, &other_path, "image/png", DATE).unwrap(),
            base
        );

        assert_ne!(
            generate_signature(&config, &path, "image/jpeg", DATE).unwrap(),
            base
        );
    }
}

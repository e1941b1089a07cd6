//! OBS图床配置 / OBS uploader configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 宿主配置存储中的键名 / config key in the host configuration store
pub const CONFIG_KEY: &str = "picBed.huawei-obs-upload";

/// OBS图床配置 / OBS uploader configuration
///
/// 宿主以JSON存储，字段为小驼峰 / stored by the host as camelCase JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObsConfig {
    /// Access Key ID
    pub access_key_id: String,
    /// Access Key Secret
    pub access_key_secret: String,
    /// 桶名称 / bucket name
    pub bucket_name: String,
    /// 端点，例如obs.cn-south-1.myhuaweicloud.com / endpoint host suffix
    pub endpoint: String,
    /// 桶内存储路径，例如img或img/github，空串视为未设置 / optional path
    /// prefix inside the bucket, empty means unset
    #[serde(default)]
    pub path: String,
    /// 图片处理后缀，例如?x-image-process=image/resize,p_100 / optional URL suffix
    #[serde(default)]
    pub image_process: String,
    /// 自定义域名，例如https://mydomain.com / optional custom domain override
    #[serde(default)]
    pub custom_domain: String,
    /// 自动归档：按当天日期目录存放 / archive uploads under date directories
    #[serde(default, deserialize_with = "truthy")]
    pub is_auto_archive: bool,
}

/// 宿主存储的开关值可能是bool、空串或缺失，按JS真值规则处理 / the host may
/// store the toggle as bool, empty string or nothing; apply JS truthiness
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        _ => false,
    })
}

impl ObsConfig {
    /// 从宿主提供的JSON配置构建并校验 / build from host JSON and validate
    pub fn from_value(value: Value) -> Result<Self> {
        let config: ObsConfig =
            serde_json::from_value(value).map_err(|e| anyhow!("OBS配置解析失败: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验必填项非空 / required fields must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(anyhow!("accessKeyId不能为空"));
        }
        if self.access_key_secret.is_empty() {
            return Err(anyhow!("accessKeySecret不能为空"));
        }
        if self.bucket_name.is_empty() {
            return Err(anyhow!("bucketName不能为空"));
        }
        if self.endpoint.is_empty() {
            return Err(anyhow!("endpoint不能为空"));
        }
        Ok(())
    }
}

/// 配置提供者，由宿主实现 / configuration provider capability implemented by the host
pub trait ConfigProvider: Send + Sync {
    /// 按键名读取一段配置 / read one config section by key
    fn get_config(&self, key: &str) -> Option<Value>;
}

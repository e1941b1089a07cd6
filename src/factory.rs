//! 上传器注册工厂 / uploader registration factory
//!
//! 宿主通过工厂拿到类型标识、配置表单和上传器实例 / the host obtains the
//! type id, the configuration form and uploader instances through the
//! factory

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::config::ObsConfig;
use crate::uploader::ObsUploader;

/// 配置表单项 / configuration form item
#[derive(Debug, Clone, Serialize)]
pub struct ConfigItem {
    /// 配置键名 / config key
    pub name: String,
    /// 表单类型: input/password/confirm / form control kind
    pub kind: String,
    /// 显示名称 / display alias
    pub alias: String,
    /// 提示信息 / prompt message
    pub message: String,
    /// 是否必填 / required
    pub required: bool,
}

impl ConfigItem {
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            alias: String::new(),
            message: String::new(),
            required: false,
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = alias.to_string();
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// 华为云OBS上传器工厂 / Huawei Cloud OBS uploader factory
pub struct ObsUploaderFactory;

impl ObsUploaderFactory {
    /// 上传器类型标识 / uploader type id
    pub fn uploader_type(&self) -> &'static str {
        "huawei-obs-upload"
    }

    /// 显示名称 / display name
    pub fn display_name(&self) -> &'static str {
        "华为云OBS"
    }

    /// 配置表单 / configuration form
    pub fn config_items(&self) -> Vec<ConfigItem> {
        vec![
            ConfigItem::new("accessKeyId", "input")
                .alias("AccessKeyId")
                .message("例如XLHAFIDTRNX8SD6GYF1K")
                .required(),
            ConfigItem::new("accessKeySecret", "password")
                .alias("AccessKeySecret")
                .message("例如JuVs00Hua1YEDtJpEGaoOetYun3CFengXvjVbts4")
                .required(),
            ConfigItem::new("bucketName", "input")
                .alias("桶名称")
                .message("例如bucket01")
                .required(),
            ConfigItem::new("endpoint", "input")
                .alias("EndPoint")
                .message("例如obs.cn-south-1.myhuaweicloud.com")
                .required(),
            ConfigItem::new("path", "input")
                .alias("存储路径")
                .message("在桶中存储的路径，例如img或img/github"),
            ConfigItem::new("imageProcess", "input")
                .alias("网址后缀")
                .message("例如?x-image-process=image/resize,p_100"),
            ConfigItem::new("customDomain", "input")
                .alias("自定义域名")
                .message("例如https://mydomain.com"),
            ConfigItem::new("isAutoArchive", "confirm")
                .alias("自动归档")
                .message("将上传文件存放到当天日期的目录下"),
        ]
    }

    /// 从宿主JSON配置创建上传器 / create an uploader from host JSON config
    pub fn create_uploader(&self, config: Value) -> Result<ObsUploader> {
        Ok(ObsUploader::new(ObsConfig::from_value(config)?))
    }
}

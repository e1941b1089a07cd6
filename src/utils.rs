//! 工具函数 / utility functions

use chrono::{Datelike, Local, NaiveDate, Utc};

/// URL编码(类似JavaScript的encodeURI) / URL encode like JavaScript's encodeURI
///
/// 只编码路径中不允许出现的字符，`/`等URI保留字符原样保留，多级路径不会被破坏 /
/// URI-reserved characters such as `/` stay literal so multi-segment paths
/// survive encoding
pub fn encode_uri(s: &str) -> String {
    let encoded = urlencoding::encode(s).to_string();
    encoded
        .replace("%21", "!")
        .replace("%23", "#")
        .replace("%24", "$")
        .replace("%26", "&")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
        .replace("%2B", "+")
        .replace("%2C", ",")
        .replace("%2F", "/")
        .replace("%3A", ":")
        .replace("%3B", ";")
        .replace("%3D", "=")
        .replace("%3F", "?")
        .replace("%40", "@")
}

/// 获取HTTP日期字符串 / get HTTP date string (RFC 1123, GMT)
pub fn http_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// 自动归档日期路径 / date path for auto archive
///
/// 关闭时返回空串，开启时按本地日期返回 /YYYY/MM/DD / empty when off,
/// otherwise /YYYY/MM/DD from the local wall-clock date
pub fn date_path(is_auto_archive: bool) -> String {
    if !is_auto_archive {
        return String::new();
    }
    date_path_for(Local::now().date_naive())
}

/// 按给定日期生成日期路径段 / build the date path segment for a given date
pub fn date_path_for(date: NaiveDate) -> String {
    format!("/{}/{:02}/{:02}", date.year(), date.month(), date.day())
}

//! 响应头映射：键在构造时统一小写，查找不区分大小写。

use std::collections::HashMap;

use thiserror::Error;

/// 必需的响应头缺失或无法解析时的错误。
#[derive(Debug, Clone, Error)]
#[error("缺少或无法解析响应头: {0}")]
pub struct HeaderNotFound(pub String);

/// 已小写化键的响应头映射。
///
/// 本层所有响应头查找都先把键转成小写再比较，构造时一次性完成。
#[derive(Debug, Clone, Default)]
pub struct ResponseHead {
    fields: HashMap<String, String>,
}

impl ResponseHead {
    /// 从任意大小写的键值对构造；同名键保留最后一个。
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self { fields }
    }

    /// 按名查找（入参大小写不敏感）。
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// 必需头查找；缺失时返回 [`HeaderNotFound`]。
    pub fn require(&self, name: &str) -> Result<&str, HeaderNotFound> {
        self.get(name).ok_or_else(|| HeaderNotFound(name.to_string()))
    }

    /// 必需头按十进制整数解析；缺失或非数字都算 [`HeaderNotFound`]。
    pub fn require_u64(&self, name: &str) -> Result<u64, HeaderNotFound> {
        self.require(name)?
            .trim()
            .parse::<u64>()
            .map_err(|_| HeaderNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

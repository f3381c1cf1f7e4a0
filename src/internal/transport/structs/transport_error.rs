//! 传输层错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// 发起任何 I/O 之前就被拒绝的 URL（仅支持 http/https）。
    #[error("无效的 URL（仅支持 http/https）: {0}")]
    InvalidUrl(String),

    /// 网络或 HTTP 层失败（含非成功状态码），不在本层重试。
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 响应体不是合法 UTF-8（仅 get/post 文本助手会触发）。
    #[error("响应体解码失败: {0}")]
    BodyDecode(#[from] std::string::FromUtf8Error),

    /// 请求体 JSON 编码失败（仅 post 助手会触发）。
    #[error("请求体编码失败: {0}")]
    BodyEncode(#[from] serde_json::Error),
}

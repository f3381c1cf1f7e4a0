//! 流式下载与大小解析的错误类型。

use thiserror::Error;

use crate::internal::transport::structs::response_head::HeaderNotFound;
use crate::internal::transport::structs::transport_error::TransportError;

#[derive(Debug, Error)]
pub enum StreamError {
    /// 传输层失败，原样上抛，本层不重试。
    #[error("传输失败: {0}")]
    Transport(#[from] TransportError),

    #[error("URL 解析失败: {0}")]
    Url(#[from] url::ParseError),

    /// 必需响应头缺失或无法解析（filesize 的 content-length 走这里，致命）。
    #[error(transparent)]
    HeaderNotFound(#[from] HeaderNotFound),

    /// 第 0 段正文里找不到 Segment-Count 标记，没有回退，直接上抛。
    #[error("第 0 段正文中找不到 Segment-Count 标记")]
    SegmentHeaderNotFound,

    /// 分段总数在一次调用内只允许解析一次，重复解析需重新拉取第 0 段。
    #[error("分段总数已解析过")]
    SegmentCountAlreadyResolved,
}

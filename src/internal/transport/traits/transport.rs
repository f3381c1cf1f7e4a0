//! 传输层 trait：执行单次 HTTP 请求的接口，供流式下载与大小解析调用。
//!
//! 调用方只依赖本接口，不接触具体 HTTP 客户端；生产实现见
//! [`crate::transport::HttpTransport`]，测试中可注入脚本化实现。

use async_trait::async_trait;
use bytes::Bytes;

use crate::internal::transport::enums::Method;
use crate::internal::transport::structs::response_head::ResponseHead;
use crate::internal::transport::structs::transport_error::TransportError;

/// 单次请求的全部输入。
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub method: Method,
    /// 追加的请求头；与实现方的基础请求头合并，同名时以此处为准。
    pub headers: Vec<(String, String)>,
    /// 可选请求体，POST 时使用。
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// 追加一个请求头（可链式多次调用）。
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// 单次请求的响应：状态码、已小写化的响应头、可拉取的正文。
pub struct TransportResponse {
    pub status: u16,
    pub head: ResponseHead,
    pub body: Box<dyn ResponseBody>,
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("head", &self.head)
            .field("body", &"<dyn ResponseBody>")
            .finish()
    }
}

/// 执行单次 HTTP 请求。
///
/// 实现方约定：
/// - 必须在发起任何 I/O 之前拒绝非 HTTP(S) 的 URL；
/// - 不做重试，网络或状态码失败原样上抛。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// 可拉取的响应正文：按调用方给定的块大小读取。
#[async_trait]
pub trait ResponseBody: Send {
    /// 读取至多 `size` 字节；除响应末尾的短块外应填满 `size`。
    /// 仅在正文结束时返回空 [`Bytes`]，此后的调用恒返回空。
    async fn read_chunk(&mut self, size: usize) -> Result<Bytes, TransportError>;
}

//! 传输层生产实现：基于 reqwest 的单请求执行器。
//!
//! 媒体后端对 UA 有风控，基础请求头带浏览器 User-Agent（池内轮换）与
//! `accept-language`；调用方传入的同名请求头覆盖基础值。

use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};
use url::Url;

use crate::internal::transport::structs::response_head::ResponseHead;
use crate::internal::transport::structs::transport_error::TransportError;
use crate::internal::transport::traits::transport::{
    ResponseBody, Transport, TransportRequest, TransportResponse,
};

/// 轮换使用的浏览器 User-Agent 池。
const USER_AGENTS: &[&str] = &[
    // Firefox
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:86.0) Gecko/20100101 Firefox/86.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 11.2; rv:86.0) Gecko/20100101 Firefox/86.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:86.0) Gecko/20100101 Firefox/86.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:86.0) Gecko/20100101 Firefox/86.0",
    "Mozilla/5.0 (Android 11; Mobile; rv:68.0) Gecko/68.0 Firefox/86.0",
    // Chrome
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.82 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 11_2_3) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.82 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.82 Safari/537.36",
    "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.86 Mobile Safari/537.36",
];

/// 基于 reqwest 的传输实现。
///
/// 内部 Client 是 Arc，克隆廉价；UA 轮换游标在实例内共享。
pub struct HttpTransport {
    client: Client,
    next_agent: AtomicUsize,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            next_agent: AtomicUsize::new(0),
        })
    }

    /// 池内轮换取下一个 UA。
    fn next_user_agent(&self) -> &'static str {
        let idx = self.next_agent.fetch_add(1, Ordering::Relaxed) % USER_AGENTS.len();
        USER_AGENTS[idx]
    }

    /// 组装基础请求头，再叠加调用方请求头（同名覆盖）。
    fn build_headers(&self, extra: &[(String, String)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(ua) = HeaderValue::from_str(self.next_user_agent()) {
            headers.insert("user-agent", ua);
        }
        headers.insert("accept-language", HeaderValue::from_static("en-US,en"));

        for (name, value) in extra {
            let parsed = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            );
            match parsed {
                (Ok(n), Ok(v)) => {
                    headers.insert(n, v);
                }
                _ => {
                    warn!("忽略无法编码的请求头: {}", name);
                }
            }
        }
        headers
    }
}

/// 发起任何 I/O 之前校验 URL：必须能解析且 scheme 为 http/https。
fn validate_url(url: &str) -> Result<Url, TransportError> {
    let parsed = Url::parse(url).map_err(|_| TransportError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(TransportError::InvalidUrl(url.to_string())),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = validate_url(&request.url)?;
        debug!("{} {}", request.method.as_str(), url);

        let mut builder = self
            .client
            .request(request.method.to_reqwest_method(), url)
            .headers(self.build_headers(&request.headers));

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        // 非成功状态码与网络失败同样上抛，本层不重试
        let resp = builder.send().await?.error_for_status()?;

        let status = resp.status().as_u16();
        let head = ResponseHead::from_pairs(resp.headers().iter().filter_map(|(k, v)| {
            v.to_str()
                .ok()
                .map(|value| (k.as_str().to_string(), value.to_string()))
        }));

        Ok(TransportResponse {
            status,
            head,
            body: Box::new(ReqwestBody::new(resp)),
        })
    }
}

/// reqwest 响应体的再分块读取器。
///
/// 网络块大小由服务端决定，这里缓冲到调用方要求的 `size` 再吐出，
/// 任何时刻至多持有一个未消费的网络块。
struct ReqwestBody {
    stream: Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>,
    buf: BytesMut,
    exhausted: bool,
}

impl ReqwestBody {
    fn new(resp: reqwest::Response) -> Self {
        Self {
            stream: Box::pin(resp.bytes_stream()),
            buf: BytesMut::new(),
            exhausted: false,
        }
    }
}

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read_chunk(&mut self, size: usize) -> Result<Bytes, TransportError> {
        if size == 0 {
            return Ok(Bytes::new());
        }

        while self.buf.len() < size && !self.exhausted {
            match self.stream.next().await {
                Some(chunk) => self.buf.extend_from_slice(&chunk?),
                None => self.exhausted = true,
            }
        }

        if self.buf.is_empty() {
            return Ok(Bytes::new());
        }
        let take = size.min(self.buf.len());
        Ok(self.buf.split_to(take).freeze())
    }
}

//! Range 窗口模型的拉取状态机：逐窗口发 Range GET，按块产出字节。

use std::sync::Arc;

use bytes::Bytes;
use futures_util::Stream;
use tracing::{debug, warn};
use url::Url;

use crate::internal::stream::functions::content_range::total_from_content_range;
use crate::internal::stream::structs::stream_config::StreamConfig;
use crate::internal::stream::structs::stream_error::StreamError;
use crate::internal::stream::structs::stream_state::StreamState;
use crate::internal::transport::enums::Method;
use crate::internal::transport::traits::transport::{ResponseBody, Transport, TransportRequest};

/// Range 窗口模型的字节流。
///
/// 惰性、单向、不可重放：不调用 [`next_chunk`](Self::next_chunk) 就不发请求，
/// 已产出的块不会重发，中途丢弃本结构体即关闭在途响应。
///
/// 总大小从首个响应的披露头发现；解析失败只记日志，占位窗口转为权威值，
/// 之后靠「零字节响应」收束（服务端给少了就再发一个对齐窗口）。
pub struct RangeChunkStream {
    transport: Arc<dyn Transport>,
    url: Url,
    config: StreamConfig,
    state: StreamState,
    body: Option<Box<dyn ResponseBody>>,
    /// 当前响应已产出的字节数，占位回退的收束判定用。
    body_yielded: u64,
    /// 首个响应是否已经到手（披露头只在首个响应上尝试解析）。
    first_response_seen: bool,
    finished: bool,
}

impl RangeChunkStream {
    /// 解析 URL 并建流；此时不发任何请求。
    pub fn open(
        transport: Arc<dyn Transport>,
        url: &str,
        config: StreamConfig,
    ) -> Result<Self, StreamError> {
        let url = Url::parse(url)?;
        Ok(Self::from_url(transport, url, config))
    }

    /// 已解析 URL 的建流入口，顺序分段流逐段复用。
    pub fn from_url(transport: Arc<dyn Transport>, url: Url, config: StreamConfig) -> Self {
        let state = StreamState::new(config.window_size);
        Self {
            transport,
            url,
            config,
            state,
            body: None,
            body_yielded: 0,
            first_response_seen: false,
            finished: false,
        }
    }

    /// 拉取下一块；`None` 表示流已收束（之后恒返回 `None`）。
    ///
    /// 产出 `Err` 的同时收束整条流，错误不重试。
    pub async fn next_chunk(&mut self) -> Option<Result<Bytes, StreamError>> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(body) = self.body.as_mut() {
                match body.read_chunk(self.config.chunk_size).await {
                    Ok(chunk) if chunk.is_empty() => {
                        // 本响应读尽
                        let yielded = self.body_yielded;
                        self.body = None;

                        // 零字节响应即收束：再发窗口只会原地空转
                        if yielded == 0 {
                            self.finished = true;
                            return None;
                        }
                        continue;
                    }
                    Ok(chunk) => {
                        self.state.record(chunk.len() as u64);
                        self.body_yielded += chunk.len() as u64;
                        return Some(Ok(chunk));
                    }
                    Err(err) => {
                        self.finished = true;
                        return Some(Err(err.into()));
                    }
                }
            }

            if self.state.is_complete() {
                self.finished = true;
                return None;
            }

            if let Err(err) = self.issue_next_window().await {
                self.finished = true;
                return Some(Err(err));
            }
        }
    }

    /// 发起下一个窗口的 Range GET；首个响应顺带尝试解析真实总大小。
    async fn issue_next_window(&mut self) -> Result<(), StreamError> {
        let window = self.state.next_window(self.config.window_size);
        debug!("Range 窗口请求: {} {}", self.url, window.header_value());

        let request = TransportRequest::new(Method::Get, self.url.as_str())
            .with_header("Range", window.header_value());
        let resp = self.transport.execute(request).await?;

        if !self.first_response_seen {
            self.first_response_seen = true;
            match total_from_content_range(&resp.head) {
                Ok(total) => self.state.resolve_total(total),
                Err(err) => {
                    // 非致命：按占位窗口继续，短读时再发对齐窗口
                    warn!("首个响应未披露总大小，按占位窗口继续: {}", err);
                }
            }
        }

        self.body = Some(resp.body);
        self.body_yielded = 0;
        Ok(())
    }

    /// 已产出的字节数。
    pub fn downloaded(&self) -> u64 {
        self.state.downloaded()
    }

    /// 当前认定的总大小；披露头未解析成功前是占位窗口值。
    pub fn total(&self) -> u64 {
        self.state.total()
    }

    /// 转成 [`futures_util::Stream`]，方便与组合子拼接；语义与逐次
    /// [`next_chunk`](Self::next_chunk) 完全相同。
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, StreamError>> + Send {
        futures_util::stream::unfold(self, |mut stream| async move {
            stream.next_chunk().await.map(|item| (item, stream))
        })
    }
}

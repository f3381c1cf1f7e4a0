//! 顺序分段模型的拉取状态机：第 0 段发现分段总数，之后按序号逐段拉取。

use std::sync::Arc;

use bytes::Bytes;
use futures_util::Stream;
use tracing::debug;

use crate::internal::endpoint::structs::sequence_endpoint::SequenceEndpoint;
use crate::internal::stream::functions::segment_header::segment_count;
use crate::internal::stream::structs::range_chunk_stream::RangeChunkStream;
use crate::internal::stream::structs::segment_cursor::SegmentCursor;
use crate::internal::stream::structs::stream_config::StreamConfig;
use crate::internal::stream::structs::stream_error::StreamError;
use crate::internal::transport::traits::transport::Transport;

/// 顺序分段模型的字节流。
///
/// 第 0 段经 [`RangeChunkStream`] 拉取，块照常转发给调用方，同时私下
/// 累积一份完整拷贝；第 0 段读尽后从拷贝里解析分段总数（解析失败
/// 直接上抛，没有回退），再按 1..=N 严格递增逐段拉取、直接转发。
///
/// 调用方看到的是一条连续且保序的字节流，等于 0..=N 各段的串接；
/// 整个过程只有第 0 段会被整段缓存。
pub struct SequentialSegmentStream {
    transport: Arc<dyn Transport>,
    endpoint: SequenceEndpoint,
    config: StreamConfig,
    cursor: SegmentCursor,
    inner: Option<RangeChunkStream>,
    /// 第 0 段的私有拷贝；进入后续分段时已被取走。
    header_segment: Option<Vec<u8>>,
    finished: bool,
}

impl SequentialSegmentStream {
    /// 解析 URL 并建流；此时不发任何请求。
    pub fn open(
        transport: Arc<dyn Transport>,
        url: &str,
        config: StreamConfig,
    ) -> Result<Self, StreamError> {
        let endpoint = SequenceEndpoint::parse(url)?;
        Ok(Self {
            transport,
            endpoint,
            config,
            cursor: SegmentCursor::new(),
            inner: None,
            header_segment: Some(Vec::new()),
            finished: false,
        })
    }

    /// 拉取下一块；`None` 表示全部分段读尽（之后恒返回 `None`）。
    pub async fn next_chunk(&mut self) -> Option<Result<Bytes, StreamError>> {
        if self.finished {
            return None;
        }

        loop {
            if self.inner.is_none() {
                if self.cursor.is_exhausted() {
                    self.finished = true;
                    return None;
                }
                let url = self.endpoint.with_sequence(self.cursor.sequence());
                debug!("分段请求: sq={} {}", self.cursor.sequence(), url);
                self.inner = Some(RangeChunkStream::from_url(
                    self.transport.clone(),
                    url,
                    self.config.clone(),
                ));
            }
            let Some(inner) = self.inner.as_mut() else {
                continue;
            };

            match inner.next_chunk().await {
                Some(Ok(chunk)) => {
                    if let Some(buf) = self.header_segment.as_mut() {
                        buf.extend_from_slice(&chunk);
                    }
                    return Some(Ok(chunk));
                }
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                None => {
                    // 当前分段读尽；第 0 段读尽时顺带解析分段总数
                    self.inner = None;
                    if self.cursor.sequence() == 0 {
                        if let Err(err) = self.resolve_segment_count() {
                            self.finished = true;
                            return Some(Err(err));
                        }
                    }
                    self.cursor.advance();
                }
            }
        }
    }

    /// 从第 0 段的私有拷贝解析分段总数并写入游标。
    fn resolve_segment_count(&mut self) -> Result<(), StreamError> {
        let header_segment = self.header_segment.take().unwrap_or_default();
        let count = segment_count(&header_segment)?;
        debug!("分段总数: {}", count);
        self.cursor.resolve(count)
    }

    /// 已解析的分段总数；第 0 段读尽之前为 `None`。
    pub fn segment_count(&self) -> Option<u64> {
        self.cursor.segment_count()
    }

    /// 转成 [`futures_util::Stream`]；语义与逐次
    /// [`next_chunk`](Self::next_chunk) 完全相同。
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, StreamError>> + Send {
        futures_util::stream::unfold(self, |mut stream| async move {
            stream.next_chunk().await.map(|item| (item, stream))
        })
    }
}

//! 大小解析器：两种分发模型下回答「这个资源总共多少字节」。

use std::sync::Arc;

use tracing::debug;

use crate::internal::endpoint::structs::sequence_endpoint::SequenceEndpoint;
use crate::internal::size::structs::size_cache::SizeCache;
use crate::internal::stream::functions::segment_header::segment_count;
use crate::internal::stream::structs::stream_error::StreamError;
use crate::internal::transport::enums::Method;
use crate::internal::transport::functions::requests::{head, read_to_end};
use crate::internal::transport::traits::transport::{Transport, TransportRequest};

const CONTENT_LENGTH: &str = "content-length";

/// 大小解析器。
///
/// 两个入口各自按「URL 原文」记忆（见 [`SizeCache`]），与流式下载互不
/// 共享迭代状态，独立发起自己的请求，常用于进度展示。
pub struct SizeResolver {
    transport: Arc<dyn Transport>,
    filesize_cache: SizeCache,
    seq_filesize_cache: SizeCache,
}

impl SizeResolver {
    /// 建解析器并随手创建两张空记忆表；进程启动建一次即可。
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_caches(transport, SizeCache::new(), SizeCache::new())
    }

    /// 注入外部记忆表的建法，生命周期由调用方掌握。
    pub fn with_caches(
        transport: Arc<dyn Transport>,
        filesize_cache: SizeCache,
        seq_filesize_cache: SizeCache,
    ) -> Self {
        Self {
            transport,
            filesize_cache,
            seq_filesize_cache,
        }
    }

    /// Range 模型的总大小：一次 HEAD 读 content-length。
    /// 缺头或非数字是致命错误（[`StreamError::HeaderNotFound`]）。
    pub async fn filesize(&self, url: &str) -> Result<u64, StreamError> {
        let transport = self.transport.clone();
        self.filesize_cache
            .get_or_compute(url, || async move {
                let response_head = head(transport.as_ref(), url).await?;
                Ok(response_head.require_u64(CONTENT_LENGTH)?)
            })
            .await
    }

    /// 分段模型的总大小：`sq=0` 整段 GET 计入长度并解析分段总数，
    /// 再对 1..=N 逐段 HEAD 累加 content-length。
    /// 共 N + 1 次网络往返，不做并发也不做批量。
    pub async fn seq_filesize(&self, url: &str) -> Result<u64, StreamError> {
        let transport = self.transport.clone();
        self.seq_filesize_cache
            .get_or_compute(url, || async move { seq_filesize_uncached(transport.as_ref(), url).await })
            .await
    }

    /// 清空两张记忆表。
    pub async fn clear_cache(&self) {
        self.filesize_cache.clear().await;
        self.seq_filesize_cache.clear().await;
    }
}

async fn seq_filesize_uncached(transport: &dyn Transport, url: &str) -> Result<u64, StreamError> {
    let endpoint = SequenceEndpoint::parse(url)?;

    // 第 0 段整段拉取（普通 GET，不带 Range），长度计入总和
    let request = TransportRequest::new(Method::Get, endpoint.with_sequence(0).as_str());
    let mut resp = transport.execute(request).await?;
    let header_segment = read_to_end(resp.body.as_mut()).await?;
    let mut total = header_segment.len() as u64;

    let count = segment_count(&header_segment)?;
    debug!("分段总数: {}，开始逐段 HEAD", count);

    for sequence in 1..=count {
        let segment_url = endpoint.with_sequence(sequence);
        let segment_head = head(transport, segment_url.as_str()).await?;
        total += segment_head.require_u64(CONTENT_LENGTH)?;
    }

    Ok(total)
}

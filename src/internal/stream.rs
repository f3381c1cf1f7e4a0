//! 流式下载领域模块
//!
//! 实现媒体后端两种分发模型的字节流产出，以及配套的进度状态与解析函数。
//!
//! ## 功能特性
//!
//! - **Range 窗口流**：总大小未知时从首个响应的披露头（`<unit> <start>-<end>/<total>`）
//!   发现真实大小，按固定窗口逐个发起 Range GET，按固定块大小产出字节
//! - **顺序分段流**：服务端把载荷切成带序号的分段，第 0 段正文内嵌
//!   `Segment-Count` 伪头声明分段总数，按序号 0..=N 严格顺序拉取
//! - **惰性拉取**：调用方不拉就不发请求，内存上限为一个在途响应的缓冲；
//!   中途丢弃流即关闭在途响应，不会再发任何请求
//! - **占位回退**：首个响应的披露头解析失败只记日志不致命，按占位窗口
//!   继续，直到出现零字节响应收束
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use media_fetch::transport::HttpTransport;
//! # use media_fetch::stream::StreamConfig;
//! # use media_fetch::{RangeChunkStream, SequentialSegmentStream};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(HttpTransport::new()?);
//!
//! // Range 窗口模型
//! let mut stream = RangeChunkStream::open(
//!     transport.clone(),
//!     "https://host/videoplayback?id=1",
//!     StreamConfig::default(),
//! )?;
//! while let Some(chunk) = stream.next_chunk().await {
//!     let chunk = chunk?;
//!     // 逐块消费
//! }
//!
//! // 顺序分段模型
//! let mut stream = SequentialSegmentStream::open(
//!     transport,
//!     "https://host/videoplayback?id=1",
//!     StreamConfig::default().with_chunk_size(8192),
//! )?;
//! while let Some(chunk) = stream.next_chunk().await {
//!     let chunk = chunk?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## 内部实现说明
//!
//! - `structs/range_chunk_stream`：Range 窗口模型的拉取状态机
//! - `structs/seq_segment_stream`：顺序分段模型，复用 Range 状态机逐段拉取
//! - `functions`：披露头与 `Segment-Count` 标记的解析，纯函数无状态

pub mod functions;
pub mod structs;

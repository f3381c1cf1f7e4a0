//! 顺序分段流测试：分段总数发现、严格递增顺序、空分段、标记缺失。

use std::sync::Arc;

use crate::internal::stream::structs::seq_segment_stream::SequentialSegmentStream;
use crate::internal::stream::structs::stream_config::StreamConfig;
use crate::internal::stream::structs::stream_error::StreamError;
use crate::tests::{MockTransport, drain_seq, range_of, range_reply, sequence_of};

/// 按 sq 序号应答各分段内容；越界序号按空载荷处理。
fn segment_transport(segments: Vec<Vec<u8>>) -> Arc<MockTransport> {
    Arc::new(MockTransport::new(move |req| {
        let sq = sequence_of(&req.url).expect("分段请求必须带 sq") as usize;
        let payload = segments.get(sq).cloned().unwrap_or_default();
        range_reply(&payload, range_of(req).as_deref())
    }))
}

/// 带 Segment-Count 伪头的第 0 段：文本行 + 任意二进制尾巴。
fn header_segment(count: u64) -> Vec<u8> {
    let mut seg = format!("Segment-Count: {}\r\n", count).into_bytes();
    seg.extend_from_slice(&[0x00, 0xFF, 0x47, 0x40, 0x11, 0x00, 0x01]);
    seg
}

#[tokio::test]
async fn streams_all_segments_in_order() {
    let seg0 = header_segment(3);
    let segments = vec![
        seg0.clone(),
        vec![0x11_u8; 10],
        vec![0x22_u8; 10],
        vec![0x33_u8; 10],
    ];
    let transport = segment_transport(segments.clone());

    let mut stream = SequentialSegmentStream::open(
        transport.clone(),
        "http://host/video?id=1",
        StreamConfig::default(),
    )
    .expect("建流失败");

    let drained = drain_seq(&mut stream).await.expect("拉流失败");

    // 输出等于 0..=3 各段串接，长度 = 伪头段 + 30
    let expected: Vec<u8> = segments.concat();
    assert_eq!(drained, expected);
    assert_eq!(drained.len(), seg0.len() + 30);
    assert_eq!(stream.segment_count(), Some(3));

    // 恰好 4 次分段拉取，sq 严格递增，其余查询参数原样保留
    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    let sequences: Vec<u64> = requests.iter().filter_map(|r| r.sequence()).collect();
    assert_eq!(sequences, vec![0, 1, 2, 3]);
    for req in &requests {
        assert!(req.url.contains("id=1"), "其余查询参数不能丢: {}", req.url);
    }
}

#[tokio::test]
async fn zero_segment_count_yields_header_only() {
    let seg0 = header_segment(0);
    let transport = segment_transport(vec![seg0.clone()]);

    let mut stream = SequentialSegmentStream::open(
        transport.clone(),
        "http://host/video",
        StreamConfig::default(),
    )
    .expect("建流失败");

    let drained = drain_seq(&mut stream).await.expect("拉流失败");
    assert_eq!(drained, seg0);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn empty_segment_does_not_stop_iteration() {
    let seg0 = header_segment(2);
    let segments = vec![seg0.clone(), Vec::new(), b"tail-bytes".to_vec()];
    let transport = segment_transport(segments.clone());

    let mut stream = SequentialSegmentStream::open(
        transport.clone(),
        "http://host/video",
        StreamConfig::default(),
    )
    .expect("建流失败");

    let drained = drain_seq(&mut stream).await.expect("拉流失败");
    assert_eq!(drained, segments.concat());

    let sequences: Vec<u64> = transport
        .requests()
        .iter()
        .filter_map(|r| r.sequence())
        .collect();
    assert_eq!(sequences, vec![0, 1, 2], "空分段也要照常拉取后续分段");
}

#[tokio::test]
async fn missing_marker_is_fatal() {
    // 第 0 段没有 Segment-Count 标记：块照常转发，读尽后报错，没有回退
    let seg0 = b"no marker here\r\n\x00\x01\x02".to_vec();
    let transport = segment_transport(vec![seg0.clone()]);

    let mut stream = SequentialSegmentStream::open(
        transport.clone(),
        "http://host/video",
        StreamConfig::default(),
    )
    .expect("建流失败");

    let mut forwarded = Vec::new();
    let mut failure = None;
    while let Some(item) = stream.next_chunk().await {
        match item {
            Ok(chunk) => forwarded.extend_from_slice(&chunk),
            Err(err) => failure = Some(err),
        }
    }

    assert_eq!(forwarded, seg0, "伪头段的字节在报错前应已转发");
    assert!(matches!(failure, Some(StreamError::SegmentHeaderNotFound)));
    assert_eq!(transport.request_count(), 1);

    // 报错即收束
    assert!(stream.next_chunk().await.is_none());
}

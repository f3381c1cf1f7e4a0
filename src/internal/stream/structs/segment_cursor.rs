//! 顺序分段游标：当前序号与解析后的分段总数。

use crate::internal::stream::structs::stream_error::StreamError;

/// 序号从 0（带伪头的分段）开始，之后是 1..=segment_count。
/// 分段总数一旦解析即不可变。
#[derive(Debug, Default)]
pub struct SegmentCursor {
    sequence: u64,
    segment_count: Option<u64>,
}

impl SegmentCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn segment_count(&self) -> Option<u64> {
        self.segment_count
    }

    /// 写入分段总数；重复解析是错误，需要重新拉取第 0 段才允许再来。
    pub fn resolve(&mut self, count: u64) -> Result<(), StreamError> {
        if self.segment_count.is_some() {
            return Err(StreamError::SegmentCountAlreadyResolved);
        }
        self.segment_count = Some(count);
        Ok(())
    }

    pub fn advance(&mut self) {
        self.sequence += 1;
    }

    /// 0..=count 是否已全部走完；总数未解析时恒为 false。
    pub fn is_exhausted(&self) -> bool {
        match self.segment_count {
            Some(count) => self.sequence > count,
            None => false,
        }
    }
}

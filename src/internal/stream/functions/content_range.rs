//! 披露头解析：从 Range 响应头里取出资源真实总大小。

use crate::internal::transport::structs::response_head::{HeaderNotFound, ResponseHead};

const CONTENT_RANGE: &str = "content-range";

/// 从响应头取 `content-range`（格式 `<unit> <start>-<end>/<total>`），
/// 只解析 `<total>`；缺头、缺斜杠或非数字都按 [`HeaderNotFound`] 处理，
/// 是否致命由调用方决定。
pub fn total_from_content_range(head: &ResponseHead) -> Result<u64, HeaderNotFound> {
    let value = head.require(CONTENT_RANGE)?;
    value
        .trim()
        .rsplit('/')
        .next()
        .and_then(|total| total.trim().parse::<u64>().ok())
        .ok_or_else(|| HeaderNotFound(CONTENT_RANGE.to_string()))
}

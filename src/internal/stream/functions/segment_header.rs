//! Segment-Count 伪头解析：从第 0 段的原始字节里找分段总数。
//!
//! 伪头区域是文本，其余正文是任意二进制，所以匹配全程走原始字节，
//! 不假设整段能按 UTF-8 解码。

use crate::internal::stream::structs::stream_error::StreamError;

/// 行内标记：`Segment-Count: ` 后跟一个或多个十进制数字。
const SEGMENT_COUNT_MARKER: &[u8] = b"Segment-Count: ";

/// CRLF 行分隔符。
const CRLF: &[u8] = b"\r\n";

/// 把第 0 段正文按 CRLF 切行，逐行找 Segment-Count 标记，
/// 返回第一个解析成功的整数；不匹配的行跳过，不算错误。
/// 整段都没有标记时返回 [`StreamError::SegmentHeaderNotFound`]。
pub fn segment_count(body: &[u8]) -> Result<u64, StreamError> {
    split_crlf(body)
        .filter_map(segment_count_in_line)
        .next()
        .ok_or(StreamError::SegmentHeaderNotFound)
}

/// 单行匹配：标记可出现在行内任意位置；数字串过长溢出 u64 也按不匹配处理。
fn segment_count_in_line(line: &[u8]) -> Option<u64> {
    let pos = find_subslice(line, SEGMENT_COUNT_MARKER)?;
    let rest = &line[pos + SEGMENT_COUNT_MARKER.len()..];

    let digits_len = rest
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_len == 0 {
        return None;
    }

    std::str::from_utf8(&rest[..digits_len])
        .ok()?
        .parse::<u64>()
        .ok()
}

/// 按 CRLF 切行；不含分隔符的尾部也算一行。
fn split_crlf(body: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = Some(body);
    std::iter::from_fn(move || {
        let current = rest?;
        match find_subslice(current, CRLF) {
            Some(pos) => {
                rest = Some(&current[pos + CRLF.len()..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

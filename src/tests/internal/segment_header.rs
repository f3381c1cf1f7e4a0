//! Segment-Count 伪头解析测试：行位置无关、二进制容忍、取首个匹配。

use crate::internal::stream::functions::segment_header::segment_count;
use crate::internal::stream::structs::stream_error::StreamError;

#[test]
fn marker_position_does_not_matter() {
    let first: &[u8] = b"Segment-Count: 12\r\nItag: 22\r\n\x00\xFFbinary";
    let middle: &[u8] = b"Itag: 22\r\nSegment-Count: 12\r\n\x00\xFFbinary";
    let last: &[u8] = b"Itag: 22\r\n\x00\xFFbinary\r\nSegment-Count: 12";

    assert_eq!(segment_count(first).expect("应解析成功"), 12);
    assert_eq!(segment_count(middle).expect("应解析成功"), 12);
    assert_eq!(segment_count(last).expect("应解析成功"), 12);
}

#[test]
fn marker_inside_line_is_found() {
    let body: &[u8] = b"\x13\x37junk Segment-Count: 7 trailing\r\nrest";
    assert_eq!(segment_count(body).expect("应解析成功"), 7);
}

#[test]
fn first_parsed_value_wins() {
    let body: &[u8] = b"Segment-Count: 5\r\nSegment-Count: 9\r\n";
    assert_eq!(segment_count(body).expect("应解析成功"), 5);
}

#[test]
fn digits_stop_at_first_non_digit() {
    let body: &[u8] = b"Segment-Count: 42x7\r\n";
    assert_eq!(segment_count(body).expect("应解析成功"), 42);
}

#[test]
fn marker_without_digits_is_skipped() {
    // 第一行有标记但没有数字，跳过而不是报错；第二行才算数
    let body: &[u8] = b"Segment-Count: none\r\nSegment-Count: 3\r\n";
    assert_eq!(segment_count(body).expect("应解析成功"), 3);
}

#[test]
fn overflowing_number_is_skipped() {
    let body: &[u8] = b"Segment-Count: 99999999999999999999999\r\nSegment-Count: 8\r\n";
    assert_eq!(segment_count(body).expect("应解析成功"), 8);
}

#[test]
fn missing_marker_is_an_error() {
    let body: &[u8] = b"Itag: 22\r\n\x00\x01\x02\x03";
    assert!(matches!(
        segment_count(body),
        Err(StreamError::SegmentHeaderNotFound)
    ));
}

#[test]
fn empty_body_is_an_error() {
    assert!(matches!(
        segment_count(b""),
        Err(StreamError::SegmentHeaderNotFound)
    ));
}

//! 披露头解析测试：只取 `<total>`，缺失或畸形都算缺头。

use crate::internal::stream::functions::content_range::total_from_content_range;
use crate::internal::transport::structs::response_head::ResponseHead;

fn head_with(value: &str) -> ResponseHead {
    // 故意用原始大小写的键，顺带验证小写化查找
    ResponseHead::from_pairs([("Content-Range".to_string(), value.to_string())])
}

#[test]
fn total_is_taken_after_the_slash() {
    let head = head_with("bytes 0-9437183/20000000");
    assert_eq!(total_from_content_range(&head).expect("应解析成功"), 20_000_000);
}

#[test]
fn unsatisfied_range_of_empty_resource_gives_zero() {
    let head = head_with("bytes */0");
    assert_eq!(total_from_content_range(&head).expect("应解析成功"), 0);
}

#[test]
fn missing_header_is_an_error() {
    let head = ResponseHead::from_pairs(std::iter::empty::<(String, String)>());
    assert!(total_from_content_range(&head).is_err());
}

#[test]
fn malformed_total_is_an_error() {
    assert!(total_from_content_range(&head_with("bytes 0-1/abc")).is_err());
    assert!(total_from_content_range(&head_with("bytes 0-1")).is_err());
    assert!(total_from_content_range(&head_with("bytes 0-1/*")).is_err());
}

//! 序列端点测试：sq 改写时其余查询参数原样保留，序列化结果始终合法。

use url::Url;

use crate::internal::endpoint::structs::sequence_endpoint::SequenceEndpoint;

fn query_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn appends_sequence_and_keeps_other_params() {
    let endpoint =
        SequenceEndpoint::parse("http://host/video?id=1&quality=hd").expect("解析失败");

    let url = endpoint.with_sequence(0);
    assert_eq!(
        query_pairs(&url),
        vec![
            ("id".to_string(), "1".to_string()),
            ("quality".to_string(), "hd".to_string()),
            ("sq".to_string(), "0".to_string()),
        ]
    );
    assert_eq!(url.path(), "/video");
    assert_eq!(url.host_str(), Some("host"));
}

#[test]
fn replaces_existing_sequence_in_place() {
    let endpoint = SequenceEndpoint::parse("http://host/v?sq=9&id=1").expect("解析失败");

    let url = endpoint.with_sequence(2);
    assert_eq!(
        query_pairs(&url),
        vec![
            ("sq".to_string(), "2".to_string()),
            ("id".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn rewriting_twice_does_not_duplicate() {
    let endpoint = SequenceEndpoint::parse("http://host/v?id=1").expect("解析失败");

    // 端点不可变，每次改写都从同一基线出发
    let first = endpoint.with_sequence(1);
    let second = endpoint.with_sequence(2);

    let count = |url: &Url| query_pairs(url).iter().filter(|(k, _)| k == "sq").count();
    assert_eq!(count(&first), 1);
    assert_eq!(count(&second), 1);
    assert_eq!(query_pairs(&second)[1], ("sq".to_string(), "2".to_string()));
}

#[test]
fn serialized_url_stays_parseable() {
    let endpoint =
        SequenceEndpoint::parse("https://host/path/v?token=a%2Fb&id=1").expect("解析失败");

    let url = endpoint.with_sequence(42);
    let reparsed = Url::parse(url.as_str()).expect("改写后的 URL 必须仍然合法");
    assert_eq!(
        query_pairs(&reparsed)
            .iter()
            .find(|(k, _)| k == "token")
            .map(|(_, v)| v.clone()),
        Some("a/b".to_string()),
        "其余参数的值经编码往返后不变"
    );
}

#[test]
fn url_without_rewrite_round_trips() {
    let endpoint = SequenceEndpoint::parse("http://host/v?id=1&x=2").expect("解析失败");
    assert_eq!(endpoint.url().as_str(), "http://host/v?id=1&x=2");
}

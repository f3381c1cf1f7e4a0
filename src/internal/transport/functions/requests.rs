//! 无状态请求助手：一次性 GET / POST / HEAD 与整体读取。
//!
//! 这些助手没有迭代状态，给上层「拿全量再处理」的场景用；
//! 流式场景请走 [`crate::RangeChunkStream`]。

use serde_json::Value;

use crate::internal::transport::enums::Method;
use crate::internal::transport::structs::response_head::ResponseHead;
use crate::internal::transport::structs::transport_error::TransportError;
use crate::internal::transport::traits::transport::{ResponseBody, Transport, TransportRequest};

/// 整体读取时每次向正文拉取的字节数。
const READ_SIZE: usize = 64 * 1024;

/// 把响应正文读完，返回全部字节。
pub async fn read_to_end(body: &mut dyn ResponseBody) -> Result<Vec<u8>, TransportError> {
    let mut out = Vec::new();
    loop {
        let chunk = body.read_chunk(READ_SIZE).await?;
        if chunk.is_empty() {
            break;
        }
        out.extend_from_slice(&chunk);
    }
    Ok(out)
}

/// 发送一次 GET，返回 UTF-8 解码后的响应体。
pub async fn get(
    transport: &dyn Transport,
    url: &str,
    extra_headers: &[(String, String)],
) -> Result<String, TransportError> {
    let mut request = TransportRequest::new(Method::Get, url);
    for (name, value) in extra_headers {
        request = request.with_header(name.as_str(), value.as_str());
    }

    let mut resp = transport.execute(request).await?;
    let raw = read_to_end(resp.body.as_mut()).await?;
    Ok(String::from_utf8(raw)?)
}

/// 发送一次 POST，请求体按 JSON 编码并带上 `Content-Type: application/json`
/// （媒体后端对 content-type 较严格，缺了会直接 400）。
pub async fn post(
    transport: &dyn Transport,
    url: &str,
    extra_headers: &[(String, String)],
    data: &Value,
) -> Result<String, TransportError> {
    let mut request = TransportRequest::new(Method::Post, url);
    for (name, value) in extra_headers {
        request = request.with_header(name.as_str(), value.as_str());
    }
    request = request
        .with_header("Content-Type", "application/json")
        .with_body(serde_json::to_vec(data)?);

    let mut resp = transport.execute(request).await?;
    let raw = read_to_end(resp.body.as_mut()).await?;
    Ok(String::from_utf8(raw)?)
}

/// 发送一次 HEAD，返回小写化的响应头映射。
pub async fn head(transport: &dyn Transport, url: &str) -> Result<ResponseHead, TransportError> {
    let resp = transport
        .execute(TransportRequest::new(Method::Head, url))
        .await?;
    Ok(resp.head)
}

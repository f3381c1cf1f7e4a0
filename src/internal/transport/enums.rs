use reqwest::Method as ReqwestMethod;

/// 本层支持的请求方法；媒体后端只会用到这三种。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Head => "HEAD",
        }
    }

    pub fn to_reqwest_method(&self) -> ReqwestMethod {
        match self {
            Method::Get => ReqwestMethod::GET,
            Method::Post => ReqwestMethod::POST,
            Method::Head => ReqwestMethod::HEAD,
        }
    }
}

//! 序列端点：把输入 URL 拆成「基址 + 查询参数表」，按需改写 sq 参数后重新序列化。

use url::Url;

/// 分段协议保留的序号查询参数名；调用方不得自行预置。
pub const SEQUENCE_PARAM: &str = "sq";

/// (基址, 查询参数表) 二元组。
///
/// 改写 `sq` 时其余参数按原顺序逐字保留，重新序列化的结果始终是合法 URL。
#[derive(Debug, Clone)]
pub struct SequenceEndpoint {
    /// scheme + host + path，查询串已剥离。
    base: Url,
    params: Vec<(String, String)>,
}

impl SequenceEndpoint {
    /// 解析输入 URL；查询串拆进参数表，基址上的查询被清空。
    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(url)?;
        let params: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut base = parsed;
        base.set_query(None);

        Ok(Self { base, params })
    }

    /// 生成 `sq` 为指定序号的 URL；已有 `sq` 原位替换，没有则追加到末尾。
    pub fn with_sequence(&self, sequence: u64) -> Url {
        let mut url = self.base.clone();
        {
            let mut qp = url.query_pairs_mut();
            let mut replaced = false;
            for (key, value) in &self.params {
                if key == SEQUENCE_PARAM {
                    qp.append_pair(SEQUENCE_PARAM, &sequence.to_string());
                    replaced = true;
                } else {
                    qp.append_pair(key, value);
                }
            }
            if !replaced {
                qp.append_pair(SEQUENCE_PARAM, &sequence.to_string());
            }
        }
        url
    }

    /// 不带序号改写的原始 URL。
    pub fn url(&self) -> Url {
        let mut url = self.base.clone();
        if !self.params.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (key, value) in &self.params {
                qp.append_pair(key, value);
            }
        }
        url
    }
}

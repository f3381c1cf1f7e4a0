//! 按 URL 记忆的大小缓存：每个键至多计算一次。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::internal::stream::structs::stream_error::StreamError;

/// 进程生命周期内的按 URL 记忆表。
///
/// 外层锁只保护槽位表，拿到槽后立刻释放；每个 URL 一把异步槽锁，
/// 并发解析同一 URL 会被串行化，后到者直接读先到者写入的值，
/// 昂贵的多往返计算整个进程至多跑一次。
///
/// 只记忆成功结果：计算失败不写入槽位，后续调用允许重算。
#[derive(Default)]
pub struct SizeCache {
    slots: Mutex<HashMap<String, Arc<Mutex<Option<u64>>>>>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 查表或计算：命中直接返回；未命中在该 URL 的槽锁内执行 `compute`，
    /// 成功后写入槽位。
    pub async fn get_or_compute<F, Fut>(&self, url: &str, compute: F) -> Result<u64, StreamError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<u64, StreamError>>,
    {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots.entry(url.to_string()).or_default().clone()
        };

        let mut value = slot.lock().await;
        if let Some(size) = *value {
            return Ok(size);
        }

        let size = compute().await?;
        *value = Some(size);
        Ok(size)
    }

    /// 清空全部记忆；正在计算中的槽不受影响，算完的值随旧槽一起被丢弃。
    pub async fn clear(&self) {
        self.slots.lock().await.clear();
    }
}

//! 一次 Range 流式调用独占的进度状态与窗口计算。

/// 单个 Range 窗口：闭区间 `[start, stop]`，对应请求头 `bytes=start-stop`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeWindow {
    pub start: u64,
    pub stop: u64,
}

impl RangeWindow {
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.stop)
    }
}

/// 进度状态：已产出字节数单调递增，总大小先占位后替换。
///
/// `total` 初始等于窗口大小（占位值，不是测量结果），首个响应的披露头
/// 解析成功时替换一次；`downloaded` 不会超过 `total`，二者相等即完成。
#[derive(Debug)]
pub struct StreamState {
    downloaded: u64,
    total: u64,
    size_resolved: bool,
}

impl StreamState {
    pub fn new(window_size: u64) -> Self {
        Self {
            downloaded: 0,
            total: window_size,
            size_resolved: false,
        }
    }

    pub fn downloaded(&self) -> u64 {
        self.downloaded
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// 真实大小是否已从披露头解析到；false 表示 `total` 仍是占位值。
    pub fn size_resolved(&self) -> bool {
        self.size_resolved
    }

    pub fn is_complete(&self) -> bool {
        self.downloaded >= self.total
    }

    /// 下一个窗口：`[downloaded, min(downloaded + window, total) - 1]`。
    /// 只能在未完成时调用。
    pub fn next_window(&self, window_size: u64) -> RangeWindow {
        let stop = (self.downloaded + window_size).min(self.total) - 1;
        RangeWindow {
            start: self.downloaded,
            stop,
        }
    }

    /// 记录一块产出。
    pub fn record(&mut self, len: u64) {
        self.downloaded += len;
    }

    /// 用服务端披露的真实大小替换占位值。
    pub fn resolve_total(&mut self, total: u64) {
        self.total = total;
        self.size_resolved = true;
    }
}

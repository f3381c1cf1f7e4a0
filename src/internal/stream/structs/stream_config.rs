/// 默认块大小：4KB
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// 默认 Range 窗口大小：9MB
pub const DEFAULT_WINDOW_SIZE: u64 = 9 * 1024 * 1024;

/// 本次流式调用的配置；两个值都必须大于 0。
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// 每次向调用方产出的块大小（字节）
    pub chunk_size: usize,
    /// 每个 Range 窗口的大小（字节）
    pub window_size: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl StreamConfig {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_window_size(mut self, window_size: u64) -> Self {
        self.window_size = window_size;
        self
    }
}

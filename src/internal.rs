/// 内部模块划分：传输层 / 端点 / 流式下载 / 大小解析
pub mod endpoint;
pub mod size;
pub mod stream;
pub mod transport;

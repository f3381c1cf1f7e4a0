pub mod range_chunk_stream;
pub mod segment_cursor;
pub mod seq_segment_stream;
pub mod stream_config;
pub mod stream_error;
pub mod stream_state;

// 重导出公共类型
pub use range_chunk_stream::RangeChunkStream;
pub use segment_cursor::SegmentCursor;
pub use seq_segment_stream::SequentialSegmentStream;
pub use stream_config::{DEFAULT_CHUNK_SIZE, DEFAULT_WINDOW_SIZE, StreamConfig};
pub use stream_error::StreamError;
pub use stream_state::{RangeWindow, StreamState};

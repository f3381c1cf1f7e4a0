/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出两个流式下载入口，最常用，直接放在根上
pub use internal::stream::structs::range_chunk_stream::RangeChunkStream;
pub use internal::stream::structs::seq_segment_stream::SequentialSegmentStream;

pub mod transport {
    use crate::internal;
    pub use internal::transport::enums::Method;
    pub use internal::transport::structs::http_transport::HttpTransport;
    pub use internal::transport::structs::response_head::{HeaderNotFound, ResponseHead};
    pub use internal::transport::structs::transport_error::TransportError;
    pub use internal::transport::traits::transport::{
        ResponseBody, Transport, TransportRequest, TransportResponse,
    };

    /// 对外提供无状态的基础请求能力，不限制死在流式入口中，以防有人自己要用
    pub mod functions {
        use crate::internal;
        pub use internal::transport::functions::requests::{get, head, post, read_to_end};
    }
}

pub mod endpoint {
    use crate::internal;
    pub use internal::endpoint::structs::sequence_endpoint::{SEQUENCE_PARAM, SequenceEndpoint};
}

pub mod stream {
    use crate::internal;
    pub use internal::stream::structs::*;

    pub mod functions {
        use crate::internal;
        pub use internal::stream::functions::content_range::total_from_content_range;
        pub use internal::stream::functions::segment_header::segment_count;
    }
}

pub mod size {
    use crate::internal;
    pub use internal::size::structs::size_cache::SizeCache;
    pub use internal::size::structs::size_resolver::SizeResolver;
}

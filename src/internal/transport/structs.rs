pub mod http_transport;
pub mod response_head;
pub mod transport_error;

// 重导出公共类型
pub use http_transport::HttpTransport;
pub use response_head::{HeaderNotFound, ResponseHead};
pub use transport_error::TransportError;

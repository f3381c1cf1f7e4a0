pub mod sequence_endpoint;

pub use sequence_endpoint::{SEQUENCE_PARAM, SequenceEndpoint};

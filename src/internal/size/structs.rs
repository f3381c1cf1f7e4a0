pub mod size_cache;
pub mod size_resolver;

// 重导出公共类型
pub use size_cache::SizeCache;
pub use size_resolver::SizeResolver;

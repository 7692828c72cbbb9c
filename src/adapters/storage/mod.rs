//! Storage adapters for the [`crate::ports::AnalysisRepository`] port.

mod file_repository;
mod in_memory_repository;

pub use file_repository::FileAnalysisRepository;
pub use in_memory_repository::InMemoryAnalysisRepository;

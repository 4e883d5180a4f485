// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_layout_repository;
pub mod http_artist_repository;
pub mod http_response;
#[cfg(test)]
pub mod memory_layout_repository;
pub mod persistence_worker;
pub mod sample_artist_repository;

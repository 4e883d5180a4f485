// Application layer - dashboard use cases and the ports they depend on
pub mod artist_repository;
pub mod artist_service;
pub mod chat_service;
pub mod dashboard_service;
pub mod error;
pub mod layout_repository;
pub mod layout_store;
pub mod mode_controller;

pub mod api;
pub mod config;
pub mod dharma_collective;
pub mod esalen;
pub mod events;
pub mod page;
pub mod render;

pub mod client;
pub mod memory;

pub use client::MetricsStore;
pub use memory::MemoryStore;

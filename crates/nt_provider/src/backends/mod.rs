pub mod hasura;
pub mod memory;

pub use hasura::HasuraProvider;
pub use memory::InMemoryProvider;

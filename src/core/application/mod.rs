pub mod executor;
pub mod resolver;

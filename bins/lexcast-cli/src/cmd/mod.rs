pub mod batch;
pub mod cast;
pub mod demo;

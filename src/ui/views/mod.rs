pub mod build;
pub mod plan;

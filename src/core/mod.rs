pub mod batch;
pub mod query;

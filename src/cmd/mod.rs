pub mod batch;
pub mod compute;
pub mod sweep;

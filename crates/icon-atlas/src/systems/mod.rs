pub mod placement;
pub mod resolve;

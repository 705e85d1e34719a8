pub mod atlas;
pub mod rect;
pub mod sprite;

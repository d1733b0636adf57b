pub mod graph;
pub mod play;

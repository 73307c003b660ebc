pub mod match_harness;
pub mod notation;
pub mod position_descriptor;
pub mod render_board;

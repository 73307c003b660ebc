pub mod alpha_beta;
pub mod board_scoring;

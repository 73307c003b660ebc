pub mod engine_alpha_beta;
pub mod engine_random;
pub mod engine_trait;

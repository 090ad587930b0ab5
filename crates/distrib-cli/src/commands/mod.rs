pub mod distribute;
pub mod generate;

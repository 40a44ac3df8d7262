pub mod configs;
pub mod energy;

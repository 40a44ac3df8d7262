pub mod climate_record;
pub mod energy_record;

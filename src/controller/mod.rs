pub mod energy_controller;

pub mod alias;
pub mod config;
pub mod model;

#[cfg(test)]
mod sim_test;

pub mod args;
pub mod dataset;
pub mod model;
pub mod processor;
pub mod utils;

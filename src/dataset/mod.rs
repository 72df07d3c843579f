pub mod dataset_structs;
pub mod loader;

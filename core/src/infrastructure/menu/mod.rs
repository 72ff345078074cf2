pub mod file_loader;
pub mod in_memory;

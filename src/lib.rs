pub mod assembly;
pub mod tools;
pub mod utils;

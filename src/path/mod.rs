mod iter;
mod serialize;
mod structured_path;

mod tests;

pub use iter::*;
pub use structured_path::*;

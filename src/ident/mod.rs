mod sanitize;


pub use sanitize::*;

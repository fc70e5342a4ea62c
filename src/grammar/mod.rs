//! The path grammar:
//!
//! ```text
//! FullPath   := '/' Domain ( '/' Subpath )?
//! Domain     := Label ( '@' Label )?
//! Label      := AlphaNum ( AlphaNum | '-' | '.' )*
//! Subpath    := Ident ( '/' Ident )*
//! Ident      := Alpha AlphaNum*
//! Alpha      := 'A'-'Z' | 'a'-'z' | '_'
//! AlphaNum   := Alpha | '0'-'9'
//! ```
//!
//! Domain labels may start with a digit and contain '-' and '.', identifiers may not.

pub(crate) mod chars;
mod cursor;
mod fault;
mod parse;
mod validate;


pub(crate) use cursor::*;
pub(crate) use fault::*;
pub use validate::*;

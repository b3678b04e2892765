//! Type kinds, representation categories, and the classifier for mmtype.
//!
//! This crate provides:
//! - [`Kind`] - The host type-kind taxonomy
//! - [`Reflect`] / [`Kinded`] - Type introspection for values and types
//! - [`Category`] - The closed set of representation categories
//! - [`type_of`], [`type_of_dyn`], [`category_of`] - The classifier
//! - [`Error`] - Classification errors
//!
//! # Example
//!
//! ```
//! use mmtype_classify::{Category, reflect_struct, type_of};
//!
//! struct Header {
//!     len: u64,
//!     flags: u32,
//! }
//! reflect_struct!(Header);
//!
//! let header = Header { len: 0, flags: 0 };
//! assert_eq!(type_of(&header).unwrap(), Category::Struct);
//! assert_eq!(type_of(&std::ptr::null::<u8>()).unwrap(), Category::UnsafePointer);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod classify;
pub mod error;
pub mod kind;
pub mod reflect;

pub use category::Category;
pub use classify::{category_of, type_of, type_of_dyn};
pub use error::{Error, ErrorKind, Result};
pub use kind::Kind;
pub use reflect::{Kinded, Reflect};

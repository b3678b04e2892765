//! mmtype - representation categories for memory-mapped marshaling
//!
//! This crate re-exports the classifier layer for convenient access.
//! For detailed documentation, see [`mmtype_classify`].
//!
//! # Example
//!
//! ```
//! use mmtype::{Category, type_of};
//!
//! assert_eq!(type_of(&42u32).unwrap(), Category::Numeric);
//! assert_eq!(type_of(&[1u8, 2, 3]).unwrap(), Category::Array);
//! assert!(type_of("hello").is_err());
//! ```

pub use mmtype_classify as classify;
pub use mmtype_classify::{
    Category, Error, ErrorKind, Kind, Kinded, Reflect, Result, category_of, type_of,
    type_of_dyn,
};
pub use mmtype_classify::{reflect_enum, reflect_struct};

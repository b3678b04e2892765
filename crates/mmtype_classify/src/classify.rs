//! The classifier: maps kinds to representation categories.

use crate::category::Category;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::reflect::{Kinded, Reflect};

/// Printed form of a value with no type information.
const NIL_REPR: &str = "nil";

impl Category {
    /// Maps a kind to its category.
    ///
    /// Every kind is listed explicitly. Kinds without a byte-layout strategy
    /// fail with [`ErrorKind::UnsupportedKind`](crate::ErrorKind::UnsupportedKind).
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is not numeric, array, struct, or raw pointer.
    pub fn from_kind(kind: Kind) -> Result<Category> {
        match kind {
            Kind::Bool
            | Kind::Char
            | Kind::I8
            | Kind::I16
            | Kind::I32
            | Kind::I64
            | Kind::I128
            | Kind::Isize
            | Kind::U8
            | Kind::U16
            | Kind::U32
            | Kind::U64
            | Kind::U128
            | Kind::Usize
            | Kind::F32
            | Kind::F64
            | Kind::Complex32
            | Kind::Complex64 => Ok(Category::Numeric),
            Kind::Array => Ok(Category::Array),
            Kind::Struct => Ok(Category::Struct),
            Kind::RawPointer => Ok(Category::UnsafePointer),
            Kind::Unit
            | Kind::Tuple
            | Kind::Enum
            | Kind::Str
            | Kind::String
            | Kind::Slice
            | Kind::Vec
            | Kind::Map
            | Kind::Set
            | Kind::Chan
            | Kind::Func
            | Kind::Interface
            | Kind::Pointer => Err(Error::unsupported_kind(kind)),
        }
    }
}

/// Returns the representation category of a value.
///
/// The result depends only on the value's type, never on its contents.
///
/// `value` is a reference to the value being classified. `type_of("hello")`
/// classifies the string slice itself; `type_of(&"hello")` classifies a
/// `&str`, which is a [`Kind::Pointer`].
///
/// # Errors
///
/// Returns [`ErrorKind::UnsupportedKind`](crate::ErrorKind::UnsupportedKind)
/// if the value's kind has no category.
pub fn type_of<T: Reflect + ?Sized>(value: &T) -> Result<Category> {
    Category::from_kind(value.kind())
}

/// Returns the representation category of a type-erased value.
///
/// `None` stands for a value with no type information at all.
///
/// # Errors
///
/// Returns [`ErrorKind::UnsupportedType`](crate::ErrorKind::UnsupportedType)
/// for `None`, and [`ErrorKind::UnsupportedKind`](crate::ErrorKind::UnsupportedKind)
/// if the value's kind has no category.
pub fn type_of_dyn(value: Option<&dyn Reflect>) -> Result<Category> {
    match value {
        Some(value) => type_of(value),
        None => Err(Error::unsupported_type(NIL_REPR)),
    }
}

/// Returns the representation category of a type, without a value.
///
/// # Errors
///
/// Returns [`ErrorKind::UnsupportedKind`](crate::ErrorKind::UnsupportedKind)
/// if the type's kind has no category.
pub fn category_of<T: Kinded + ?Sized>() -> Result<Category> {
    Category::from_kind(T::KIND)
}

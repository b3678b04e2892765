//! The host type-kind taxonomy.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Primitive classification of a Rust type.
///
/// Every type that implements [`Kinded`](crate::Kinded) reports exactly one
/// kind. The taxonomy is intentionally larger than the set of
/// [`Category`](crate::Category) values: most kinds have no byte-layout
/// strategy and are rejected by the classifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// `bool`.
    Bool,
    /// `char` (a 32-bit Unicode scalar value).
    Char,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `i128`.
    I128,
    /// `isize`.
    Isize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `u128`.
    U128,
    /// `usize`, the pointer-sized unsigned integer.
    Usize,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// Complex number with `f32` parts.
    Complex32,
    /// Complex number with `f64` parts.
    Complex64,
    /// Fixed-length array `[T; N]`.
    Array,
    /// Named aggregate of fields, including std structs such as `Duration`.
    Struct,
    /// Raw, unmanaged address (`*const T`, `*mut T`, `NonNull<T>`).
    RawPointer,
    /// The unit type `()`.
    Unit,
    /// Anonymous tuple.
    Tuple,
    /// Sum type (`Option`, `Result`, `Cow`, user enums).
    Enum,
    /// Unsized string slice (`str`, `OsStr`, `Path`, `CStr`).
    Str,
    /// Owned string (`String`, `OsString`, `PathBuf`, `CString`).
    String,
    /// Dynamically sized slice `[T]`.
    Slice,
    /// Growable sequence (`Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `BinaryHeap<T>`).
    Vec,
    /// Key-value collection.
    Map,
    /// Unique-element collection.
    Set,
    /// Channel endpoint.
    Chan,
    /// Function pointer.
    Func,
    /// Type-erased trait object (`dyn Any`).
    Interface,
    /// Typed, managed reference (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`).
    Pointer,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 34] = [
        Self::Bool,
        Self::Char,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::Isize,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::Usize,
        Self::F32,
        Self::F64,
        Self::Complex32,
        Self::Complex64,
        Self::Array,
        Self::Struct,
        Self::RawPointer,
        Self::Unit,
        Self::Tuple,
        Self::Enum,
        Self::Str,
        Self::String,
        Self::Slice,
        Self::Vec,
        Self::Map,
        Self::Set,
        Self::Chan,
        Self::Func,
        Self::Interface,
        Self::Pointer,
    ];

    /// All numeric kinds: booleans, integers, floats, and complex numbers.
    pub const NUMERIC: [Kind; 18] = [
        Self::Bool,
        Self::Char,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::Isize,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::Usize,
        Self::F32,
        Self::F64,
        Self::Complex32,
        Self::Complex64,
    ];

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Complex32 => "complex32",
            Self::Complex64 => "complex64",
            Self::Array => "array",
            Self::Struct => "struct",
            Self::RawPointer => "raw pointer",
            Self::Unit => "unit",
            Self::Tuple => "tuple",
            Self::Enum => "enum",
            Self::Str => "string slice",
            Self::String => "string",
            Self::Slice => "slice",
            Self::Vec => "vec",
            Self::Map => "map",
            Self::Set => "set",
            Self::Chan => "chan",
            Self::Func => "fn",
            Self::Interface => "interface",
            Self::Pointer => "pointer",
        }
    }

    /// Returns true if this kind is a boolean, integer, float, or complex scalar.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Char
                | Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
                | Self::Usize
                | Self::F32
                | Self::F64
                | Self::Complex32
                | Self::Complex64
        )
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

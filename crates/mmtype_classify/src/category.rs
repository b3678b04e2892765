//! Representation categories.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Closed set of representation categories.
///
/// A marshaling layer branches on the category to pick how a value's bytes
/// are copied. The set is fixed: there is no way to add a category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Category {
    /// No category. Only ever paired with an error.
    #[default]
    Invalid = 0,
    /// Boolean, integer, float, or complex scalar.
    Numeric = 1,
    /// Fixed-length homogeneous aggregate.
    Array = 2,
    /// Named heterogeneous aggregate.
    Struct = 3,
    /// Raw, unmanaged address.
    UnsafePointer = 4,
}

impl Category {
    /// Every category, in tag order.
    pub const ALL: [Category; 5] = [
        Self::Invalid,
        Self::Numeric,
        Self::Array,
        Self::Struct,
        Self::UnsafePointer,
    ];

    /// Returns the numeric tag of this category.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns false only for [`Category::Invalid`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Returns the lowercase name of this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Numeric => "numeric",
            Self::Array => "array",
            Self::Struct => "struct",
            Self::UnsafePointer => "unsafe_pointer",
        }
    }

    /// Collapses a classification result to its category.
    ///
    /// Errors map to [`Category::Invalid`].
    #[must_use]
    pub fn of_result(result: &Result<Category>) -> Category {
        match result {
            Ok(category) => *category,
            Err(err) => err.category(),
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Invalid),
            1 => Ok(Self::Numeric),
            2 => Ok(Self::Array),
            3 => Ok(Self::Struct),
            4 => Ok(Self::UnsafePointer),
            _ => Err(Error::invalid_tag(tag)),
        }
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.as_u8()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

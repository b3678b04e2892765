//! Type introspection for values and types.
//!
//! Rust has no runtime reflection, so kinds are attached to types through
//! [`Kinded`]. [`Reflect`] is the object-safe view of the same information,
//! usable behind `&dyn Reflect` when the concrete type is erased.
//!
//! Standard library types are covered here. User structs and enums opt in
//! with [`reflect_struct!`](crate::reflect_struct) and
//! [`reflect_enum!`](crate::reflect_enum).

use std::any::Any;
use std::borrow::Cow;
use std::cell::{Cell, RefCell, UnsafeCell};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CStr, CString, OsStr, OsString};
use std::marker::{PhantomData, PhantomPinned};
use std::mem::ManuallyDrop;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Saturating, Wrapping,
};
use std::ops::{Range, RangeFrom, RangeInclusive, RangeTo};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::atomic::{
    AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicIsize, AtomicPtr, AtomicU8, AtomicU16,
    AtomicU32, AtomicUsize,
};
#[cfg(target_has_atomic = "64")]
use std::sync::atomic::{AtomicI64, AtomicU64};
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::{Duration, Instant, SystemTime};

use num_complex::Complex;

use crate::kind::Kind;

/// A type with a statically known kind.
pub trait Kinded {
    /// The kind of every value of this type.
    const KIND: Kind;
}

/// Runtime access to a value's kind.
///
/// Implemented for every [`Kinded`] type. Use `&dyn Reflect` to pass values
/// whose concrete type is not known to the caller.
///
/// Smart pointers are values too: `boxed.kind()` on a `Box<dyn Reflect>`
/// reports [`Kind::Pointer`]. Call `(*boxed).kind()` to reach the erased
/// value.
pub trait Reflect {
    /// Returns the kind of this value's type.
    fn kind(&self) -> Kind;
}

impl<T: Kinded + ?Sized> Reflect for T {
    fn kind(&self) -> Kind {
        T::KIND
    }
}

macro_rules! impl_kinded {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Kinded for $ty {
                const KIND: Kind = Kind::$kind;
            }
        )+
    };
}

impl_kinded!(Bool => bool);
impl_kinded!(Char => char);
impl_kinded!(I8 => i8);
impl_kinded!(I16 => i16);
impl_kinded!(I32 => i32);
impl_kinded!(I64 => i64);
impl_kinded!(I128 => i128);
impl_kinded!(Isize => isize);
impl_kinded!(U8 => u8);
impl_kinded!(U16 => u16);
impl_kinded!(U32 => u32);
impl_kinded!(U64 => u64);
impl_kinded!(U128 => u128);
impl_kinded!(Usize => usize);
impl_kinded!(F32 => f32);
impl_kinded!(F64 => f64);
impl_kinded!(Complex32 => Complex<f32>);
impl_kinded!(Complex64 => Complex<f64>);
impl_kinded!(Unit => ());
impl_kinded!(Str => str, OsStr, Path, CStr);
impl_kinded!(String => String, OsString, PathBuf, CString);
impl_kinded!(Interface => dyn Any, dyn Any + Send, dyn Any + Send + Sync);

impl<T, const N: usize> Kinded for [T; N] {
    const KIND: Kind = Kind::Array;
}

impl<T: ?Sized> Kinded for *const T {
    const KIND: Kind = Kind::RawPointer;
}

impl<T: ?Sized> Kinded for *mut T {
    const KIND: Kind = Kind::RawPointer;
}

impl<T: ?Sized> Kinded for NonNull<T> {
    const KIND: Kind = Kind::RawPointer;
}

// Managed references: typed, with ownership tracked by the compiler.

impl<T: ?Sized> Kinded for &T {
    const KIND: Kind = Kind::Pointer;
}

impl<T: ?Sized> Kinded for &mut T {
    const KIND: Kind = Kind::Pointer;
}

impl<T: ?Sized> Kinded for Box<T> {
    const KIND: Kind = Kind::Pointer;
}

impl<T: ?Sized> Kinded for Rc<T> {
    const KIND: Kind = Kind::Pointer;
}

impl<T: ?Sized> Kinded for Arc<T> {
    const KIND: Kind = Kind::Pointer;
}

impl<T> Kinded for [T] {
    const KIND: Kind = Kind::Slice;
}

impl<T> Kinded for Vec<T> {
    const KIND: Kind = Kind::Vec;
}

impl<T> Kinded for VecDeque<T> {
    const KIND: Kind = Kind::Vec;
}

impl<K, V, S> Kinded for HashMap<K, V, S> {
    const KIND: Kind = Kind::Map;
}

impl<K, V> Kinded for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;
}

impl<T, S> Kinded for HashSet<T, S> {
    const KIND: Kind = Kind::Set;
}

impl<T> Kinded for BTreeSet<T> {
    const KIND: Kind = Kind::Set;
}

impl<T> Kinded for Sender<T> {
    const KIND: Kind = Kind::Chan;
}

impl<T> Kinded for SyncSender<T> {
    const KIND: Kind = Kind::Chan;
}

impl<T> Kinded for Receiver<T> {
    const KIND: Kind = Kind::Chan;
}

impl<T> Kinded for Option<T> {
    const KIND: Kind = Kind::Enum;
}

impl<T, E> Kinded for Result<T, E> {
    const KIND: Kind = Kind::Enum;
}

impl<B: ?Sized + ToOwned> Kinded for Cow<'_, B> {
    const KIND: Kind = Kind::Enum;
}

impl_kinded!(Enum => Ordering, IpAddr, SocketAddr);

impl<T> Kinded for LinkedList<T> {
    const KIND: Kind = Kind::Vec;
}

impl<T> Kinded for BinaryHeap<T> {
    const KIND: Kind = Kind::Vec;
}

// Standard library structs. Downstream crates cannot declare these with
// `reflect_struct!`, so they are covered here.

impl_kinded!(Struct =>
    Duration,
    Instant,
    SystemTime,
    PhantomPinned,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddrV4,
    SocketAddrV6,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    AtomicBool,
    AtomicI8,
    AtomicI16,
    AtomicI32,
    AtomicIsize,
    AtomicU8,
    AtomicU16,
    AtomicU32,
    AtomicUsize,
);

#[cfg(target_has_atomic = "64")]
impl_kinded!(Struct => AtomicI64, AtomicU64);

macro_rules! impl_kinded_wrapper {
    (?Sized => $($wrapper:ident),+ $(,)?) => {
        $(
            impl<T: ?Sized> Kinded for $wrapper<T> {
                const KIND: Kind = Kind::Struct;
            }
        )+
    };
    ($($wrapper:ident),+ $(,)?) => {
        $(
            impl<T> Kinded for $wrapper<T> {
                const KIND: Kind = Kind::Struct;
            }
        )+
    };
}

impl_kinded_wrapper!(?Sized =>
    PhantomData,
    ManuallyDrop,
    Cell,
    RefCell,
    UnsafeCell,
    Mutex,
    RwLock,
);

impl_kinded_wrapper!(
    OnceLock,
    Wrapping,
    Saturating,
    Reverse,
    Range,
    RangeInclusive,
    RangeFrom,
    RangeTo,
    AtomicPtr,
);

macro_rules! impl_kinded_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Kinded for ($($name,)+) {
            const KIND: Kind = Kind::Tuple;
        }
    };
}

impl_kinded_tuple!(A);
impl_kinded_tuple!(A, B);
impl_kinded_tuple!(A, B, C);
impl_kinded_tuple!(A, B, C, D);
impl_kinded_tuple!(A, B, C, D, E);
impl_kinded_tuple!(A, B, C, D, E, F);
impl_kinded_tuple!(A, B, C, D, E, F, G);
impl_kinded_tuple!(A, B, C, D, E, F, G, H);

macro_rules! impl_kinded_fn {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Kinded for fn($($arg),*) -> R {
            const KIND: Kind = Kind::Func;
        }

        impl<R, $($arg),*> Kinded for unsafe fn($($arg),*) -> R {
            const KIND: Kind = Kind::Func;
        }

        impl<R, $($arg),*> Kinded for extern "C" fn($($arg),*) -> R {
            const KIND: Kind = Kind::Func;
        }

        impl<R, $($arg),*> Kinded for unsafe extern "C" fn($($arg),*) -> R {
            const KIND: Kind = Kind::Func;
        }
    };
}

impl_kinded_fn!();
impl_kinded_fn!(A);
impl_kinded_fn!(A, B);
impl_kinded_fn!(A, B, C);
impl_kinded_fn!(A, B, C, D);
impl_kinded_fn!(A, B, C, D, E);
impl_kinded_fn!(A, B, C, D, E, F);
impl_kinded_fn!(A, B, C, D, E, F, G);
impl_kinded_fn!(A, B, C, D, E, F, G, H);
impl_kinded_fn!(A, B, C, D, E, F, G, H, I);
impl_kinded_fn!(A, B, C, D, E, F, G, H, I, J);
impl_kinded_fn!(A, B, C, D, E, F, G, H, I, J, K);
impl_kinded_fn!(A, B, C, D, E, F, G, H, I, J, K, L);

// Higher-ranked function pointers taking a borrowed first argument, the
// shape of most callbacks over `&T` / `&mut T`. They are distinct types
// from `fn(&'x A) -> R` for any single lifetime `'x`.
macro_rules! impl_kinded_fn_borrowed {
    ($($arg:ident),*) => {
        #[allow(coherence_leak_check)]
        impl<R, A0: ?Sized, $($arg),*> Kinded for for<'a> fn(&'a A0, $($arg),*) -> R {
            const KIND: Kind = Kind::Func;
        }

        #[allow(coherence_leak_check)]
        impl<R, A0: ?Sized, $($arg),*> Kinded for for<'a> fn(&'a mut A0, $($arg),*) -> R {
            const KIND: Kind = Kind::Func;
        }
    };
}

impl_kinded_fn_borrowed!();
impl_kinded_fn_borrowed!(A);
impl_kinded_fn_borrowed!(A, B);
impl_kinded_fn_borrowed!(A, B, C);

/// Declares one or more types as structs.
///
/// ```
/// use mmtype_classify::{Category, reflect_struct, type_of};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
/// struct Wrapper<T>(T);
///
/// reflect_struct!(Point);
/// reflect_struct!(impl<T> Wrapper<T>);
///
/// assert_eq!(type_of(&Point { x: 0.0, y: 1.0 }).unwrap(), Category::Struct);
/// assert_eq!(type_of(&Wrapper(1u8)).unwrap(), Category::Struct);
/// ```
#[macro_export]
macro_rules! reflect_struct {
    (impl<$($param:ident),+> $ty:ty) => {
        impl<$($param),+> $crate::Kinded for $ty {
            const KIND: $crate::Kind = $crate::Kind::Struct;
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Kinded for $ty {
                const KIND: $crate::Kind = $crate::Kind::Struct;
            }
        )+
    };
}

/// Declares one or more types as enums.
///
/// Enums have no representation category, so classifying one fails.
#[macro_export]
macro_rules! reflect_enum {
    (impl<$($param:ident),+> $ty:ty) => {
        impl<$($param),+> $crate::Kinded for $ty {
            const KIND: $crate::Kind = $crate::Kind::Enum;
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Kinded for $ty {
                const KIND: $crate::Kind = $crate::Kind::Enum;
            }
        )+
    };
}

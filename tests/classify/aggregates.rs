//! Integration tests for array, struct, and raw pointer classification

use std::cell::Cell;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::net::Ipv4Addr;
use std::num::{NonZeroU32, Wrapping};
use std::ptr::NonNull;
use std::sync::Mutex;
use std::sync::atomic::AtomicU32;
use std::time::Duration;

use mmtype::{Category, Reflect, category_of, reflect_struct, type_of, type_of_dyn};
use proptest::prelude::*;

struct Empty;

struct Header {
    _magic: u32,
    _len: u64,
}

struct Named {
    _name: String,
    _tags: Vec<String>,
}

struct Tagged<T> {
    _tag: u8,
    _value: T,
}

reflect_struct!(Empty, Header, Named);
reflect_struct!(impl<T> Tagged<T>);

// =============================================================================
// Arrays
// =============================================================================

#[test]
fn array_of_ints() {
    assert_eq!(type_of(&[1, 2, 3]).unwrap(), Category::Array);
}

#[test]
fn array_of_any_element() {
    assert_eq!(type_of(&[0u8; 0]).unwrap(), Category::Array);
    assert_eq!(type_of(&[[0.0f32; 4]; 4]).unwrap(), Category::Array);
    assert_eq!(type_of(&[String::new(), String::new()]).unwrap(), Category::Array);
    assert_eq!(type_of(&[Empty, Empty]).unwrap(), Category::Array);
}

#[test]
fn slices_and_vecs_are_not_arrays() {
    let arr = [1u8, 2, 3];
    assert!(type_of(&arr[..]).is_err());
    assert!(type_of(&arr.to_vec()).is_err());
}

// =============================================================================
// Structs
// =============================================================================

#[test]
fn single_field_struct() {
    struct X {
        _x: i64,
    }
    reflect_struct!(X);
    assert_eq!(type_of(&X { _x: 1 }).unwrap(), Category::Struct);
}

#[test]
fn empty_struct() {
    assert_eq!(type_of(&Empty).unwrap(), Category::Struct);
}

#[test]
fn field_composition_does_not_matter() {
    let header = Header { _magic: 0xCAFE, _len: 8 };
    let named = Named { _name: "a".to_string(), _tags: vec![] };
    assert_eq!(type_of(&header).unwrap(), Category::Struct);
    assert_eq!(type_of(&named).unwrap(), Category::Struct);
}

#[test]
fn generic_struct() {
    assert_eq!(type_of(&Tagged { _tag: 1, _value: 2.0f64 }).unwrap(), Category::Struct);
    assert_eq!(category_of::<Tagged<Vec<u8>>>().unwrap(), Category::Struct);
}

#[test]
fn std_structs() {
    assert_eq!(type_of(&Duration::from_secs(1)).unwrap(), Category::Struct);
    assert_eq!(type_of(&Ipv4Addr::LOCALHOST).unwrap(), Category::Struct);
    assert_eq!(type_of(&NonZeroU32::MIN).unwrap(), Category::Struct);
    assert_eq!(type_of(&AtomicU32::new(0)).unwrap(), Category::Struct);
}

#[test]
fn std_generic_wrappers() {
    assert_eq!(type_of(&PhantomData::<String>).unwrap(), Category::Struct);
    assert_eq!(type_of(&Wrapping(7u8)).unwrap(), Category::Struct);
    assert_eq!(type_of(&(0..10)).unwrap(), Category::Struct);
    assert_eq!(type_of(&(0..=10)).unwrap(), Category::Struct);
    assert_eq!(type_of(&ManuallyDrop::new(5u64)).unwrap(), Category::Struct);
    assert_eq!(type_of(&Cell::new(1i32)).unwrap(), Category::Struct);
    assert_eq!(type_of(&Mutex::new(vec![1u8])).unwrap(), Category::Struct);
}

// =============================================================================
// Raw Pointers
// =============================================================================

#[test]
fn raw_pointers() {
    let mut x = 5u32;
    assert_eq!(type_of(&std::ptr::from_ref(&x)).unwrap(), Category::UnsafePointer);
    assert_eq!(type_of(&std::ptr::from_mut(&mut x)).unwrap(), Category::UnsafePointer);
    assert_eq!(type_of(&NonNull::from(&x)).unwrap(), Category::UnsafePointer);
    assert_eq!(
        type_of(&std::ptr::null::<std::ffi::c_void>()).unwrap(),
        Category::UnsafePointer
    );
}

#[test]
fn references_are_not_raw_pointers() {
    let x = 5u32;
    let r = &x;
    assert!(type_of(&r).is_err());
    assert!(type_of(&Box::new(x)).is_err());
}

// =============================================================================
// Erased Values
// =============================================================================

#[test]
fn erased_values() {
    let header = Header { _magic: 1, _len: 2 };
    let values: [&dyn Reflect; 4] = [&1u8, &[0u8; 16], &header, &std::ptr::null::<u8>()];
    let categories: Vec<Category> = values
        .iter()
        .map(|v| type_of_dyn(Some(*v)).unwrap())
        .collect();
    assert_eq!(
        categories,
        vec![
            Category::Numeric,
            Category::Array,
            Category::Struct,
            Category::UnsafePointer
        ]
    );
}

#[test]
fn repeated_calls_agree() {
    let header = Header { _magic: 1, _len: 2 };
    assert_eq!(type_of(&header), type_of(&header));
}

proptest! {
    #[test]
    fn struct_ignores_contents(magic in any::<u32>(), len in any::<u64>()) {
        let header = Header { _magic: magic, _len: len };
        prop_assert_eq!(type_of(&header).unwrap(), Category::Struct);
    }

    #[test]
    fn pointer_ignores_address(addr in any::<usize>()) {
        let ptr = std::ptr::without_provenance::<u8>(addr);
        prop_assert_eq!(type_of(&ptr).unwrap(), Category::UnsafePointer);
    }
}

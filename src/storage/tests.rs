use super::*;
use arrayvec::ArrayVec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
#[test]
fn vec_keys_are_indices() {
    let mut storage = <Vec<char> as Storage>::new();
    assert!(Storage::is_empty(&storage));
    assert_eq!(storage.add('a'), 0);
    assert_eq!(storage.add('b'), 1);
    assert_eq!(Storage::len(&storage), 2);
    assert!(storage.contains_key(&1));
    assert!(!storage.contains_key(&2));
    assert_eq!(Storage::get(&storage, &1), Some(&'b'));
    assert_eq!(Storage::get(&storage, &2), None);

    // Growing the buffer does not change what a key refers to
    Storage::reserve(&mut storage, 100);
    assert!(Storage::capacity(&storage) >= 102);
    for c in 'c'..='z' {
        storage.add(c);
    }
    assert_eq!(Storage::get(&storage, &0), Some(&'a'));
    Storage::shrink_to_fit(&mut storage);
    assert_eq!(Storage::get(&storage, &25), Some(&'z'));
}

#[test]
fn arrayvec_has_fixed_capacity() {
    let mut storage = <ArrayVec<[u8; 3]> as Storage>::new();
    assert_eq!(Storage::capacity(&storage), 3);
    assert_eq!(storage.add(10), 0);
    if let Some(element) = Storage::get_mut(&mut storage, &0) {
        *element += 1;
    }
    assert_eq!(Storage::get(&storage, &0), Some(&11));
    assert!(!storage.contains_key(&1));
}

#[test]
#[should_panic(expected = "does not match")]
fn arrayvec_capacity_mismatch_panics() {
    let _ = <ArrayVec<[u8; 3]> as Storage>::with_capacity(4);
}

#[test]
#[should_panic(expected = "storage is full")]
fn arrayvec_overflow_panics() {
    let mut storage = <ArrayVec<[u8; 1]> as Storage>::new();
    storage.add(1);
    storage.add(2);
}

#[test]
fn arrayvec_reserve_within_capacity() {
    let mut storage = <ArrayVec<[u8; 3]> as Storage>::new();
    storage.add(1);
    Storage::reserve(&mut storage, 2);
    assert_eq!(Storage::capacity(&storage), 3);
}

#[test]
#[should_panic(expected = "cannot grow past 3 elements")]
fn arrayvec_reserve_past_capacity_panics() {
    let mut storage = <ArrayVec<[u8; 3]> as Storage>::new();
    storage.add(1);
    Storage::reserve(&mut storage, 3);
}

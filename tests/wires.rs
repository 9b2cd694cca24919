//! `Wires` construction, access and equality

use ndarray::array;
use qwires::{Value, WireError, Wires};

#[test]
fn test_error_for_repeated_indices() {
    let from_array = Wires::try_from(&array![4.0, 1.0, 1.0, 3.0].into_dyn());
    let from_list = Wires::new([4, 1, 1, 3]);
    let from_vec = Wires::try_from(vec![4_i64, 1, 1, 3]);

    for result in [from_array, from_list, from_vec] {
        let err = result.unwrap_err();
        assert!(err
            .to_string()
            .contains("Each wire must be represented by a unique index"));
    }
}

#[test]
fn test_integerlike_indices_converted_to_integers() {
    let from_array = Wires::try_from(&array![4., 1., 0., 3.].into_dyn()).unwrap();
    let from_list = Wires::new([4., 1., 0., 3.]).unwrap();

    for wires in [from_array, from_list] {
        let collected: Vec<usize> = wires.iter().collect();
        assert_eq!(collected, vec![4, 1, 0, 3]);
    }
}

#[test]
fn test_error_for_non_integerlike_indices() {
    let cases = [
        Wires::try_from(&array![4., 1.2, 0., 3.].into_dyn()),
        Wires::new([4., 1., 0., 3.0001]),
        Wires::new(["a", "b", "c", "d"]),
    ];

    for result in cases {
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Wire indices must be integers"));
    }
}

#[test]
fn test_error_for_negative_indices() {
    let err = Wires::new([8, -1, 0, 5]).unwrap_err();
    assert!(err.to_string().contains("Wire indices must be non-negative"));
    assert_eq!(err, WireError::Negative { value: -1 });
}

#[test]
fn test_indexing() {
    let expected = [4_usize, 1, 0, 3];
    let cases = [
        Wires::try_from(&array![4., 1., 0., 3.].into_dyn()).unwrap(),
        Wires::new([4, 1, 0, 3]).unwrap(),
        Wires::try_from(Value::from(vec![4, 1, 0, 3])).unwrap(),
    ];

    for wires in cases {
        for (i, &wire) in expected.iter().enumerate() {
            assert_eq!(wires[i], wire);
            assert_eq!(wires.get(i), Some(wire));
        }
        assert_eq!(wires.get(4), None);
    }

    let range = Wires::from(0..4);
    for i in 0..4 {
        assert_eq!(range[i], i);
    }
}

#[test]
fn test_slicing() {
    let wires = Wires::new([1, 2, 3]).unwrap();
    assert_eq!(&wires[..2], &[1, 2]);
    assert_eq!(&wires[1..], &[2, 3]);
}

#[test]
fn test_length() {
    let wires = Wires::new([1, 2, 3, 4, 5]).unwrap();
    assert_eq!(wires.len(), 5);
    assert!(!wires.is_empty());
    assert!(Wires::new(Vec::<i64>::new()).unwrap().is_empty());
}

#[test]
fn test_retrieving_index() {
    let wires = Wires::new([1, 2, 3, 4, 5]).unwrap();
    assert_eq!(wires.index(4), Some(3));
    assert_eq!(wires.index(9), None);
    assert!(wires.contains(5));
}

#[test]
fn test_min_max() {
    let wires = Wires::new([1, 2, 13, 4, 5]).unwrap();
    assert_eq!(wires.max(), Some(13));
    assert_eq!(wires.min(), Some(1));
    assert_eq!(Wires::default().max(), None);
}

#[test]
fn test_equality() {
    let wires = Wires::new([0, 2, 1]).unwrap();
    assert_eq!(wires, Wires::new([0., 2., 1.]).unwrap());
    assert_eq!(wires, vec![0, 2, 1]);
    assert_eq!(wires, [0, 2, 1]);
    assert_ne!(wires, [0, 1, 2]);
    assert_eq!(wires.as_slice(), &[0, 2, 1]);
}

#[test]
fn test_iteration_preserves_order() {
    let wires = Wires::new([3, 0, 2]).unwrap();
    let by_ref: Vec<usize> = (&wires).into_iter().collect();
    let owned: Vec<usize> = wires.into_iter().collect();
    assert_eq!(by_ref, vec![3, 0, 2]);
    assert_eq!(owned, by_ref);
}

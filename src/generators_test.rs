// Unit tests for numeric generators

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_odd_stream_values() {
    let values: Vec<u64> = GeneratorKind::Odd.stream().take(5).collect();
    assert_eq!(values, vec![1, 3, 5, 7, 9]);

    // n-th value is 2n - 1
    for (i, v) in GeneratorKind::Odd.stream().take(100).enumerate() {
        let n = (i + 1) as u64;
        assert_eq!(v, 2 * n - 1);
    }
}

#[test]
fn test_even_stream_values() {
    let values: Vec<u64> = GeneratorKind::Even.stream().take(5).collect();
    assert_eq!(values, vec![2, 4, 6, 8, 10]);

    // n-th value is 2n
    for (i, v) in GeneratorKind::Even.stream().take(100).enumerate() {
        let n = (i + 1) as u64;
        assert_eq!(v, 2 * n);
    }
}

#[test]
fn test_counting_stream_defaults_to_one() {
    let values: Vec<u64> = GeneratorKind::counting(None).stream().take(4).collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[test]
fn test_counting_stream_custom_start() {
    let values: Vec<u64> = GeneratorKind::counting(Some(5)).stream().take(3).collect();
    assert_eq!(values, vec![5, 6, 7]);
}

#[test]
fn test_stream_is_fresh_per_call() {
    let kind = GeneratorKind::Odd;
    let mut first = kind.stream();
    first.next();
    first.next();

    // A second stream starts over from the beginning
    let mut second = kind.stream();
    assert_eq!(second.next(), Some(1));
}

#[test]
fn test_parse_generator_kind() {
    assert_eq!("odd".parse::<GeneratorKind>().unwrap(), GeneratorKind::Odd);
    assert_eq!("EVEN".parse::<GeneratorKind>().unwrap(), GeneratorKind::Even);
    assert_eq!(
        "int".parse::<GeneratorKind>().unwrap(),
        GeneratorKind::Counting { start: 1 }
    );
    assert_eq!(
        "int:42".parse::<GeneratorKind>().unwrap(),
        GeneratorKind::Counting { start: 42 }
    );
    // Invalid start falls back to the default
    assert_eq!(
        "int:abc".parse::<GeneratorKind>().unwrap(),
        GeneratorKind::Counting { start: 1 }
    );
    assert!("fibonacci".parse::<GeneratorKind>().is_err());
}

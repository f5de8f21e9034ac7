use keysort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m_against_std() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<u64> = (0..count).map(|_| rng.random_range(0..100_000)).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    let output = sorted_by(&input, |&n| n);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(output.len(), count);
    assert!(output.windows(2).all(|w| w[0] <= w[1]));

    let mut expected = input.clone();
    expected.sort();
    assert_eq!(output, expected);
}

#[test]
fn test_indices_1m_are_a_permutation() {
    let count = 1_000_000;

    let mut rng = rand::rng();
    let input: Vec<u32> = (0..count).map(|_| rng.random()).collect();

    let indices = sort_indices_by(&input, |&n| n);

    assert_eq!(indices.len(), count);

    let mut seen = vec![false; count];
    for &i in &indices {
        assert!(!seen[i], "index {} appears twice", i);
        seen[i] = true;
    }

    for w in indices.windows(2) {
        assert!(input[w[0]] <= input[w[1]]);
    }
}

#[test]
fn test_sort_random_strings_against_std() {
    let count = 50_000;

    let mut rng = rand::rng();
    let input: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(4..16);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect();

    let output = sorted_by(&input, |s| s.clone());

    let mut expected = input.clone();
    expected.sort();
    assert_eq!(output, expected);
}

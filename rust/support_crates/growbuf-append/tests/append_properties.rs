use std::sync::Arc;

use growbuf_append::{GrowthPolicy, append, append_with_policy};

#[derive(Debug, PartialEq, Eq)]
struct Record {
    id: u64,
    label: String,
}

fn random_records(rng: &mut fastrand::Rng, len: usize) -> Vec<Arc<Record>> {
    (0..len)
        .map(|_| {
            let id = rng.u64(..);
            Arc::new(Record {
                id,
                label: format!("record-{id}"),
            })
        })
        .collect()
}

#[test]
fn test_random_append_preserves_order_and_length() {
    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..200 {
        let base_len = rng.usize(0..40);
        let tail_len = rng.usize(0..40);
        let spare = rng.usize(0..40);

        let mut base = Vec::with_capacity(base_len + spare);
        base.extend(random_records(&mut rng, base_len));
        let tail = random_records(&mut rng, tail_len);
        let expected_base = base.clone();
        let fits = base.capacity() >= base_len + tail_len;
        let ptr = base.as_ptr();

        let combined = append(base, &tail);

        assert_eq!(combined.len(), base_len + tail_len);
        assert_eq!(&combined[..base_len], expected_base.as_slice());
        assert_eq!(&combined[base_len..], tail.as_slice());
        if fits {
            assert_eq!(combined.as_ptr(), ptr);
        } else {
            assert_ne!(combined.as_ptr(), ptr);
        }
    }
}

#[test]
fn test_append_shares_records_with_tail() {
    let mut rng = fastrand::Rng::with_seed(42);
    let tail = random_records(&mut rng, 3);
    let combined = append(Vec::new(), &tail);
    for (a, b) in combined.iter().zip(tail.iter()) {
        assert!(Arc::ptr_eq(a, b));
    }
    assert_eq!(Arc::strong_count(&tail[0]), 2);
}

#[test]
fn test_reallocation_does_not_clone_base_elements() {
    let mut rng = fastrand::Rng::with_seed(7);
    let base = random_records(&mut rng, 4);
    let first = Arc::clone(&base[0]);
    assert_eq!(Arc::strong_count(&first), 2);

    let combined = append_with_policy(base, &random_records(&mut rng, 4), GrowthPolicy::Doubling);
    assert_eq!(combined.len(), 8);
    // Base elements are moved, not cloned.
    assert_eq!(Arc::strong_count(&first), 2);
}

#[test]
fn test_empty_operands() {
    let base = vec!["a".to_string(), "b".to_string()];
    assert_eq!(append(base.clone(), &[]), base);
    assert_eq!(append(Vec::new(), &base), base);
    assert!(append::<String>(Vec::new(), &[]).is_empty());
}

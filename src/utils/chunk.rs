//! Fixed-size partitioning of slices.

use crate::error_handling::ChunkError;

/// Splits `items` into contiguous chunks of `size` elements.
///
/// Every chunk holds exactly `size` elements except possibly the last, which
/// holds the remainder. The chunks borrow from `items`, so the input is never
/// copied or modified, and concatenating them yields `items` again.
///
/// An empty input produces no chunks.
///
/// # Errors
///
/// Returns `ChunkError::InvalidChunkSize` when `size <= 0`, even if `items` is empty.
pub fn chunk_slice<T>(items: &[T], size: i64) -> Result<Vec<&[T]>, ChunkError> {
    if size <= 0 {
        return Err(ChunkError::InvalidChunkSize(size));
    }

    // A size beyond the address space can only mean "everything in one chunk"
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    Ok(items.chunks(size).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Method;

    #[test]
    fn test_chunk_slice_invalid_sizes() {
        let cases: [(&[i32], i64); 5] = [
            (&[], 0),
            (&[], -1),
            (&[1], 0),
            (&[1], -1),
            (&[1, 2, 3], i64::MIN),
        ];

        for (items, size) in cases {
            assert_eq!(
                chunk_slice(items, size),
                Err(ChunkError::InvalidChunkSize(size)),
                "size {} should be rejected",
                size
            );
        }
    }

    #[test]
    fn test_chunk_slice_empty_input() {
        let items: Vec<i32> = Vec::new();
        let chunks = chunk_slice(&items, 2).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_slice_size_larger_than_input() {
        let items = [1];
        let chunks = chunk_slice(&items, 10).unwrap();
        assert_eq!(chunks, vec![&[1][..]]);
    }

    #[test]
    fn test_chunk_slice_exact_multiple() {
        let items = [1, 2, 3, 4];
        let chunks = chunk_slice(&items, 2).unwrap();
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn test_chunk_slice_remainder_in_last_chunk() {
        let items = [1, 2, 3];
        let chunks = chunk_slice(&items, 2).unwrap();
        assert_eq!(chunks, vec![&[1, 2][..], &[3][..]]);
    }

    #[test]
    fn test_chunk_slice_huge_size() {
        let items = [1, 2, 3];
        let chunks = chunk_slice(&items, i64::MAX).unwrap();
        assert_eq!(chunks, vec![&[1, 2, 3][..]]);
    }

    #[test]
    fn test_chunk_slice_concatenation_reproduces_input() {
        let items: Vec<u32> = (0..23).collect();

        for size in 1..=25 {
            let chunks = chunk_slice(&items, size).unwrap();

            let expected_count = items.len().div_ceil(size as usize);
            assert_eq!(chunks.len(), expected_count, "chunk count for size {}", size);

            for chunk in &chunks[..chunks.len() - 1] {
                assert_eq!(chunk.len(), size as usize);
            }

            let rejoined: Vec<u32> = chunks.concat();
            assert_eq!(rejoined, items, "round trip for size {}", size);
        }
    }

    #[test]
    fn test_chunk_slice_does_not_mutate_input() {
        let items = vec![
            Method::new(1, "GET"),
            Method::new(2, "POST"),
            Method::new(3, "PUT"),
        ];
        let snapshot = items.clone();

        let chunks = chunk_slice(&items, 2).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], &[Method::new(3, "PUT")][..]);

        assert_eq!(items, snapshot);
    }

    #[test]
    fn test_chunk_slice_borrows_from_input() {
        let items = [10, 20, 30];
        let chunks = chunk_slice(&items, 2).unwrap();
        // Chunks are views into the original storage, not copies
        assert!(std::ptr::eq(chunks[0].as_ptr(), items.as_ptr()));
        assert!(std::ptr::eq(chunks[1].as_ptr(), items[2..].as_ptr()));
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_chunks_rejoin_to_input(
            items in prop::collection::vec(any::<u32>(), 0..200),
            size in 1i64..64
        ) {
            let before = items.clone();
            let chunks = chunk_slice(&items, size).unwrap();
            let size = size as usize;

            prop_assert_eq!(chunks.len(), items.len().div_ceil(size));
            if let Some((last, full)) = chunks.split_last() {
                prop_assert!(full.iter().all(|chunk| chunk.len() == size));
                prop_assert!(!last.is_empty() && last.len() <= size);
            }
            prop_assert_eq!(chunks.concat(), before.clone());
            prop_assert_eq!(items, before, "Chunking must not modify the input");
        }

        #[test]
        fn test_non_positive_sizes_always_rejected(
            items in prop::collection::vec(any::<u32>(), 0..50),
            size in i64::MIN..=0
        ) {
            prop_assert_eq!(
                chunk_slice(&items, size),
                Err(ChunkError::InvalidChunkSize(size))
            );
        }
    }
}

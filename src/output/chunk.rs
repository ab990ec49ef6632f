/// Splits `items` into contiguous chunks of at most `size` elements,
/// preserving order. The last chunk may be shorter; empty input yields no
/// chunks.
///
/// `size` is a caller-provided constant; zero is a programming error.
#[must_use]
pub fn chunk<T>(items: &[T], size: usize) -> Vec<&[T]> {
    debug_assert!(size > 0, "chunk size must be positive");

    items.chunks(size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_within_limit_yields_one_chunk() {
        let items: Vec<u32> = (0..10).collect();

        let chunks = chunk(&items, 10);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 10);
    }

    #[test]
    fn one_over_the_limit_yields_a_full_and_a_single_chunk() {
        let items: Vec<u32> = (0..11).collect();

        let chunks = chunk(&items, 10);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 10);
        assert_eq!(chunks[1].len(), 1);
    }

    #[test]
    fn chunking_preserves_order_and_totality() {
        let items: Vec<u32> = (0..23).collect();

        let rejoined: Vec<u32> = chunk(&items, 5).concat();

        assert_eq!(rejoined, items);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        let items: Vec<u32> = Vec::new();

        assert!(chunk(&items, 10).is_empty());
    }
}

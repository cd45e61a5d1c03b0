//! Tests for the visited-cell bitset

#[cfg(test)]
mod tests {
    use wordfall::algorithm::bitset::CellSet;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = CellSet::new(9);
        assert!((0..9).all(|cell| !set.contains(cell)));

        set.insert(0);
        set.insert(4);
        set.insert(8);
        assert!(set.contains(4));
        assert!(!set.contains(5));

        set.remove(4);
        assert!(!set.contains(4));
        assert!(set.contains(0) && set.contains(8));
    }

    // Tests indices past the capacity are ignored
    // Verified by calling set without the bounds check
    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut set = CellSet::new(4);
        set.insert(4);
        set.insert(100);
        set.remove(100);
        assert!(!set.contains(4));
        assert!(!set.contains(100));
    }

    #[test]
    fn test_reinserting_after_remove() {
        let mut set = CellSet::new(3);
        set.insert(2);
        set.remove(2);
        set.insert(2);
        assert!(set.contains(2));
    }

    #[test]
    fn test_zero_capacity_set() {
        let set = CellSet::new(0);
        assert!(!set.contains(0));
    }
}

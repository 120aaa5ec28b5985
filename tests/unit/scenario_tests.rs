use forwardlist_rs::{Cursor, ForwardList, ForwardListError, swap};

#[cfg(test)]
mod tests {
    use super::*;

    fn to_vec(list: &ForwardList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    // --- front edits ---

    #[test]
    fn test_push_front_twice_on_empty_list() {
        let mut list = ForwardList::new();
        list.push_front(5);
        list.push_front(3);

        assert_eq!(to_vec(&list), vec![3, 5]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_erase_after_before_begin() {
        let mut list = ForwardList::from([1, 2, 3]);

        let mut position = list.before_begin_mut();
        let removed = position.erase_after();
        assert_eq!(removed, Ok(1));
        // The node now following the erased one.
        assert_eq!(position.peek_next(), Some(&mut 2));

        assert_eq!(to_vec(&list), vec![2, 3]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_insert_after_before_begin() {
        let mut list = ForwardList::from([1, 2, 3]);

        let mut position = list.before_begin_mut();
        assert!(position.insert_after(0).is_ok());
        assert_eq!(position.current(), Some(&mut 0));

        assert_eq!(to_vec(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.len(), 4);
    }

    // --- comparisons ---

    #[test]
    fn test_lists_from_same_values_compare_equal() {
        let left = ForwardList::from([1, 2, 3]);
        let right = ForwardList::from([1, 2, 3]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_prefix_list_compares_less() {
        let short = ForwardList::from([1, 2]);
        let long = ForwardList::from([1, 2, 3]);
        assert!(short < long);
        assert!(ForwardList::from([1, 2, 9]) < ForwardList::from([1, 3]));
    }

    // --- positions ---

    #[test]
    fn test_consecutive_inserts_follow_the_cursor() {
        let mut list = ForwardList::from([1, 4]);

        let mut cursor = list.begin_mut();
        assert!(cursor.insert_after(2).is_ok());
        assert!(cursor.insert_after(3).is_ok());
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), Some(&mut 4));
        assert!(cursor.move_next().is_ok());
        assert!(cursor.is_end());
        assert_eq!(cursor.insert_after(5), Err(ForwardListError::PastTheEnd));

        assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_read_only_walk_matches_cached_length() {
        let list: ForwardList<i32> = (0..100).collect();

        let mut cursor = list.before_begin();
        let mut steps = 0;
        while cursor.peek_next().is_some() {
            assert!(cursor.move_next().is_ok());
            steps += 1;
        }
        assert_eq!(steps, list.len());
        assert_eq!(cursor.get(), Some(&99));

        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor, Cursor::default());
    }

    // --- value semantics ---

    #[test]
    fn test_assignment_by_clone_from() {
        let source = ForwardList::from([1, 2, 3]);
        let mut target = ForwardList::from([9, 9]);

        target.clone_from(&source);
        target.push_front(0);

        assert_eq!(to_vec(&source), vec![1, 2, 3]);
        assert_eq!(to_vec(&target), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_free_swap() {
        let mut left = ForwardList::from([1]);
        let mut right = ForwardList::from([2, 3]);

        swap(&mut left, &mut right);

        assert_eq!(to_vec(&left), vec![2, 3]);
        assert_eq!(to_vec(&right), vec![1]);
    }

    #[test]
    fn test_clear_then_is_empty() {
        let mut list: ForwardList<i32> = (0..10).collect();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);
    }
}

use std::{collections::HashSet, hash::Hash};

pub mod float_ext;

/// Remove every element whose key was already seen earlier in the vec.
///
/// Unlike [`Vec::dedup_by_key`] this also catches duplicates that are not
/// adjacent. Relative order of the remaining elements is kept.
pub fn retain_first_by_key<T, K, F>(vec: &mut Vec<T>, mut key: F)
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(vec.len());
    vec.retain(|elem| seen.insert(key(elem)));
}

#[cfg(test)]
mod tests {
    use super::retain_first_by_key;

    #[test]
    fn keeps_first_occurrence() {
        let mut values = vec![(1, 'a'), (2, 'b'), (1, 'c'), (3, 'd'), (2, 'e')];
        retain_first_by_key(&mut values, |(n, _)| *n);

        assert_eq!(values, [(1, 'a'), (2, 'b'), (3, 'd')]);
    }

    #[test]
    fn empty() {
        let mut values: Vec<u8> = Vec::new();
        retain_first_by_key(&mut values, |n| *n);

        assert!(values.is_empty());
    }
}

use crate::domain::model::WordsByLength;
use std::collections::BTreeMap;

/// Buckets words by character count, skipping anything of length 0 or 1.
pub fn group_by_length<I, S>(words: I) -> WordsByLength
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in words {
        let word = word.into();
        let length = word.chars().count();
        if length > 1 {
            buckets.entry(length).or_default().push(word);
        }
    }
    WordsByLength::from_buckets(buckets)
}

//! Linear lookup primitives
//!
//! Sections and their contents are small and built once, so lookups are plain scans keyed by
//! an extraction closure. Both functions are total: no match is `None` or an empty vector.

/// First item whose extracted key equals `key`.
pub fn find_first<'a, T, K>(items: &'a [T], key: &K, extract: impl Fn(&T) -> &K) -> Option<&'a T>
where
    K: PartialEq + ?Sized,
{
    items.iter().find(|item| extract(*item) == key)
}

/// Every item whose extracted key equals `key`, in order.
pub fn find_all<'a, T, K>(items: &'a [T], key: &K, extract: impl Fn(&T) -> &K) -> Vec<&'a T>
where
    K: PartialEq + ?Sized,
{
    items.iter().filter(|item| extract(*item) == key).collect()
}

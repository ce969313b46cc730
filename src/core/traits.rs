use std::hash::Hash;

/// An item with a stable identity key (licence plate for vehicles).
pub trait Keyed {
    fn key(&self) -> &str;
}

/// An item with an exact runtime kind, used for per-kind counting.
pub trait Kinded {
    type Kind: Copy + Ord + Hash;

    fn kind(&self) -> Self::Kind;
}

/// Partial match criteria evaluated against stored items.
pub trait Criteria<T> {
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> Criteria<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Case-insensitive key comparison.
pub fn keys_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

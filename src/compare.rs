use std::cmp::Ordering;

/// A strict total order over keys, used by every descent and balancing decision.
///
/// Any `Fn(&K, &K) -> Ordering` is a valid strategy. An order that is not total
/// (or not consistent between calls) leaves the tree in an unspecified, though
/// memory-safe, state.
pub trait Compare<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The keys' own `Ord` implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped strategy, so the tree's minimum is the largest key
#[derive(Debug, Default, Clone, Copy)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C: Compare<K>> Compare<K> for Reverse<C> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn natural() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert_eq!(Natural.compare(&7, &7), Ordering::Equal);
    }

    #[test]
    fn reverse() {
        assert_eq!(Reverse(Natural).compare(&1, &2), Ordering::Greater);
        assert_eq!(Reverse(Reverse(Natural)).compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn closure() {
        let by_last_digit = |a: &u32, b: &u32| (a % 10).cmp(&(b % 10));
        assert_eq!(by_last_digit.compare(&19, &21), Ordering::Greater);
        assert_eq!(by_last_digit.compare(&13, &3), Ordering::Equal);
    }
}

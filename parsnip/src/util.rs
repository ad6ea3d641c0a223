/// Swaps rows and columns. Rows longer than the first one are cut to its length.
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let Some(first) = rows.first() else {
        return vec![];
    };
    (0..first.len())
        .map(|i| rows.iter().filter_map(|row| row.get(i).cloned()).collect())
        .collect()
}

pub fn count<T>(items: impl IntoIterator<Item = T>, predicate: impl Fn(&T) -> bool) -> usize {
    items.into_iter().filter(|x| predicate(x)).count()
}

pub fn gcd(x: u64, y: u64) -> u64 {
    let (mut x, mut y) = (x, y);
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

/// `None` when the result does not fit in a `u64`.
pub fn lcm(x: u64, y: u64) -> Option<u64> {
    match gcd(x, y) {
        0 => Some(0),
        d => (x / d).checked_mul(y),
    }
}

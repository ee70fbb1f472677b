/// Applies `f` to its own output `n` times, starting from `initial`.
///
/// `n == 0` returns `initial` unchanged.
pub fn repeated<T, F>(mut f: F, n: usize, initial: T) -> T
where
    F: FnMut(T) -> T,
{
    let mut value = initial;
    for _ in 0..n {
        value = f(value);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_times_is_identity() {
        assert_eq!(repeated(|x: u64| x * 2, 0, 7), 7);
    }

    #[test]
    fn test_applies_in_sequence() {
        assert_eq!(repeated(|x: u64| x * 2, 5, 1), 32);
        let trail = repeated(
            |mut v: Vec<usize>| {
                v.push(v.len());
                v
            },
            3,
            Vec::new(),
        );
        assert_eq!(trail, vec![0, 1, 2]);
    }
}

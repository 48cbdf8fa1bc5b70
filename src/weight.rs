/// Fibonacci weight of a word length: weight(1) = weight(2) = 1,
/// weight(k) = weight(k - 1) + weight(k - 2), evaluated at the length
/// directly (1, 1, 2, 3, 5, 8, ...).
///
/// u64 holds every realistic word length without overflow (lengths up to
/// roughly 90 stay below u64::MAX).
pub fn weight(length: usize) -> u64 {
    if length == 0 {
        return 0;
    }
    let mut previous = 1u64;
    let mut current = 1u64;
    for _ in 2..length {
        let next = previous + current;
        previous = current;
        current = next;
    }
    current
}

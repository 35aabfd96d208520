/// Returns `true` if `n` is prime.
///
/// Trial division over the 6k ± 1 wheel: after ruling out 2 and 3, every
/// remaining prime candidate divisor has the form `6k - 1` or `6k + 1`, so the
/// loop steps by six and tests both. Divisors are tried up to `⌊√n⌋`.
///
/// This is the hot path of every worker. It does not allocate, lock, or touch
/// shared state.
///
/// # Example
/// ```
/// use primehunt::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 * 13
/// ```
#[must_use]
#[inline]
pub const fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    // `i <= n / i` is `i * i <= n` without the overflow near `u64::MAX`.
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sieve of Eratosthenes over `[0, limit]`.
    fn sieve(limit: usize) -> Vec<bool> {
        let mut is_prime = vec![true; limit + 1];
        is_prime[0] = false;
        if limit >= 1 {
            is_prime[1] = false;
        }
        let mut p = 2;
        while p * p <= limit {
            if is_prime[p] {
                let mut multiple = p * p;
                while multiple <= limit {
                    is_prime[multiple] = false;
                    multiple += p;
                }
            }
            p += 1;
        }
        is_prime
    }

    #[test]
    fn agrees_with_sieve_up_to_ten_thousand() {
        let reference = sieve(10_000);
        for (n, expected) in reference.iter().enumerate() {
            assert_eq!(is_prime(n as u64), *expected, "disagreement at {n}");
        }
    }

    #[test]
    fn small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
    }

    #[test]
    fn squares_of_primes_are_rejected() {
        // The divisor bound is inclusive, so p * p must be caught.
        for p in [5_u64, 7, 11, 13, 101, 65_521] {
            assert!(!is_prime(p * p), "{} is composite", p * p);
        }
    }

    #[test]
    fn large_values() {
        // Largest prime below 10^12.
        assert!(is_prime(999_999_999_989));
        // 1_000_003 * 999_983, both prime.
        assert!(!is_prime(999_985_999_949));
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(u64::MAX - 1));
    }

    #[test]
    fn is_usable_in_const_context() {
        const SEVEN: bool = is_prime(7);
        assert!(SEVEN);
    }
}

//!
//! Primality Test
//!
//! Deterministic trial division over the full i32 domain. Checks 2 and 3,
//! then steps divisor candidates by 6 (testing i and i+2) up to the square
//! root. Pure and reentrant; safe to call from any number of threads.
//!

/// Return true if `n` is prime. Anything below 2 is not prime.
pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // The square is taken in u64 so i * i cannot overflow for any
    // divisor candidate in the i32 domain.
    let n = n as u64;
    let mut i: u64 = 5;
    while i * i <= n {
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

    #[test]
    fn test_small_values() {
        assert!(!is_prime(-5));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
    }

    #[test]
    fn test_known_primes() {
        assert!(is_prime(17));
        assert!(is_prime(101));
        assert!(is_prime(7919)); // 1000th prime
    }

    #[test]
    fn test_known_composites() {
        assert!(!is_prime(91)); // 7 * 13
        assert!(!is_prime(7921)); // 89 * 89
        assert!(!is_prime(1_000_000));
    }

    #[test]
    fn test_i32_max_is_prime() {
        // 2^31 - 1 is a Mersenne prime; also exercises the widest
        // divisor candidates the kernel ever reaches.
        assert!(is_prime(i32::MAX));
        assert!(!is_prime(i32::MAX - 1));
    }

    #[test]
    fn test_matches_sieve_below_1000() {
        let mut sieve = vec![true; 1000];
        sieve[0] = false;
        sieve[1] = false;
        for i in 2..1000 {
            if sieve[i] {
                let mut j = i * i;
                while j < 1000 {
                    sieve[j] = false;
                    j += i;
                }
            }
        }
        for n in 0..1000 {
            assert_eq!(is_prime(n as i32), sieve[n], "mismatch at {}", n);
        }
    }
}

//! Primality drill.

/// Trial division by 2, 3 and odd numbers up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut divisor = 5;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Smallest prime strictly greater than `n`.
pub fn next_prime(mut n: u64) -> u64 {
    loop {
        n += 1;
        if is_prime(n) {
            return n;
        }
    }
}

/// The `k` primes following `n`, ascending.
pub fn next_primes(n: u64, k: usize) -> Vec<u64> {
    (0..k)
        .scan(n, |current, _| {
            *current = next_prime(*current);
            Some(*current)
        })
        .collect()
}

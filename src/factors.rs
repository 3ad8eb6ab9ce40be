/// Decomposes `n` into its prime factors with multiplicity, in
/// non-decreasing order, by trial division. Returns an empty sequence for
/// `n <= 1`. Only called for division hints, where operands stay in the
/// low thousands.
pub fn prime_factors(n: i32) -> Vec<i32> {
    let mut factors = Vec::new();
    let mut remaining = n;
    let mut divisor = 2;

    while remaining > 1 {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 1;
    }

    factors
}

//! Digit reduction. Collapses an integer to a single digit, optionally stopping on a master number.

/// Numbers left unreduced when master preservation is enabled.
pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

/// True for 11 and 22.
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit by repeated digit sums.
///
/// The sign is discarded. With `preserve_masters`, reduction stops as soon as the
/// running value is 11 or 22; a master reached only after dropping below 10 is never
/// re-entered.
pub fn reduce(n: i64, preserve_masters: bool) -> u32 {
    let mut n = n.unsigned_abs();
    while n > 9 && !(preserve_masters && (n == 11 || n == 22)) {
        n = digit_sum(n);
    }
    n as u32
}

/// Reduce a textual integer. Input that does not parse as an integer yields 0.
///
/// This is the only place where bad numeric input degrades silently; callers that
/// need an error must validate before reaching here.
pub fn reduce_text(input: &str, preserve_masters: bool) -> u32 {
    input
        .trim()
        .parse::<i64>()
        .map(|n| reduce(n, preserve_masters))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_single_digit_unchanged() {
        for n in 0..=9 {
            assert_eq!(reduce(n, false), n as u32);
            assert_eq!(reduce(n, true), n as u32);
        }
    }

    #[test]
    fn test_reduce_full() {
        assert_eq!(reduce(1990, false), 1);
        assert_eq!(reduce(103, false), 4);
        assert_eq!(reduce(29, false), 2);
        assert_eq!(reduce(11, false), 2);
        assert_eq!(reduce(22, false), 4);
    }

    #[test]
    fn test_reduce_preserves_masters() {
        assert_eq!(reduce(11, true), 11);
        assert_eq!(reduce(22, true), 22);
        // 29 -> 11 stops on the master
        assert_eq!(reduce(29, true), 11);
        // 2009 -> 11
        assert_eq!(reduce(2009, true), 11);
        // 1399 -> 22
        assert_eq!(reduce(1399, true), 22);
    }

    #[test]
    fn test_reduce_master_not_reentered() {
        // 38 -> 11 is kept; 101 -> 2 never climbs back
        assert_eq!(reduce(38, true), 11);
        assert_eq!(reduce(101, true), 2);
    }

    #[test]
    fn test_reduce_negative_discards_sign() {
        assert_eq!(reduce(-13, false), 4);
        assert_eq!(reduce(-29, true), 11);
        // |i64::MIN| = 9223372036854775808 -> 89 -> 17 -> 8
        assert_eq!(reduce(i64::MIN, false), 8);
    }

    #[test]
    fn test_reduce_ranges_and_idempotence() {
        for n in 1..5000i64 {
            let plain = reduce(n, false);
            assert!((1..=9).contains(&plain), "reduce({n}, false) = {plain}");
            assert_eq!(reduce(plain as i64, false), plain);

            let master = reduce(n, true);
            assert!((1..=9).contains(&master) || is_master(master), "reduce({n}, true) = {master}");
            assert_eq!(reduce(master as i64, true), master);
        }
    }

    #[test]
    fn test_reduce_text_fails_soft() {
        assert_eq!(reduce_text("1990", false), 1);
        assert_eq!(reduce_text(" 29 ", true), 11);
        assert_eq!(reduce_text("abc", true), 0);
        assert_eq!(reduce_text("", false), 0);
        assert_eq!(reduce_text("12.5", false), 0);
    }
}

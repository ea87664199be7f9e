/// The non-negative gcd of two machine words. The result only
/// exceeds `i64::MAX` for `gcd(i64::MIN, 0)` and `gcd(i64::MIN, i64::MIN)`.
pub fn gcd_signed(mut a: i64, mut b: i64) -> u64 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i64::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.unsigned_abs()
}

#[cfg(test)]
mod test {
    use super::gcd_signed;

    #[test]
    fn word_gcd() {
        assert_eq!(gcd_signed(12, 18), 6);
        assert_eq!(gcd_signed(0, 7), 7);
        assert_eq!(gcd_signed(-12, 18), 6);
        assert_eq!(gcd_signed(i64::MIN, 0), 1 << 63);
        assert_eq!(gcd_signed(i64::MIN, -1), 1);
    }
}

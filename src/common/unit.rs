//! Unit conversion utilities.
//!
//! Layout math runs in pixels at 96 DPI; the document layout is stamped in
//! EMUs (English Metric Units, 914400 per inch) the way presentation formats
//! store slide size.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PX: i64 = EMUS_PER_INCH / 96;

#[inline]
pub fn px_to_emu(px: f64) -> i64 {
    (px * EMUS_PER_PX as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_emu() {
        assert_eq!(EMUS_PER_PX, 9525);
        assert_eq!(px_to_emu(1280.0), 12_192_000);
        assert_eq!(px_to_emu(720.0), 6_858_000);
    }
}

//! Unit conversion utilities.
//!
//! Lengths in OOXML are expressed in EMUs (English Metric Units,
//! 914,400 EMU = 1 inch), font sizes and paragraph spacing in
//! hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMUs.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64) as i64
}

/// Convert points to EMUs.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Convert points to the centipoint values used by `sz` and `spcPts`
/// attributes.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(7.5), 6_858_000);
        assert_eq!(inches(0.08), 73_152);
    }

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu(1.0), 12_700);
        assert_eq!(pt_to_emu(2.0), 25_400);
    }

    #[test]
    fn test_pt_to_centipoints() {
        assert_eq!(pt_to_centipoints(60.0), 6000);
        assert_eq!(pt_to_centipoints(10.0), 1000);
        assert_eq!(pt_to_centipoints(12.5), 1250);
    }
}

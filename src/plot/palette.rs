//! Viridis colour palette shared by every chart.

use plotters::style::RGBColor;

/// Viridis sampled at 0, 0.25, 0.5, 0.75 and 1.
const VIRIDIS_STOPS: [(u8, u8, u8); 5] = [
    (0x44, 0x01, 0x54),
    (0x3b, 0x52, 0x8b),
    (0x21, 0x91, 0x8c),
    (0x5e, 0xc9, 0x62),
    (0xfd, 0xe7, 0x25),
];

/// `n` colours spread evenly over viridis, excluding both extremes.
pub fn viridis(n: usize) -> Vec<RGBColor> {
    (0..n)
        .map(|i| viridis_at((i + 1) as f64 / (n + 1) as f64))
        .collect()
}

/// Colour at position `t` in `[0, 1]`, linearly interpolated between stops.
pub fn viridis_at(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS_STOPS.len() - 1) as f64;
    let lo = (scaled.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    let frac = scaled - lo as f64;

    let (r0, g0, b0) = VIRIDIS_STOPS[lo];
    let (r1, g1, b1) = VIRIDIS_STOPS[lo + 1];
    RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
}

fn lerp(a: u8, b: u8, frac: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * frac).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_stops() {
        assert_eq!(viridis_at(0.0), RGBColor(0x44, 0x01, 0x54));
        assert_eq!(viridis_at(1.0), RGBColor(0xfd, 0xe7, 0x25));
        assert_eq!(viridis_at(0.5), RGBColor(0x21, 0x91, 0x8c));
    }

    #[test]
    fn palette_is_deterministic_and_sized() {
        assert_eq!(viridis(7), viridis(7));
        assert_eq!(viridis(7).len(), 7);
        assert!(viridis(0).is_empty());
        // A single bar sits mid-scale.
        assert_eq!(viridis(1), vec![viridis_at(0.5)]);
    }
}

use core_types::TouchZone;

/// Map a touch x coordinate onto the left/right tap bands.
///
/// Each band is `band * viewport_width` wide. Comparisons are strict, so a
/// touch exactly on a band edge lands in the middle.
pub fn touch_zone(x: f32, viewport_width: f32, band: f32) -> TouchZone {
    let width = viewport_width * band;
    if x < width {
        TouchZone::Left
    } else if x > viewport_width - width {
        TouchZone::Right
    } else {
        TouchZone::Middle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_thirty_percent_per_edge() {
        assert_eq!(touch_zone(100.0, 1000.0, 0.3), TouchZone::Left);
        assert_eq!(touch_zone(900.0, 1000.0, 0.3), TouchZone::Right);
        assert_eq!(touch_zone(500.0, 1000.0, 0.3), TouchZone::Middle);
    }

    #[test]
    fn band_edges_are_exclusive() {
        assert_eq!(touch_zone(300.0, 1000.0, 0.3), TouchZone::Middle);
        assert_eq!(touch_zone(700.0, 1000.0, 0.3), TouchZone::Middle);
        assert_eq!(touch_zone(299.5, 1000.0, 0.3), TouchZone::Left);
        assert_eq!(touch_zone(700.5, 1000.0, 0.3), TouchZone::Right);
    }

    #[test]
    fn zero_width_viewport_never_hits_a_band() {
        assert_eq!(touch_zone(0.0, 0.0, 0.3), TouchZone::Middle);
    }
}

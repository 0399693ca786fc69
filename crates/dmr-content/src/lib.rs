//! # Dunia Mega Raya - Site Content
//!
//! Static content and pure animation math for the single-page marketing
//! site. These records are compiled into the bundle, never mutated and
//! never persisted; the frontend crate is their only consumer.

// =============================================================================
// SITE CONSTANTS
// =============================================================================

/// Fixed messaging deep link used by every call-to-action on the page.
pub const CONTACT_URL: &str = "https://wa.me/6281513181140";

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// A product card in the showcase grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

/// A named location on the export map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryMarker {
    pub name: &'static str,
    /// Horizontal position as a percentage of the map width (0 = left edge).
    pub left_pct: f32,
    /// Vertical position as a percentage of the map height (0 = top edge).
    pub top_pct: f32,
}

// =============================================================================
// SITE DATA
// =============================================================================

/// The product showcase, in display order.
#[must_use]
pub fn product_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "hdpe / lldpe bags",
            image: "assets/product1.png",
            alt: "hdpe / lldpe bags on roll (aka garbage bags)",
        },
        Product {
            id: 2,
            title: "hdpe fruit bag",
            image: "assets/product2.png",
            alt: "hdpe fruit bag",
        },
        Product {
            id: 3,
            title: "pp stapping band",
            image: "assets/product3.png",
            alt: "pp stapping band",
        },
        Product {
            id: 4,
            title: "pp plastic strings",
            image: "assets/product4.png",
            alt: "pp plastic strings",
        },
    ]
}

/// Export markets, in source order. Marker positions are hand-placed
/// percentages against the world-map image.
#[must_use]
pub fn export_markets() -> Vec<CountryMarker> {
    vec![
        CountryMarker { name: "UK", left_pct: 48.0, top_pct: 27.0 },
        CountryMarker { name: "Belgium", left_pct: 50.0, top_pct: 31.0 },
        CountryMarker { name: "Spain", left_pct: 46.0, top_pct: 44.0 },
        CountryMarker { name: "New Zealand", left_pct: 81.0, top_pct: 75.0 },
        CountryMarker { name: "USA", left_pct: 30.0, top_pct: 42.0 },
        CountryMarker { name: "Gabon", left_pct: 49.0, top_pct: 65.0 },
        CountryMarker { name: "Tigana", left_pct: 45.0, top_pct: 58.0 },
        CountryMarker { name: "Somalia", left_pct: 54.0, top_pct: 59.0 },
    ]
}

/// Order markers west-to-east for the pulse stagger. Each marker's ring
/// delay is its index in this ordering; the sort has no other effect and
/// is cheap enough to recompute per render. Stable, so markers sharing a
/// horizontal position keep their source order.
#[must_use]
pub fn pulse_order(mut markers: Vec<CountryMarker>) -> Vec<CountryMarker> {
    markers.sort_by(|a, b| a.left_pct.total_cmp(&b.left_pct));
    markers
}

// =============================================================================
// COUNT-UP ANIMATION
// =============================================================================

/// Description of a count-up animation: linear interpolation from
/// `start` to `end` over `duration_ms`, sampled against elapsed time.
///
/// For any non-decreasing sequence of elapsed times the produced values
/// are non-decreasing (given `start <= end`), bounded above by `end`,
/// and equal to exactly `end` once the duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub start: u32,
    pub end: u32,
    pub duration_ms: f64,
}

impl CountUp {
    pub const fn new(start: u32, end: u32, duration_ms: f64) -> Self {
        Self { start, end, duration_ms }
    }

    /// Interpolated value after `elapsed_ms` milliseconds.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        let span = f64::from(self.end) - f64::from(self.start);
        (self.progress(elapsed_ms) * span + f64::from(self.start)).floor() as u32
    }

    /// True once progress has reached 1; the driver stops emitting here.
    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Elapsed time mapped to [0, 1]. A non-positive duration counts as
    /// already finished.
    fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_catalog() {
        let catalog = product_catalog();
        assert_eq!(catalog.len(), 4);
        let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(catalog.iter().all(|p| p.image.starts_with("assets/")));
    }

    #[test]
    fn test_contact_url_is_messaging_deep_link() {
        assert!(CONTACT_URL.starts_with("https://wa.me/"));
    }

    #[test]
    fn test_export_markets_within_map_bounds() {
        let markets = export_markets();
        assert_eq!(markets.len(), 8);
        for marker in &markets {
            assert!((0.0..=100.0).contains(&marker.left_pct), "{}", marker.name);
            assert!((0.0..=100.0).contains(&marker.top_pct), "{}", marker.name);
        }
    }

    #[test]
    fn test_pulse_order_is_deterministic() {
        let ordered = pulse_order(export_markets());
        let names: Vec<&str> = ordered.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec!["USA", "Tigana", "Spain", "UK", "Gabon", "Belgium", "Somalia", "New Zealand"],
        );
    }

    #[test]
    fn test_pulse_order_is_stable_on_ties() {
        let tied = vec![
            CountryMarker { name: "first", left_pct: 40.0, top_pct: 10.0 },
            CountryMarker { name: "second", left_pct: 40.0, top_pct: 20.0 },
            CountryMarker { name: "west", left_pct: 10.0, top_pct: 30.0 },
        ];
        let names: Vec<&str> = pulse_order(tied).iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["west", "first", "second"]);
    }

    #[test]
    fn test_count_up_monotonic_and_bounded() {
        let anim = CountUp::new(0, 8, 2000.0);
        let mut last = 0;
        for step in 0..=50 {
            let value = anim.value_at(f64::from(step) * 50.0);
            assert!(value >= last);
            assert!(value <= 8);
            last = value;
        }
    }

    #[test]
    fn test_count_up_terminates_at_end() {
        let anim = CountUp::new(0, 8, 2000.0);
        assert_eq!(anim.value_at(2000.0), 8);
        assert_eq!(anim.value_at(9999.0), 8);
        assert!(anim.is_complete(2000.0));
        assert!(!anim.is_complete(1999.0));
    }

    #[test]
    fn test_count_up_midpoints() {
        let countries = CountUp::new(0, 8, 2000.0);
        assert_eq!(countries.value_at(0.0), 0);
        assert_eq!(countries.value_at(1000.0), 4);

        let clients = CountUp::new(0, 1000, 2500.0);
        assert_eq!(clients.value_at(1250.0), 500);
        assert_eq!(clients.value_at(2500.0), 1000);
    }

    #[test]
    fn test_count_up_clamps_outside_window() {
        let anim = CountUp::new(0, 8, 2000.0);
        assert_eq!(anim.value_at(-50.0), 0);

        let instant = CountUp::new(0, 8, 0.0);
        assert_eq!(instant.value_at(0.0), 8);
        assert!(instant.is_complete(0.0));
    }

    #[test]
    fn test_count_up_nonzero_start() {
        let anim = CountUp::new(100, 200, 1000.0);
        assert_eq!(anim.value_at(0.0), 100);
        assert_eq!(anim.value_at(500.0), 150);
        assert_eq!(anim.value_at(1000.0), 200);
    }
}

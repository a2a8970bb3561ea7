//! Sales state definitions: dessert tier tables and the screen aggregate.

/// The two dessert product lines, tracked independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DessertLine {
    A,
    B,
}

impl DessertLine {
    /// Both lines in display order.
    pub fn all() -> &'static [DessertLine] {
        &[DessertLine::A, DessertLine::B]
    }

    /// The tier table for this line, ascending by `production_threshold`.
    ///
    /// Thresholds are strictly increasing and the first is 0, so a tier
    /// lookup always finds a match for any sold count.
    pub fn desserts(&self) -> &'static [Dessert; 5] {
        match self {
            DessertLine::A => &LINE_A_DESSERTS,
            DessertLine::B => &LINE_B_DESSERTS,
        }
    }

    /// Key to register a sale on this line from the keyboard.
    pub fn key(&self) -> char {
        match self {
            DessertLine::A => '1',
            DessertLine::B => '2',
        }
    }
}

/// Opaque identifier for a dessert picture. The render layer maps each
/// variant to ASCII art; the engine only ever compares and copies these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DessertImage {
    // Line A sequence
    Cupcake,
    Eclair,
    Gingerbread,
    Honeycomb,
    Sundae,
    // Line B sequence
    Donut,
    Froyo,
    Jellybean,
    Macaron,
    Lollipop,
}

impl DessertImage {
    /// Display name shown on the dessert card.
    pub fn name(&self) -> &'static str {
        match self {
            DessertImage::Cupcake => "Cupcake",
            DessertImage::Eclair => "Eclair",
            DessertImage::Gingerbread => "Gingerbread",
            DessertImage::Honeycomb => "Honeycomb",
            DessertImage::Sundae => "Sundae",
            DessertImage::Donut => "Donut",
            DessertImage::Froyo => "Froyo",
            DessertImage::Jellybean => "Jellybean",
            DessertImage::Macaron => "Macaron",
            DessertImage::Lollipop => "Lollipop",
        }
    }
}

/// Immutable tier descriptor: which picture to show and what one unit costs
/// once cumulative sales of the line reach `production_threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dessert {
    pub image: DessertImage,
    pub price: u64,
    pub production_threshold: u64,
}

const fn dessert(image: DessertImage, price: u64, production_threshold: u64) -> Dessert {
    Dessert {
        image,
        price,
        production_threshold,
    }
}

/// Line A tiers. Prices and thresholds are fixed at compile time.
pub const LINE_A_DESSERTS: [Dessert; 5] = [
    dessert(DessertImage::Cupcake, 5, 0),
    dessert(DessertImage::Eclair, 10, 5),
    dessert(DessertImage::Gingerbread, 15, 10),
    dessert(DessertImage::Honeycomb, 30, 20),
    dessert(DessertImage::Sundae, 50, 30),
];

/// Line B tiers. Same shape as line A on purpose; only the pictures differ.
pub const LINE_B_DESSERTS: [Dessert; 5] = [
    dessert(DessertImage::Donut, 5, 0),
    dessert(DessertImage::Froyo, 10, 5),
    dessert(DessertImage::Jellybean, 15, 10),
    dessert(DessertImage::Macaron, 30, 20),
    dessert(DessertImage::Lollipop, 50, 30),
];

/// The aggregate the screen renders: per-line counts and revenue, their
/// totals, and the currently active picture per line.
///
/// Counters only ever grow. `total_sold` and `total_revenue` are always the
/// sums of their per-line parts; [`crate::logic::register_sale`] recomputes
/// them on every transition so no partial update is observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SalesState {
    pub sold_a: u64,
    pub sold_b: u64,
    pub revenue_a: u64,
    pub revenue_b: u64,
    pub total_sold: u64,
    pub total_revenue: u64,
    pub image_a: DessertImage,
    pub image_b: DessertImage,
}

impl SalesState {
    /// Fresh state: all counters zero, first tier's picture on each line.
    pub fn new() -> Self {
        Self {
            sold_a: 0,
            sold_b: 0,
            revenue_a: 0,
            revenue_b: 0,
            total_sold: 0,
            total_revenue: 0,
            image_a: LINE_A_DESSERTS[0].image,
            image_b: LINE_B_DESSERTS[0].image,
        }
    }

    /// Units sold on one line.
    pub fn sold(&self, line: DessertLine) -> u64 {
        match line {
            DessertLine::A => self.sold_a,
            DessertLine::B => self.sold_b,
        }
    }

    /// Revenue accumulated on one line.
    pub fn revenue(&self, line: DessertLine) -> u64 {
        match line {
            DessertLine::A => self.revenue_a,
            DessertLine::B => self.revenue_b,
        }
    }

    /// Picture currently shown for one line.
    pub fn image(&self, line: DessertLine) -> DessertImage {
        match line {
            DessertLine::A => self.image_a,
            DessertLine::B => self.image_b,
        }
    }
}

impl Default for SalesState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_zeroed() {
        let s = SalesState::new();
        assert_eq!(s.sold_a, 0);
        assert_eq!(s.sold_b, 0);
        assert_eq!(s.revenue_a, 0);
        assert_eq!(s.revenue_b, 0);
        assert_eq!(s.total_sold, 0);
        assert_eq!(s.total_revenue, 0);
    }

    #[test]
    fn new_state_shows_first_tier_images() {
        let s = SalesState::new();
        assert_eq!(s.image_a, DessertImage::Cupcake);
        assert_eq!(s.image_b, DessertImage::Donut);
    }

    #[test]
    fn tier_tables_start_at_threshold_zero() {
        for line in DessertLine::all() {
            assert_eq!(line.desserts()[0].production_threshold, 0);
        }
    }

    #[test]
    fn tier_thresholds_strictly_increase() {
        for line in DessertLine::all() {
            let table = line.desserts();
            for pair in table.windows(2) {
                assert!(
                    pair[0].production_threshold < pair[1].production_threshold,
                    "{:?}: {} !< {}",
                    line,
                    pair[0].production_threshold,
                    pair[1].production_threshold
                );
            }
        }
    }

    #[test]
    fn lines_share_prices_and_thresholds() {
        for (a, b) in LINE_A_DESSERTS.iter().zip(LINE_B_DESSERTS.iter()) {
            assert_eq!(a.price, b.price);
            assert_eq!(a.production_threshold, b.production_threshold);
            assert_ne!(a.image, b.image);
        }
    }

    #[test]
    fn line_accessors_pick_correct_fields() {
        let mut s = SalesState::new();
        s.sold_a = 3;
        s.sold_b = 7;
        s.revenue_a = 15;
        s.revenue_b = 35;
        assert_eq!(s.sold(DessertLine::A), 3);
        assert_eq!(s.sold(DessertLine::B), 7);
        assert_eq!(s.revenue(DessertLine::A), 15);
        assert_eq!(s.revenue(DessertLine::B), 35);
        assert_eq!(s.image(DessertLine::A), DessertImage::Cupcake);
        assert_eq!(s.image(DessertLine::B), DessertImage::Donut);
    }
}

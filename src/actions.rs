//! Semantic action IDs for click/tap targets.
//!
//! Each constant represents a distinct clickable region on screen. Targets
//! are registered during render and dispatched via `InputEvent::Click`.

// ── Dessert cards ───────────────────────────────────────────────
pub const TAP_DESSERT_A: u16 = 0;
pub const TAP_DESSERT_B: u16 = 1;

// ── Title bar ───────────────────────────────────────────────────
pub const SHARE_TOTALS: u16 = 10;

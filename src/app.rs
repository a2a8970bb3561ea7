//! App shell: owns the sales engine and the transient UI state around it.
//!
//! The shell is the only caller of the engine. It maps normalized input
//! events to engine operations, runs the share action, and ages the toast.
//! Rendering reads from it every frame; it never pushes.

use crate::actions::{SHARE_TOTALS, TAP_DESSERT_A, TAP_DESSERT_B};
use crate::input::InputEvent;
use crate::logic::SalesEngine;
use crate::share::{self, ShareError};
use crate::state::DessertLine;

/// How long a toast stays on screen, in ticks (10 ticks/sec).
pub const TOAST_TICKS: u32 = 30;

/// A transient notification line.
pub struct Toast {
    pub text: String,
    pub ticks_left: u32,
}

pub struct App {
    pub engine: SalesEngine,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new() -> Self {
        Self {
            engine: SalesEngine::new(),
            toast: None,
        }
    }

    /// Handle one input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => {
                if let Some(line) = DessertLine::all().iter().find(|l| l.key() == *c) {
                    self.engine.register_sale(*line);
                    return true;
                }
                if *c == 's' {
                    self.share();
                    return true;
                }
                false
            }
            InputEvent::Click(id) => match *id {
                TAP_DESSERT_A => {
                    self.engine.register_sale(DessertLine::A);
                    true
                }
                TAP_DESSERT_B => {
                    self.engine.register_sale(DessertLine::B);
                    true
                }
                SHARE_TOTALS => {
                    self.share();
                    true
                }
                _ => false,
            },
        }
    }

    /// Advance transient UI state. The engine itself is tick-free; only the
    /// toast ages here.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        if let Some(toast) = &mut self.toast {
            toast.ticks_left = toast.ticks_left.saturating_sub(delta_ticks);
            if toast.ticks_left == 0 {
                self.toast = None;
            }
        }
    }

    /// Format the totals and hand them to the platform share sheet. A
    /// missing handler only produces a toast; the engine is untouched.
    fn share(&mut self) {
        let text = share::share_message(&self.engine.current_state());
        match share::open_share_sheet(&text) {
            Ok(()) => {}
            Err(ShareError::HandlerUnavailable) => {
                self.show_toast("Sharing is not available on this device");
            }
        }
    }

    fn show_toast(&mut self, text: &str) {
        self.toast = Some(Toast {
            text: text.to_string(),
            ticks_left: TOAST_TICKS,
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_1_sells_on_line_a() {
        let mut app = App::new();
        assert!(app.handle_input(&InputEvent::Key('1')));
        let s = app.engine.current_state();
        assert_eq!(s.sold_a, 1);
        assert_eq!(s.sold_b, 0);
    }

    #[test]
    fn key_2_sells_on_line_b() {
        let mut app = App::new();
        assert!(app.handle_input(&InputEvent::Key('2')));
        let s = app.engine.current_state();
        assert_eq!(s.sold_b, 1);
        assert_eq!(s.revenue_b, 5);
    }

    #[test]
    fn tapping_cards_sells() {
        let mut app = App::new();
        assert!(app.handle_input(&InputEvent::Click(TAP_DESSERT_A)));
        assert!(app.handle_input(&InputEvent::Click(TAP_DESSERT_B)));
        let s = app.engine.current_state();
        assert_eq!(s.total_sold, 2);
        assert_eq!(s.total_revenue, 10);
    }

    #[test]
    fn unknown_input_not_consumed() {
        let mut app = App::new();
        assert!(!app.handle_input(&InputEvent::Key('x')));
        assert!(!app.handle_input(&InputEvent::Click(999)));
        assert_eq!(app.engine.current_state().total_sold, 0);
    }

    #[test]
    fn share_without_handler_toasts_and_leaves_engine_alone() {
        // Native builds never have a share handler, so this exercises the
        // HandlerUnavailable path end to end.
        let mut app = App::new();
        app.handle_input(&InputEvent::Key('1'));
        let before = app.engine.current_state();

        assert!(app.handle_input(&InputEvent::Click(SHARE_TOTALS)));
        assert!(app.toast.is_some());
        assert_eq!(app.engine.current_state(), before);
    }

    #[test]
    fn share_key_matches_share_button() {
        let mut app = App::new();
        assert!(app.handle_input(&InputEvent::Key('s')));
        assert!(app.toast.is_some());
    }

    #[test]
    fn toast_expires_after_its_lifetime() {
        let mut app = App::new();
        app.handle_input(&InputEvent::Key('s'));
        assert!(app.toast.is_some());

        app.tick(TOAST_TICKS - 1);
        assert!(app.toast.is_some());
        app.tick(1);
        assert!(app.toast.is_none());
    }

    #[test]
    fn zero_ticks_do_not_age_toast() {
        let mut app = App::new();
        app.handle_input(&InputEvent::Key('s'));
        app.tick(0);
        assert_eq!(app.toast.as_ref().map(|t| t.ticks_left), Some(TOAST_TICKS));
    }
}

//! Activation logic for the analytics page.
//!
//! The page waits a fixed delay before revealing a stage card, and sends
//! unauthenticated visitors to the sign-in page instead. [`RevealController`]
//! holds that logic without touching any timer or router itself: every call
//! returns the [`RevealEffect`]s the caller must carry out, so the same code
//! runs under browser timers and under a simulated clock in tests.

use std::fmt;

use log::debug;
use rand::Rng;

use crate::catalog::StageCatalog;
use crate::models::identity::Identity;
use crate::models::stage::InformationalRecord;

pub const REVEAL_DELAY_MS: u32 = 5_000;
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Identifies one scheduled reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEffect {
    Navigate(&'static str),
    Schedule { ticket: RevealTicket, delay_ms: u32 },
    Cancel(RevealTicket),
}

#[derive(Debug)]
pub struct RevealController {
    delay_ms: u32,
    next_ticket: u64,
    pending: Option<RevealTicket>,
    active: bool,
    is_loading: bool,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(REVEAL_DELAY_MS)
    }
}

impl RevealController {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            next_ticket: 0,
            pending: None,
            active: false,
            is_loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending(&self) -> Option<RevealTicket> {
        self.pending
    }

    /// Run on mount and again whenever the signed-in user changes.
    pub fn activate(&mut self, user: Option<&Identity>) -> Vec<RevealEffect> {
        let mut effects = Vec::with_capacity(2);
        if let Some(ticket) = self.pending.take() {
            debug!("Cancelling reveal {:?} before re-activation", ticket);
            effects.push(RevealEffect::Cancel(ticket));
        }
        self.active = true;

        match user {
            None => {
                debug!("No signed-in user, redirecting to {}", SIGN_IN_PATH);
                effects.push(RevealEffect::Navigate(SIGN_IN_PATH));
            }
            Some(user) => {
                let ticket = RevealTicket(self.next_ticket);
                self.next_ticket += 1;
                self.pending = Some(ticket);
                debug!(
                    "Scheduling reveal {:?} in {}ms for user {}",
                    ticket, self.delay_ms, user.id
                );
                effects.push(RevealEffect::Schedule {
                    ticket,
                    delay_ms: self.delay_ms,
                });
            }
        }
        effects
    }

    /// Run on unmount. A ticket still pending must not fire afterwards.
    pub fn deactivate(&mut self) -> Option<RevealEffect> {
        self.active = false;
        self.pending.take().map(RevealEffect::Cancel)
    }

    /// Called when a scheduled timer elapses. Returns true if loading ended.
    pub fn fire(&mut self, ticket: RevealTicket) -> bool {
        if !self.active || self.pending != Some(ticket) {
            debug!("Ignoring stale reveal {:?}", ticket);
            return false;
        }
        self.pending = None;
        self.is_loading = false;
        true
    }
}

/// What the analytics page holds for one visit.
#[derive(Debug, Clone, PartialEq)]
pub struct PageViewState {
    pub is_loading: bool,
    pub selected: InformationalRecord,
}

impl PageViewState {
    /// Picks the record once; it stays fixed for the rest of the visit.
    pub fn new<R: Rng>(catalog: &StageCatalog, rng: &mut R) -> Self {
        Self {
            is_loading: true,
            selected: catalog.pick(rng).clone(),
        }
    }

    pub fn revealed(&self) -> Self {
        Self {
            is_loading: false,
            ..self.clone()
        }
    }

    pub fn view(&self, user_present: bool) -> AnalyticsView<'_> {
        if self.is_loading {
            AnalyticsView::Processing
        } else {
            AnalyticsView::Revealed {
                title: user_present.then_some(self.selected.title.as_str()),
                record: &self.selected,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalyticsView<'a> {
    Processing,
    Revealed {
        title: Option<&'a str>,
        record: &'a InformationalRecord,
    },
}

/// Plain-text rendering, mirroring the page's section order.
impl fmt::Display for AnalyticsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsView::Processing => writeln!(f, "Processing..."),
            AnalyticsView::Revealed { title, record } => {
                if let Some(title) = title {
                    writeln!(f, "{}", title)?;
                }
                writeln!(f, "Short Description: {}", record.short_description)?;
                let sections = [
                    ("Symptoms", &record.symptoms),
                    ("Suggestions", &record.suggestions),
                    ("Future Precautions", &record.future_precautions),
                ];
                for (heading, items) in sections {
                    writeln!(f, "{}:", heading)?;
                    for item in items {
                        writeln!(f, "- {}", item)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn user(id: &str) -> Identity {
        Identity::new(id, format!("{}@example.com", id))
    }

    #[test]
    fn test_activate_without_user_navigates_only() {
        let mut controller = RevealController::default();
        let effects = controller.activate(None);
        assert_eq!(effects, vec![RevealEffect::Navigate("/sign-in")]);
        assert!(controller.pending().is_none());
        assert!(controller.is_loading());
    }

    #[test]
    fn test_activate_with_user_schedules_once() {
        let mut controller = RevealController::default();
        let effects = controller.activate(Some(&user("u1")));
        assert_eq!(
            effects,
            vec![RevealEffect::Schedule {
                ticket: RevealTicket(0),
                delay_ms: 5_000
            }]
        );
        assert!(controller.is_loading());
    }

    #[test]
    fn test_fire_ends_loading() {
        let mut controller = RevealController::default();
        controller.activate(Some(&user("u1")));
        let ticket = controller.pending().unwrap();
        assert!(controller.fire(ticket));
        assert!(!controller.is_loading());
        assert!(controller.pending().is_none());
    }

    #[test]
    fn test_reactivation_cancels_previous_ticket() {
        let mut controller = RevealController::default();
        controller.activate(Some(&user("u1")));
        let effects = controller.activate(Some(&user("u2")));
        assert_eq!(
            effects,
            vec![
                RevealEffect::Cancel(RevealTicket(0)),
                RevealEffect::Schedule {
                    ticket: RevealTicket(1),
                    delay_ms: 5_000
                },
            ]
        );
        assert!(!controller.fire(RevealTicket(0)));
        assert!(controller.is_loading());
        assert!(controller.fire(RevealTicket(1)));
    }

    #[test]
    fn test_sign_out_cancels_and_redirects() {
        let mut controller = RevealController::default();
        controller.activate(Some(&user("u1")));
        let effects = controller.activate(None);
        assert_eq!(
            effects,
            vec![
                RevealEffect::Cancel(RevealTicket(0)),
                RevealEffect::Navigate(SIGN_IN_PATH),
            ]
        );
    }

    #[test]
    fn test_deactivate_blocks_late_fire() {
        let mut controller = RevealController::default();
        controller.activate(Some(&user("u1")));
        let ticket = controller.pending().unwrap();
        assert_eq!(controller.deactivate(), Some(RevealEffect::Cancel(ticket)));
        assert!(!controller.fire(ticket));
        assert!(controller.is_loading());
        assert_eq!(controller.deactivate(), None);
    }

    #[test]
    fn test_view_hides_title_without_user() {
        let catalog = StageCatalog::reference().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let state = PageViewState::new(&catalog, &mut rng);
        assert_eq!(state.view(true), AnalyticsView::Processing);

        let revealed = state.revealed();
        match revealed.view(false) {
            AnalyticsView::Revealed { title, record } => {
                assert_eq!(title, None);
                assert_eq!(record, &state.selected);
            }
            AnalyticsView::Processing => panic!("expected revealed view"),
        }
        let text = revealed.view(false).to_string();
        assert!(!text.contains(&state.selected.title));
        assert!(text.contains(&state.selected.short_description));
    }

    #[test]
    fn test_rendered_text_keeps_list_order() {
        let catalog = StageCatalog::reference().unwrap();
        let state = PageViewState {
            is_loading: false,
            selected: catalog.get(2).unwrap().clone(),
        };
        let text = state.view(true).to_string();
        let positions: Vec<usize> = state
            .selected
            .symptoms
            .iter()
            .map(|s| text.find(s.as_str()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(text.starts_with("Mild Demented (Middle Stage Alzheimer's)\n"));
    }
}

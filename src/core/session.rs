//! Delivery sessions — the event-driven tracker an overlay sits on top of.
//!
//! Feed it order and inventory events as they happen; query it for the
//! current stage, its directions and the two requirement tables. All
//! queries are cheap and never fail, they just return nothing while idle.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::core::catalog::Catalog;
use crate::core::error::Error;
use crate::core::infer::infer;
use crate::core::overlay::{self, RequirementView};
use crate::core::recipients;
use crate::core::stages::build_stages;
use crate::core::types::{Difficulty, Inventory, StageKind, StageNode};

// ============================================================================
// TrackingSession
// ============================================================================

/// A live delivery, from order dialogue to handoff.
///
/// `current` always indexes into `stages`; plans are never empty and the
/// index only ever moves forward.
#[derive(Debug)]
pub struct TrackingSession {
    order_name: &'static str,
    recipient: String,
    difficulty: Difficulty,
    stages: Vec<StageNode>,
    current: usize,
    current_view: RequirementView,
    future_view: RequirementView,
    practice: bool,
}

impl TrackingSession {
    pub fn order_name(&self) -> &'static str {
        self.order_name
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn stages(&self) -> &[StageNode] {
        &self.stages
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn current_stage(&self) -> &StageNode {
        &self.stages[self.current]
    }

    pub fn current_view(&self) -> &RequirementView {
        &self.current_view
    }

    pub fn future_view(&self) -> &RequirementView {
        &self.future_view
    }

    pub fn is_practice(&self) -> bool {
        self.practice
    }

    /// True once only the handoff remains.
    pub fn deliver_reached(&self) -> bool {
        self.current_stage().kind == StageKind::Deliver
    }
}

// ============================================================================
// DeliveryTracker
// ============================================================================

/// One tracker per player. Holds at most one session at a time plus the
/// most recent inventory snapshot, which is kept even while idle so a
/// session started mid-recipe lands on the right stage.
#[derive(Debug)]
pub struct DeliveryTracker {
    catalog: Arc<Catalog>,
    last_inventory: Inventory,
    session: Option<TrackingSession>,
}

impl DeliveryTracker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            last_inventory: Inventory::new(),
            session: None,
        }
    }

    /// Start tracking a delivery picked up from the order dialogue.
    ///
    /// A real session already underway wins: the dialogue re-fires every
    /// game tick while it stays open, and restarting would discard
    /// progress. A practice session yields to a real order.
    pub fn on_order_detected(&mut self, recipient: &str, order: &str) -> Result<(), Error> {
        if let Some(session) = &self.session {
            if !session.practice {
                debug!(order, "ignoring repeat order while tracking");
                return Ok(());
            }
            self.on_reset();
        }
        self.start(recipient.to_string(), order, false)
    }

    /// Start an untimed practice run of `order`. Any active session is
    /// dropped first; the run ends on its own once the dish is made.
    pub fn start_practice(&mut self, order: &str) -> Result<(), Error> {
        self.on_reset();
        self.start(recipients::PRACTICE_RECIPIENT.to_string(), order, true)
    }

    fn start(&mut self, recipient: String, order: &str, practice: bool) -> Result<(), Error> {
        let recipe = self.catalog.lookup(order)?;
        let difficulty = recipients::difficulty(&recipient)
            .ok_or_else(|| Error::UnknownRecipient(recipient.clone()))?;
        let stages = build_stages(recipe);
        let current = infer(&stages, &self.last_inventory, 0).unwrap_or(0);
        let (current_view, future_view) =
            overlay::build_views(&stages, current, &self.last_inventory);
        info!(
            order = recipe.name,
            recipient = %recipient,
            stage = current,
            practice,
            "tracking delivery"
        );
        self.session = Some(TrackingSession {
            order_name: recipe.name,
            recipient,
            difficulty,
            stages,
            current,
            current_view,
            future_view,
            practice,
        });
        self.end_practice_if_delivered();
        Ok(())
    }

    /// Ingest a full inventory snapshot, advancing the session when the
    /// snapshot proves a later stage and refreshing held counts otherwise.
    pub fn on_inventory_snapshot(&mut self, items: Inventory) {
        self.last_inventory = items;
        let Some(session) = &mut self.session else {
            return;
        };
        match infer(&session.stages, &self.last_inventory, session.current) {
            Some(next) => {
                debug!(
                    order = session.order_name,
                    from = session.current,
                    to = next,
                    "stage advanced"
                );
                session.current = next;
                let (current_view, future_view) =
                    overlay::build_views(&session.stages, next, &self.last_inventory);
                session.current_view = current_view;
                session.future_view = future_view;
            }
            None => {
                session.current_view.refresh_counts(&self.last_inventory);
                session.future_view.refresh_counts(&self.last_inventory);
            }
        }
        self.end_practice_if_delivered();
    }

    /// Drop any active session. Safe to call repeatedly.
    pub fn on_reset(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(order = session.order_name, "session reset");
        }
    }

    /// A practice run has nothing to hand over, so reaching the deliver
    /// stage completes it.
    fn end_practice_if_delivered(&mut self) {
        let done = self
            .session
            .as_ref()
            .is_some_and(|s| s.practice && s.deliver_reached());
        if done {
            info!("practice run complete");
            self.session = None;
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&TrackingSession> {
        self.session.as_ref()
    }

    pub fn deliver_stage_reached(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(TrackingSession::deliver_reached)
    }

    pub fn current_stage_directions(&self) -> Option<&'static str> {
        self.session
            .as_ref()
            .map(|s| s.current_stage().kind.directions())
    }

    pub fn current_requirements(&self) -> Option<&RequirementView> {
        self.session.as_ref().map(|s| &s.current_view)
    }

    pub fn future_requirements(&self) -> Option<&RequirementView> {
        self.session.as_ref().map(|s| &s.future_view)
    }

    pub fn recipient_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.recipient.as_str())
    }

    /// Case-insensitive match, for hover and minimap checks.
    pub fn is_recipient(&self, name: &str) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.recipient.eq_ignore_ascii_case(name))
    }

    /// Time allowed for the active delivery, by recipient difficulty.
    pub fn delivery_window(&self) -> Option<Duration> {
        self.session
            .as_ref()
            .map(|s| s.difficulty.delivery_window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::items;
    use crate::core::types::ItemId;

    fn tracker() -> DeliveryTracker {
        DeliveryTracker::new(Arc::new(Catalog::standard().unwrap()))
    }

    fn holding(items: &[(ItemId, u32)]) -> Inventory {
        items.iter().copied().collect()
    }

    #[test]
    fn test_unknown_order_is_an_error() {
        let mut tracker = tracker();
        let err = tracker.on_order_detected("Burkor", "mud pie").unwrap_err();
        assert!(matches!(err, Error::UnknownOrder(_)));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_unknown_recipient_is_an_error() {
        let mut tracker = tracker();
        let err = tracker.on_order_detected("Bob", "worm hole").unwrap_err();
        assert!(matches!(err, Error::UnknownRecipient(name) if name == "Bob"));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_queries_are_empty_while_idle() {
        let tracker = tracker();
        assert!(!tracker.is_tracking());
        assert!(!tracker.deliver_stage_reached());
        assert!(tracker.current_stage_directions().is_none());
        assert!(tracker.current_requirements().is_none());
        assert!(tracker.future_requirements().is_none());
        assert!(tracker.recipient_name().is_none());
        assert!(tracker.delivery_window().is_none());
        assert!(!tracker.is_recipient("Burkor"));
    }

    #[test]
    fn test_full_delivery_walkthrough() {
        let mut tracker = tracker();
        tracker
            .on_order_detected("Burkor", "tangled toads legs")
            .unwrap();

        let session = tracker.session().unwrap();
        assert_eq!(session.order_name(), "tangled toads legs");
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.stage_count(), 5);
        assert_eq!(tracker.delivery_window(), Some(Duration::from_secs(360)));
        assert_eq!(
            tracker.current_stage_directions(),
            Some(StageKind::CreateMould.directions())
        );

        tracker.on_inventory_snapshot(holding(&[(items::RAW_GNOMEBOWL, 1)]));
        assert_eq!(tracker.session().unwrap().current_index(), 1);
        assert_eq!(
            tracker.current_stage_directions(),
            Some(StageKind::BakeMould.directions())
        );

        tracker.on_inventory_snapshot(holding(&[
            (items::HALF_BAKED_BOWL, 1),
            (items::TOADS_LEGS, 4),
            (items::GNOME_SPICE, 2),
        ]));
        let session = tracker.session().unwrap();
        assert_eq!(session.current_index(), 2);
        assert_eq!(
            session.current_view().get(items::TOADS_LEGS).map(|e| e.held),
            Some(4)
        );

        tracker.on_inventory_snapshot(holding(&[(items::HALF_MADE_BOWL, 1)]));
        assert_eq!(tracker.session().unwrap().current_index(), 3);

        tracker.on_inventory_snapshot(holding(&[
            (items::TANGLED_TOADS_LEGS, 1),
            (items::ALUFT_ALOFT_BOX, 1),
        ]));
        assert!(tracker.deliver_stage_reached());
        assert!(tracker.is_tracking());
        assert!(tracker.is_recipient("burkor"));
    }

    #[test]
    fn test_snapshot_noise_does_not_regress() {
        let mut tracker = tracker();
        tracker
            .on_order_detected("Burkor", "tangled toads legs")
            .unwrap();
        tracker.on_inventory_snapshot(holding(&[(items::HALF_MADE_BOWL, 1)]));
        assert_eq!(tracker.session().unwrap().current_index(), 3);

        // Early-stage leftovers must not pull the session backwards.
        tracker.on_inventory_snapshot(holding(&[(items::RAW_GNOMEBOWL, 2)]));
        assert_eq!(tracker.session().unwrap().current_index(), 3);
    }

    #[test]
    fn test_snapshot_before_order_seeds_inference() {
        let mut tracker = tracker();
        tracker.on_inventory_snapshot(holding(&[(items::HALF_MADE_BOWL, 1)]));
        tracker
            .on_order_detected("Burkor", "tangled toads legs")
            .unwrap();
        assert_eq!(tracker.session().unwrap().current_index(), 3);
    }

    #[test]
    fn test_repeat_order_is_ignored_while_tracking() {
        let mut tracker = tracker();
        tracker.on_order_detected("Burkor", "worm hole").unwrap();
        tracker.on_order_detected("Dalila", "fruit blast").unwrap();

        let session = tracker.session().unwrap();
        assert_eq!(session.order_name(), "worm hole");
        assert_eq!(session.recipient(), "Burkor");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut tracker = tracker();
        tracker.on_order_detected("Garkor", "worm hole").unwrap();
        tracker.on_reset();
        assert!(!tracker.is_tracking());
        tracker.on_reset();
        assert!(!tracker.is_tracking());
        assert!(tracker.current_requirements().is_none());
    }

    #[test]
    fn test_hard_recipient_gets_the_long_window() {
        let mut tracker = tracker();
        tracker.on_order_detected("Garkor", "worm hole").unwrap();
        assert_eq!(tracker.delivery_window(), Some(Duration::from_secs(660)));
    }

    #[test]
    fn test_practice_run_ends_at_deliver() {
        let mut tracker = tracker();
        tracker.start_practice("fruit blast").unwrap();
        let session = tracker.session().unwrap();
        assert!(session.is_practice());
        assert_eq!(session.recipient(), recipients::PRACTICE_RECIPIENT);

        tracker.on_inventory_snapshot(holding(&[(items::MIXED_BLAST, 1)]));
        assert_eq!(tracker.session().unwrap().current_index(), 1);

        tracker.on_inventory_snapshot(holding(&[(items::FRUIT_BLAST, 1)]));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_practice_completes_immediately_with_dish_in_hand() {
        let mut tracker = tracker();
        tracker.on_inventory_snapshot(holding(&[(items::FRUIT_BLAST, 1)]));
        tracker.start_practice("fruit blast").unwrap();
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_real_order_cancels_practice() {
        let mut tracker = tracker();
        tracker.start_practice("fruit blast").unwrap();
        tracker.on_order_detected("Burkor", "worm hole").unwrap();

        let session = tracker.session().unwrap();
        assert!(!session.is_practice());
        assert_eq!(session.order_name(), "worm hole");
    }

    #[test]
    fn test_practice_replaces_active_session() {
        let mut tracker = tracker();
        tracker.on_order_detected("Burkor", "worm hole").unwrap();
        tracker.start_practice("fruit blast").unwrap();

        let session = tracker.session().unwrap();
        assert!(session.is_practice());
        assert_eq!(session.order_name(), "fruit blast");
    }
}

use std::collections::BTreeSet;

use crate::render::{ids, Side};

/// What a scroll update should start.
#[derive(Debug, Default, PartialEq)]
pub struct RevealPlan {
    pub start_meters: bool,
    pub items: Vec<(usize, Side)>,
}

/// Once-only scroll triggers: the meters count up the first time they enter
/// the viewport, each timeline item slides in the first time it does.
#[derive(Debug)]
pub struct ScrollReveals {
    sides: Vec<Side>,
    meters_triggered: bool,
    revealed: BTreeSet<usize>,
}

impl ScrollReveals {
    /// `sides` is the laid-out side of each timeline item, by index.
    pub fn new(sides: Vec<Side>) -> Self {
        Self {
            sides,
            meters_triggered: false,
            revealed: BTreeSet::new(),
        }
    }

    pub fn meters_triggered(&self) -> bool {
        self.meters_triggered
    }

    /// Items that have not been revealed yet start hidden at their offset.
    pub fn pending_items(&self) -> impl Iterator<Item = (usize, Side)> + '_ {
        self.sides
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| !self.revealed.contains(i))
    }

    /// Registers the mount ids now in view and returns the triggers that fire.
    pub fn on_visible(&mut self, visible: &[String]) -> RevealPlan {
        let mut plan = RevealPlan::default();
        for id in visible {
            if id == ids::IMPACT_METERS {
                if !self.meters_triggered {
                    self.meters_triggered = true;
                    plan.start_meters = true;
                }
                continue;
            }
            let Some(index) = id
                .strip_prefix("timeline-item-")
                .and_then(|i| i.parse::<usize>().ok())
            else {
                continue;
            };
            if let Some(&side) = self.sides.get(index) {
                if self.revealed.insert(index) {
                    plan.items.push((index, side));
                }
            }
        }
        plan
    }
}

/// `bottom` style for the progress rocket at scroll `progress` (0–1).
pub fn rocket_bottom(progress: f64) -> String {
    let p = progress.clamp(0.0, 1.0);
    format!("calc({:.1}% - {:.2}rem)", p * 100.0, p * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_meters_trigger_once() {
        let mut reveals = ScrollReveals::new(vec![]);
        assert!(reveals.on_visible(&visible(&["impact-meters-container"])).start_meters);
        assert!(!reveals.on_visible(&visible(&["impact-meters-container"])).start_meters);
        assert!(reveals.meters_triggered());
    }

    #[test]
    fn test_items_reveal_once_with_their_side() {
        let mut reveals = ScrollReveals::new(vec![Side::Left, Side::Right]);
        let plan = reveals.on_visible(&visible(&["timeline-item-1", "timeline-item-0"]));
        assert_eq!(plan.items, vec![(1, Side::Right), (0, Side::Left)]);
        let again = reveals.on_visible(&visible(&["timeline-item-1"]));
        assert!(again.items.is_empty());
        assert_eq!(reveals.pending_items().count(), 0);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut reveals = ScrollReveals::new(vec![Side::Left]);
        let plan = reveals.on_visible(&visible(&["timeline-item-9", "footer", "timeline-item-x"]));
        assert_eq!(plan, RevealPlan::default());
    }

    #[test]
    fn test_rocket_bottom_endpoints() {
        assert_eq!(rocket_bottom(0.0), "calc(0.0% - 0.00rem)");
        assert_eq!(rocket_bottom(1.0), "calc(100.0% - 2.00rem)");
        assert_eq!(rocket_bottom(7.0), "calc(100.0% - 2.00rem)");
    }
}

//! Selection policy: pick exactly one window among several matches.

use clap::ValueEnum;
use mac_winlist::WindowRecord;

/// Deterministic rule used to pick one window among several matches.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// The window closest to the user (minimum stacking layer).
    #[default]
    Frontmost,
    /// The window with the greatest on-screen area.
    Largest,
    /// The first window in the OS enumeration order.
    First,
}

/// Pick one candidate per `strategy`.
///
/// Pure function: empty input yields `None`, a single candidate is returned
/// regardless of strategy, and ties resolve to the earliest record in input
/// order. Ambiguity is never an error.
pub fn select(candidates: &[WindowRecord], strategy: Strategy) -> Option<WindowRecord> {
    match strategy {
        Strategy::First => candidates.first().cloned(),
        Strategy::Frontmost => pick(candidates, |best, next| next.layer < best.layer),
        Strategy::Largest => {
            pick(candidates, |best, next| {
                next.bounds.area() > best.bounds.area()
            })
        }
    }
}

/// Keep the earliest record unless `better(best, next)` holds strictly.
fn pick(
    candidates: &[WindowRecord],
    better: impl Fn(&WindowRecord, &WindowRecord) -> bool,
) -> Option<WindowRecord> {
    let mut iter = candidates.iter();
    let mut best = iter.next()?;
    for next in iter {
        if better(best, next) {
            best = next;
        }
    }
    Some(best.clone())
}

#[cfg(test)]
mod tests {
    use mac_winlist::Bounds;

    use super::*;

    fn window(id: u32, layer: i32, width: f64, height: f64) -> WindowRecord {
        WindowRecord {
            id,
            owner_name: "Studio".to_string(),
            owner_pid: 42,
            title: String::new(),
            bounds: Bounds {
                x: 0.0,
                y: 0.0,
                width,
                height,
            },
            layer,
            is_on_screen: true,
        }
    }

    #[test]
    fn empty_input_yields_none() {
        for strategy in [Strategy::Frontmost, Strategy::Largest, Strategy::First] {
            assert!(select(&[], strategy).is_none());
        }
    }

    #[test]
    fn single_candidate_wins_under_every_strategy() {
        let only = window(9, 30, 10.0, 10.0);
        for strategy in [Strategy::Frontmost, Strategy::Largest, Strategy::First] {
            assert_eq!(select(&[only.clone()], strategy).unwrap().id, 9);
        }
    }

    #[test]
    fn frontmost_picks_minimum_layer() {
        let candidates = [
            window(1, 5, 100.0, 100.0),
            window(2, 2, 10.0, 10.0),
            window(3, 8, 500.0, 500.0),
        ];
        let picked = select(&candidates, Strategy::Frontmost).unwrap();
        assert_eq!(picked.id, 2);
        assert!(candidates.iter().all(|w| picked.layer <= w.layer));
    }

    #[test]
    fn largest_picks_maximum_area() {
        // Areas: 10000, 307200, 250000; 640x480 wins despite a later
        // candidate with larger edges.
        let candidates = [
            window(1, 0, 100.0, 100.0),
            window(2, 0, 640.0, 480.0),
            window(3, 0, 500.0, 500.0),
        ];
        let picked = select(&candidates, Strategy::Largest).unwrap();
        assert_eq!(picked.id, 2);
        assert!(
            candidates
                .iter()
                .all(|w| picked.bounds.area() >= w.bounds.area())
        );
    }

    #[test]
    fn first_preserves_query_order() {
        let candidates = [window(7, 9, 1.0, 1.0), window(8, 0, 999.0, 999.0)];
        assert_eq!(select(&candidates, Strategy::First).unwrap().id, 7);
    }

    #[test]
    fn layer_ties_resolve_to_input_order() {
        let candidates = [window(1, 3, 10.0, 10.0), window(2, 3, 10.0, 10.0)];
        assert_eq!(select(&candidates, Strategy::Frontmost).unwrap().id, 1);
    }

    #[test]
    fn area_ties_resolve_to_input_order() {
        let candidates = [
            window(1, 0, 20.0, 30.0),
            window(2, 0, 30.0, 20.0),
            window(3, 0, 60.0, 10.0),
        ];
        assert_eq!(select(&candidates, Strategy::Largest).unwrap().id, 1);
    }

    #[test]
    fn selection_is_deterministic() {
        let candidates = [
            window(1, 5, 100.0, 100.0),
            window(2, 2, 10.0, 10.0),
            window(3, 2, 300.0, 300.0),
        ];
        let first = select(&candidates, Strategy::Frontmost).unwrap();
        for _ in 0..10 {
            assert_eq!(select(&candidates, Strategy::Frontmost).unwrap(), first);
        }
    }
}

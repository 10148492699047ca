//! Active-section resolution: a pure function from (current active,
//! observation batch) to the new active section, so the scroll-spy can
//! be tested without a rendering surface.

use lenslight_protocol::{SharedStr, VisibilityObservation};

/// Resolve the active section from one observation batch.
///
/// Observations with `is_intersecting == false` are ignored. If nothing
/// in the batch intersects, the previous active section is retained —
/// the active section is never cleared. Otherwise the observation with
/// the highest intersection ratio wins; on an exact tie the first one
/// in batch iteration order wins.
///
/// The tie-break is a left-to-right fold with a strict `>` comparison,
/// kept deliberately: it makes resolution reproducible for any fixed
/// batch, and hosts that emit batches in registry order get "first
/// listed wins" for free.
pub fn resolve_active(current: &SharedStr, batch: &[VisibilityObservation]) -> SharedStr {
    let mut best: Option<&VisibilityObservation> = None;
    for obs in batch.iter().filter(|o| o.is_intersecting) {
        match best {
            Some(b) if obs.intersection_ratio > b.intersection_ratio => best = Some(obs),
            None => best = Some(obs),
            _ => {}
        }
    }
    match best {
        Some(obs) => obs.section.clone(),
        None => current.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(id: &str, ratio: f64) -> VisibilityObservation {
        VisibilityObservation::new(id, ratio)
    }

    #[test]
    fn empty_batch_retains_current() {
        let current = SharedStr::from("about");
        assert_eq!(resolve_active(&current, &[]), "about");
    }

    #[test]
    fn non_intersecting_batch_retains_current() {
        let current = SharedStr::from("services");
        let batch = vec![obs("home", 0.0), obs("portfolio", 0.0)];
        assert_eq!(resolve_active(&current, &batch), "services");
    }

    #[test]
    fn max_ratio_wins() {
        let current = SharedStr::from("home");
        let batch = vec![obs("home", 0.2), obs("portfolio", 0.8), obs("about", 0.5)];
        assert_eq!(resolve_active(&current, &batch), "portfolio");
    }

    #[test]
    fn exact_tie_first_in_batch_wins() {
        let current = SharedStr::from("home");
        let batch = vec![obs("a", 0.3), obs("b", 0.9), obs("c", 0.9)];
        assert_eq!(resolve_active(&current, &batch), "b");
    }

    #[test]
    fn deterministic_under_replay() {
        let current = SharedStr::from("home");
        let batch = vec![obs("home", 0.5), obs("portfolio", 0.5), obs("about", 0.1)];
        let first = resolve_active(&current, &batch);
        for _ in 0..10 {
            assert_eq!(resolve_active(&current, &batch), first);
        }
    }

    #[test]
    fn mixed_intersection_flags() {
        let current = SharedStr::from("home");
        let batch = vec![
            VisibilityObservation {
                section: "portfolio".into(),
                intersection_ratio: 0.9,
                is_intersecting: false,
            },
            obs("about", 0.1),
        ];
        // A stale high ratio with is_intersecting = false never wins.
        assert_eq!(resolve_active(&current, &batch), "about");
    }
}

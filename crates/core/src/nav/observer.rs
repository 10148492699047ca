//! Host-side visibility sampling: turns document geometry into
//! [`VisibilityObservation`] batches the way an intersection observer
//! would, with a top margin for the fixed nav bar and a fixed set of
//! ratio checkpoints.

use lenslight_protocol::{NAV_HEIGHT, SharedStr, Viewport, VisibilityObservation};

use crate::layout::SectionExtent;

/// Observation parameters, fixed for the page session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Subtracted from the top of the viewport, so a section is not
    /// "visible" merely because its top edge sits under the nav bar.
    pub top_margin: f64,
    /// Ratio checkpoints at which a crossing triggers a new batch.
    /// Multiple checkpoints keep ratio comparisons meaningful instead
    /// of binary.
    pub thresholds: [f64; 5],
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            top_margin: NAV_HEIGHT,
            thresholds: [0.0, 0.25, 0.5, 0.75, 1.0],
        }
    }
}

/// Samples section visibility against the viewport and emits a batch
/// whenever any section crosses a threshold checkpoint.
///
/// One observer is registered per page session and released with the
/// controller at teardown. Batches are emitted in extent (registry)
/// order, carrying every observed section's current ratio.
#[derive(Debug)]
pub struct ViewportObserver {
    config: ObserverConfig,
    last_buckets: Vec<(SharedStr, u8)>,
}

impl ViewportObserver {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            last_buckets: Vec::new(),
        }
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Sample all extents. Returns `Some(batch)` on the first call and
    /// whenever a section moved into a different threshold bucket since
    /// the last emitted batch; `None` while nothing crossed a checkpoint.
    pub fn observe(
        &mut self,
        extents: &[SectionExtent],
        viewport: &Viewport,
    ) -> Option<Vec<VisibilityObservation>> {
        let mut batch = Vec::with_capacity(extents.len());
        let mut buckets = Vec::with_capacity(extents.len());
        for extent in extents {
            let ratio = self.intersection_ratio(extent, viewport);
            buckets.push((extent.id.clone(), self.bucket(ratio)));
            batch.push(VisibilityObservation::new(extent.id.clone(), ratio));
        }

        if buckets == self.last_buckets {
            return None;
        }
        self.last_buckets = buckets;
        Some(batch)
    }

    /// Forget the last sampling, so the next `observe` always emits.
    pub fn reset(&mut self) {
        self.last_buckets.clear();
    }

    fn intersection_ratio(&self, extent: &SectionExtent, viewport: &Viewport) -> f64 {
        if extent.height <= 0.0 {
            return 0.0;
        }
        let region_top = viewport.scroll_y + self.config.top_margin;
        let region_bottom = viewport.scroll_y + viewport.height;
        let visible = (extent.bottom().min(region_bottom) - extent.top.max(region_top)).max(0.0);
        (visible / extent.height).clamp(0.0, 1.0)
    }

    /// Index of the highest checkpoint reached; 0 means not intersecting.
    fn bucket(&self, ratio: f64) -> u8 {
        if ratio <= 0.0 {
            return 0;
        }
        let crossed = self
            .config
            .thresholds
            .iter()
            .filter(|&&t| t > 0.0 && ratio >= t)
            .count();
        1 + crossed as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents() -> Vec<SectionExtent> {
        vec![
            SectionExtent::new("home", 0.0, 800.0),
            SectionExtent::new("portfolio", 800.0, 800.0),
        ]
    }

    #[test]
    fn first_sample_always_emits() {
        let mut observer = ViewportObserver::new(ObserverConfig::default());
        let viewport = Viewport::new(0.0, 1024.0, 800.0);
        let batch = observer.observe(&extents(), &viewport);
        assert!(batch.is_some());
    }

    #[test]
    fn quiet_while_no_checkpoint_crossed() {
        let mut observer = ViewportObserver::new(ObserverConfig::default());
        // Window shorter than the first section: the nudge below cannot
        // reach the second one, and the first stays in the same bucket.
        let viewport = Viewport::new(0.0, 1024.0, 600.0);
        observer.observe(&extents(), &viewport);
        // A few pixels of scroll that stays within the same buckets.
        let nudged = Viewport::new(4.0, 1024.0, 600.0);
        assert!(observer.observe(&extents(), &nudged).is_none());
    }

    #[test]
    fn crossing_a_checkpoint_emits_again() {
        let mut observer = ViewportObserver::new(ObserverConfig::default());
        observer.observe(&extents(), &Viewport::new(0.0, 1024.0, 800.0));
        let scrolled = Viewport::new(600.0, 1024.0, 800.0);
        let batch = observer.observe(&extents(), &scrolled);
        assert!(batch.is_some());
    }

    #[test]
    fn nav_bar_occludes_the_top() {
        let observer = ViewportObserver::new(ObserverConfig::default());
        // Section fully under the nav bar overlay: not intersecting.
        let extent = SectionExtent::new("home", 0.0, 60.0);
        let viewport = Viewport::new(0.0, 1024.0, 800.0);
        assert_eq!(observer.intersection_ratio(&extent, &viewport), 0.0);
    }

    #[test]
    fn full_visibility_is_ratio_one() {
        let observer = ViewportObserver::new(ObserverConfig::default());
        let extent = SectionExtent::new("about", 200.0, 400.0);
        let viewport = Viewport::new(100.0, 1024.0, 800.0);
        let ratio = observer.intersection_ratio(&extent, &viewport);
        assert!((ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn buckets_follow_checkpoints() {
        let observer = ViewportObserver::new(ObserverConfig::default());
        assert_eq!(observer.bucket(0.0), 0);
        assert_eq!(observer.bucket(0.1), 1);
        assert_eq!(observer.bucket(0.25), 2);
        assert_eq!(observer.bucket(0.5), 3);
        assert_eq!(observer.bucket(0.75), 4);
        assert_eq!(observer.bucket(1.0), 5);
    }

    #[test]
    fn reset_forces_reemission() {
        let mut observer = ViewportObserver::new(ObserverConfig::default());
        let viewport = Viewport::new(0.0, 1024.0, 800.0);
        observer.observe(&extents(), &viewport);
        assert!(observer.observe(&extents(), &viewport).is_none());
        observer.reset();
        assert!(observer.observe(&extents(), &viewport).is_some());
    }
}

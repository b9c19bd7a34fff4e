//! Engagement events, emitted as structured `tracing` events on the
//! `folio::analytics` target. Nothing leaves the machine.

use std::collections::BTreeSet;
use std::time::Duration;

pub const SCROLL_DEPTHS: [u8; 4] = [25, 50, 75, 100];
pub const ENGAGEMENT_MILESTONES: [u64; 4] = [30, 60, 120, 300];

pub fn track_event(category: &str, action: &str, label: &str) {
    tracing::info!(
        target: "folio::analytics",
        category,
        action,
        label,
        "analytics event"
    );
}

/// Milestones already reported this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Milestones {
    pub scroll_depths: BTreeSet<u8>,
    pub time_on_page: BTreeSet<u64>,
}

impl Milestones {
    /// Reports every depth at or below `percent` not reported yet.
    pub fn record_scroll_depth(&mut self, percent: u8) {
        for depth in SCROLL_DEPTHS {
            if percent >= depth && self.scroll_depths.insert(depth) {
                track_event("Scroll Depth", "scroll", &format!("{depth}%"));
            }
        }
    }

    pub fn record_time_on_page(&mut self, elapsed: Duration) {
        let secs = elapsed.as_secs();
        for milestone in ENGAGEMENT_MILESTONES {
            if secs >= milestone && self.time_on_page.insert(milestone) {
                track_event("Engagement", "time_on_page", &format!("{milestone}s"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported<T: Copy>(set: &BTreeSet<T>) -> Vec<T> {
        set.iter().copied().collect()
    }

    #[test]
    fn test_scroll_depth_reported_once() {
        let mut m = Milestones::default();
        m.record_scroll_depth(10);
        assert!(m.scroll_depths.is_empty());

        m.record_scroll_depth(60);
        assert_eq!(reported(&m.scroll_depths), vec![25, 50]);

        m.record_scroll_depth(100);
        m.record_scroll_depth(0);
        assert_eq!(reported(&m.scroll_depths), vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_time_on_page_milestones() {
        let mut m = Milestones::default();
        m.record_time_on_page(Duration::from_secs(29));
        assert!(m.time_on_page.is_empty());

        m.record_time_on_page(Duration::from_secs(61));
        assert_eq!(reported(&m.time_on_page), vec![30, 60]);

        m.record_time_on_page(Duration::from_secs(400));
        assert_eq!(reported(&m.time_on_page), vec![30, 60, 120, 300]);
    }
}

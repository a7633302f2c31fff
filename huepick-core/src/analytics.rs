/// Session analytics: decision counters and a bounded log of decision
/// latencies.
///
/// Mutated on every accepted decision, never read by the rating rule.
use crate::constants::LATENCY_LOG_CAP;

/// Counters for one session plus lifetime totals that survive resets.
///
/// `session_comparisons` is the round counter the state machine checks
/// against the round cap; `total_comparisons` accumulates across `reset`
/// calls for the lifetime of the session object.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SessionAnalytics {
    pub session_comparisons: usize,
    pub total_comparisons: usize,
    pub picks: usize,
    pub passes: usize,
    /// Most recent decision latencies in seconds, capped at LATENCY_LOG_CAP.
    #[cfg_attr(feature = "serde", serde(default))]
    latencies: Vec<f64>,
}

impl SessionAnalytics {
    /// Record an accepted pick decision and its latency.
    pub fn record_pick(&mut self, latency_secs: f64) {
        self.session_comparisons += 1;
        self.total_comparisons += 1;
        self.picks += 1;
        self.push_latency(latency_secs);
    }

    /// Record an accepted pass decision and its latency.
    pub fn record_pass(&mut self, latency_secs: f64) {
        self.session_comparisons += 1;
        self.total_comparisons += 1;
        self.passes += 1;
        self.push_latency(latency_secs);
    }

    fn push_latency(&mut self, secs: f64) {
        self.latencies.push(secs);
        if self.latencies.len() > LATENCY_LOG_CAP {
            self.latencies.remove(0);
        }
    }

    /// Running average over the retained latency log, 0.0 when empty.
    pub fn average_latency(&self) -> f64 {
        if self.latencies.is_empty() {
            return 0.0;
        }
        self.latencies.iter().sum::<f64>() / self.latencies.len() as f64
    }

    pub fn latencies(&self) -> &[f64] {
        &self.latencies
    }

    /// Zero the session-scoped counters and the latency log. Lifetime totals
    /// are kept.
    pub fn reset_session(&mut self) {
        self.session_comparisons = 0;
        self.picks = 0;
        self.passes = 0;
        self.latencies.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_track_decision_kinds() {
        let mut analytics = SessionAnalytics::default();
        analytics.record_pick(0.5);
        analytics.record_pick(1.5);
        analytics.record_pass(1.0);

        assert_eq!(analytics.session_comparisons, 3);
        assert_eq!(analytics.total_comparisons, 3);
        assert_eq!(analytics.picks, 2);
        assert_eq!(analytics.passes, 1);
        assert!((analytics.average_latency() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_latency_log_is_bounded() {
        let mut analytics = SessionAnalytics::default();
        for i in 0..(LATENCY_LOG_CAP + 10) {
            analytics.record_pick(i as f64);
        }
        assert_eq!(analytics.latencies().len(), LATENCY_LOG_CAP);
        // Oldest entries fell off the front.
        assert_eq!(analytics.latencies()[0], 10.0);
    }

    #[test]
    fn test_reset_keeps_lifetime_totals() {
        let mut analytics = SessionAnalytics::default();
        analytics.record_pick(0.1);
        analytics.record_pass(0.2);
        analytics.reset_session();

        assert_eq!(analytics.session_comparisons, 0);
        assert_eq!(analytics.picks, 0);
        assert_eq!(analytics.passes, 0);
        assert!(analytics.latencies().is_empty());
        assert_eq!(analytics.average_latency(), 0.0);
        assert_eq!(analytics.total_comparisons, 2);
    }
}

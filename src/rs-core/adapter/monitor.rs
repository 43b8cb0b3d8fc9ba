use crate::{
    bindings::{FrameIdentity, TimerId, TimerReason},
    host::PlaybackHost,
};

/// Verdict of a single frame check.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameCheck {
    /// The client has no decoded frame to look at.
    NoFrame,
    /// A new frame was decoded since the last check.
    Advanced,
    /// Same frame as the last check whereas we're supposed to be playing.
    Stalled,
    /// Same frame as the last check, which is expected as we're not playing.
    Unchanged,
}

/// Periodically compares the last decoded frame with the one seen at the previous
/// check, to detect frozen video.
///
/// Purely diagnostic: it never changes the playback's state.
pub(crate) struct FrameMonitor {
    /// Milliseconds between two checks.
    interval: f64,

    /// Pending timer for the next check. `None` when the monitor is not running.
    timer: Option<TimerId>,

    /// Identity of the frame seen at the last check.
    last_frame: Option<FrameIdentity>,
}

impl FrameMonitor {
    pub(crate) fn new(interval: f64) -> Self {
        Self {
            interval,
            timer: None,
            last_frame: None,
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Schedule the next check, if none is pending already.
    pub(crate) fn schedule<H: PlaybackHost>(&mut self, host: &mut H) {
        if self.timer.is_none() {
            self.timer = Some(host.start_timer(self.interval, TimerReason::FrameMonitor));
        }
    }

    /// Clear the pending check and forget the last frame seen.
    pub(crate) fn cancel<H: PlaybackHost>(&mut self, host: &mut H) {
        if let Some(id) = self.timer.take() {
            host.clear_timer(id);
        }
        self.last_frame = None;
    }

    /// To call when a `FrameMonitor` timer ended. Returns `true` if it was the pending
    /// one, in which case a check should be performed.
    ///
    /// Timers which are not the pending one (e.g. expiring right as they were cleared)
    /// are ignored.
    pub(crate) fn take_timer(&mut self, id: TimerId) -> bool {
        if self.timer == Some(id) {
            self.timer = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&mut self, frame: Option<FrameIdentity>, is_playing: bool) -> FrameCheck {
        let Some(frame) = frame else {
            self.last_frame = None;
            return FrameCheck::NoFrame;
        };
        let verdict = match &self.last_frame {
            Some(last) if *last == frame => {
                if is_playing {
                    FrameCheck::Stalled
                } else {
                    FrameCheck::Unchanged
                }
            }
            _ => FrameCheck::Advanced,
        };
        self.last_frame = Some(frame);
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;

    #[test]
    fn test_check_verdicts() {
        let mut monitor = FrameMonitor::new(1000.);
        assert_eq!(monitor.check(None, true), FrameCheck::NoFrame);
        assert_eq!(
            monitor.check(Some(FrameIdentity::Timestamp(0.)), true),
            FrameCheck::Advanced
        );
        assert_eq!(
            monitor.check(Some(FrameIdentity::Timestamp(0.)), true),
            FrameCheck::Stalled
        );
        assert_eq!(
            monitor.check(Some(FrameIdentity::Timestamp(0.)), false),
            FrameCheck::Unchanged
        );
        assert_eq!(
            monitor.check(Some(FrameIdentity::Timestamp(33.)), true),
            FrameCheck::Advanced
        );

        // a missing frame resets the comparison
        assert_eq!(monitor.check(None, true), FrameCheck::NoFrame);
        assert_eq!(
            monitor.check(Some(FrameIdentity::Timestamp(33.)), true),
            FrameCheck::Advanced
        );
    }

    #[test]
    fn test_identity_kinds_never_match() {
        let mut monitor = FrameMonitor::new(1000.);
        monitor.check(Some(FrameIdentity::Id("1".to_owned())), true);
        assert_eq!(
            monitor.check(Some(FrameIdentity::Hash(1)), true),
            FrameCheck::Advanced
        );
    }

    #[test]
    fn test_schedule_and_cancel() {
        let (mut host, journal) = MockHost::new();
        let mut monitor = FrameMonitor::new(500.);
        monitor.schedule(&mut host);
        monitor.schedule(&mut host);
        assert!(monitor.is_running());
        assert_eq!(journal.borrow().pending_timers.len(), 1);
        assert_eq!(journal.borrow().pending_timers[0].1, 500.);

        let (id, _, reason) = journal.borrow_mut().expire_next_timer().unwrap();
        assert_eq!(reason, TimerReason::FrameMonitor);
        assert!(!monitor.take_timer(id + 1.));
        assert!(monitor.take_timer(id));
        assert!(!monitor.is_running());

        monitor.schedule(&mut host);
        monitor.cancel(&mut host);
        assert!(!monitor.is_running());
        assert!(journal.borrow().pending_timers.is_empty());
        assert_eq!(journal.borrow().cleared_timers.len(), 1);
    }
}

use std::{cell::RefCell, rc::Rc};

use super::{HostError, PlaybackHost, SurfaceSpec, TransportClient};
use crate::bindings::{FrameObservation, PlaybackEvent, SurfaceId, TimerId, TimerReason};

/// Everything a `MockHost` and its clients went through.
#[derive(Debug, Default)]
pub(crate) struct Journal {
    pub(crate) events: Vec<(PlaybackEvent, Option<String>)>,
    pub(crate) surfaces: Vec<SurfaceSpec>,
    pub(crate) clients_created: u32,
    pub(crate) closed_clients: u32,
    /// Operations attempted on a client which was already closed.
    pub(crate) calls_after_close: u32,
    pub(crate) connection_urls: Vec<Option<String>>,
    pub(crate) broadcast_paths: Vec<String>,
    pub(crate) video_paused: Option<bool>,
    pub(crate) audio_paused: Option<bool>,
    pub(crate) audio_muted: Option<bool>,
    pub(crate) audio_volume: Option<f64>,
    pub(crate) current_frame: Option<FrameObservation>,
    pub(crate) pending_timers: Vec<(TimerId, f64, TimerReason)>,
    pub(crate) cleared_timers: Vec<TimerId>,
    pub(crate) fail_surface: bool,
    pub(crate) fail_client: bool,
    next_timer_id: TimerId,
    closed: bool,
}

impl Journal {
    pub(crate) fn event_names(&self) -> Vec<&'static str> {
        self.events.iter().map(|(evt, _)| evt.name()).collect()
    }

    pub(crate) fn count(&self, event: PlaybackEvent) -> usize {
        self.events.iter().filter(|(evt, _)| *evt == event).count()
    }

    pub(crate) fn last_connection_url(&self) -> Option<&str> {
        self.connection_urls.last().and_then(|u| u.as_deref())
    }

    /// Simulate the expiry of the oldest pending timer.
    pub(crate) fn expire_next_timer(&mut self) -> Option<(TimerId, f64, TimerReason)> {
        if self.pending_timers.is_empty() {
            None
        } else {
            Some(self.pending_timers.remove(0))
        }
    }

    fn client_call(&mut self) {
        if self.closed {
            self.calls_after_close += 1;
        }
    }
}

pub(crate) type SharedJournal = Rc<RefCell<Journal>>;

/// In-memory `PlaybackHost` recording every call in a shared `Journal`.
pub(crate) struct MockHost {
    journal: SharedJournal,
}

impl MockHost {
    pub(crate) fn new() -> (Self, SharedJournal) {
        let journal = Rc::new(RefCell::new(Journal::default()));
        (
            Self {
                journal: journal.clone(),
            },
            journal,
        )
    }
}

impl PlaybackHost for MockHost {
    type Client = MockClient;

    fn trigger(&mut self, event: PlaybackEvent, payload: Option<&str>) {
        self.journal
            .borrow_mut()
            .events
            .push((event, payload.map(str::to_owned)));
    }

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<SurfaceId, HostError> {
        let mut journal = self.journal.borrow_mut();
        if journal.fail_surface {
            return Err(HostError::SurfaceCreation("no container".to_owned()));
        }
        journal.surfaces.push(*spec);
        Ok(journal.surfaces.len() as SurfaceId)
    }

    fn create_client(
        &mut self,
        _surface: SurfaceId,
        broadcast_path: &str,
    ) -> Result<MockClient, HostError> {
        let mut journal = self.journal.borrow_mut();
        if journal.fail_client {
            return Err(HostError::ClientCreation("element not defined".to_owned()));
        }
        journal.clients_created += 1;
        journal.closed = false;
        journal.broadcast_paths.push(broadcast_path.to_owned());
        Ok(MockClient {
            journal: self.journal.clone(),
        })
    }

    fn start_timer(&mut self, duration_ms: f64, reason: TimerReason) -> TimerId {
        let mut journal = self.journal.borrow_mut();
        journal.next_timer_id += 1.;
        let id = journal.next_timer_id;
        journal.pending_timers.push((id, duration_ms, reason));
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        let mut journal = self.journal.borrow_mut();
        journal.pending_timers.retain(|(t, _, _)| *t != id);
        journal.cleared_timers.push(id);
    }
}

pub(crate) struct MockClient {
    journal: SharedJournal,
}

impl TransportClient for MockClient {
    fn set_connection_url(&mut self, url: Option<&str>) {
        let mut journal = self.journal.borrow_mut();
        journal.client_call();
        journal.connection_urls.push(url.map(str::to_owned));
    }

    fn set_broadcast_path(&mut self, path: &str) {
        let mut journal = self.journal.borrow_mut();
        journal.client_call();
        journal.broadcast_paths.push(path.to_owned());
    }

    fn set_video_paused(&mut self, paused: bool) {
        let mut journal = self.journal.borrow_mut();
        journal.client_call();
        journal.video_paused = Some(paused);
    }

    fn set_audio_paused(&mut self, paused: bool) {
        let mut journal = self.journal.borrow_mut();
        journal.client_call();
        journal.audio_paused = Some(paused);
    }

    fn set_audio_muted(&mut self, muted: bool) {
        let mut journal = self.journal.borrow_mut();
        journal.client_call();
        journal.audio_muted = Some(muted);
    }

    fn set_audio_volume(&mut self, volume: f64) {
        let mut journal = self.journal.borrow_mut();
        journal.client_call();
        journal.audio_volume = Some(volume);
    }

    fn current_frame(&self) -> Option<FrameObservation> {
        let mut journal = self.journal.borrow_mut();
        journal.client_call();
        journal.current_frame.clone()
    }

    fn close(self) {
        let mut journal = self.journal.borrow_mut();
        journal.client_call();
        journal.closed = true;
        journal.closed_clients += 1;
    }
}

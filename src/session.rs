use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::config::ViewConfig;
use crate::view_state::{probe_position, PointerPosition, Section, SectionGeometry, ViewState};

pub type ScrollHandler = Box<dyn FnMut(f64)>;
pub type PointerHandler = Box<dyn FnMut(PointerPosition)>;
pub type TimerCallback = Box<dyn FnOnce()>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("couldn't schedule timer: {0}")]
    Timer(String),
}

/// Handle to a registered listener or pending timer.
///
/// Releasing is idempotent and also happens on drop, so a handle going out of
/// scope can never leave a callback behind.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// The environment the page runs in: global event sources, a timer, and
/// element geometry.
pub trait Host {
    type Geometry: SectionGeometry + 'static;

    fn geometry(&self) -> Self::Geometry;

    /// Handler receives the vertical scroll offset.
    fn listen_scroll(&self, handler: ScrollHandler) -> Subscription;

    fn listen_pointer(&self, handler: PointerHandler) -> Subscription;

    fn schedule(&self, delay: Duration, callback: TimerCallback)
        -> Result<Subscription, HostError>;

    /// Smoothly scrolls the section into view. Returns false when the
    /// section element doesn't exist.
    fn reveal(&self, section: Section) -> bool;
}

/// Shared, owned [`ViewState`]. `f` returns whether it changed anything so
/// readers are only notified on real changes.
pub trait ViewStateCell: Clone + 'static {
    fn update(&self, f: impl FnOnce(&mut ViewState) -> bool);
}

/// Listener and timer lifetimes of one mounted page.
#[derive(Debug)]
pub struct Session {
    live: Arc<AtomicBool>,
    subscriptions: Vec<Subscription>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
            subscriptions: Vec::new(),
        }
    }
}

impl Session {
    pub fn start<H, C>(host: &H, cell: C, config: &ViewConfig) -> Self
    where
        H: Host,
        C: ViewStateCell,
    {
        log::debug!("starting view session");
        let mut session = Session::default();

        let scroll = {
            let live = session.live.clone();
            let cell = cell.clone();
            let geometry = host.geometry();
            let lookahead = config.scroll_lookahead;
            host.listen_scroll(Box::new(move |scroll_y| {
                if !live.load(Ordering::Acquire) {
                    return;
                }
                let probe = probe_position(scroll_y, lookahead);
                cell.update(|state| state.track_scroll(probe, &geometry));
            }))
        };
        session.hold(scroll);

        let pointer = {
            let live = session.live.clone();
            let cell = cell.clone();
            host.listen_pointer(Box::new(move |position| {
                if live.load(Ordering::Acquire) {
                    cell.update(|state| state.track_pointer(position));
                }
            }))
        };
        session.hold(pointer);

        let boot = {
            let live = session.live.clone();
            let cell = cell.clone();
            Box::new(move || {
                if live.load(Ordering::Acquire) {
                    cell.update(|state| {
                        let booted = state.finish_boot();
                        if booted {
                            log::debug!("boot complete");
                        }
                        booted
                    });
                }
            })
        };
        match host.schedule(config.boot_delay, boot) {
            Ok(timer) => session.hold(timer),
            Err(err) => {
                log::warn!("{err}, skipping splash");
                cell.update(ViewState::finish_boot);
            }
        }

        session
    }

    /// Keeps `subscription` alive until teardown. Once torn down, incoming
    /// subscriptions are released immediately.
    pub fn hold(&mut self, mut subscription: Subscription) {
        if self.is_live() {
            self.subscriptions.push(subscription);
        } else {
            subscription.release();
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn teardown(&mut self) {
        if self.live.swap(false, Ordering::AcqRel) {
            log::debug!(
                "tearing down view session ({} subscriptions)",
                self.subscriptions.len()
            );
        }
        for mut subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
    }
}

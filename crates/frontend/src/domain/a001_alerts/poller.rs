//! Periodic alert polling
//!
//! The poller is an owned task: it is built from a source and a sink,
//! started explicitly and stopped through its [`PollerHandle`].

use super::banner::{banners_for, Banner};
use crate::shared::api_utils::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_alerts::dto::AlertSummary;
use gloo_timers::future::TimeoutFuture;
use std::sync::atomic::{AtomicBool, Ordering};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// Where alert counters come from
#[async_trait(?Send)]
pub trait AlertSource {
    async fn fetch_alerts(&self) -> Result<AlertSummary, ApiError>;
}

/// Where banners go; every call replaces what was shown before
pub trait BannerSink {
    fn render_banners(&self, banners: Vec<Banner>);
}

/// Stop switch shared between a running poller and its owner
#[derive(Debug, Clone, Default)]
pub struct PollerHandle {
    stopped: Arc<AtomicBool>,
}

impl PollerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// banners replaced, with the number rendered
    Rendered(usize),
    /// fetch failed, previous banners left in place
    Skipped,
    Stopped,
}

pub struct AlertPoller<S, R> {
    source: S,
    sink: R,
    interval: Duration,
    handle: PollerHandle,
}

impl<S: AlertSource, R: BannerSink> AlertPoller<S, R> {
    pub fn new(source: S, sink: R, interval: Duration) -> Self {
        Self {
            source,
            sink,
            interval,
            handle: PollerHandle::new(),
        }
    }

    /// Use an existing stop switch instead of a fresh one
    pub fn with_handle(mut self, handle: PollerHandle) -> Self {
        self.handle = handle;
        self
    }

    pub fn handle(&self) -> PollerHandle {
        self.handle.clone()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One fetch-and-render cycle
    ///
    /// Nothing is rendered once the handle is stopped, including for a
    /// fetch that was already in flight.
    pub async fn poll_once(&self) -> PollOutcome {
        if self.handle.is_stopped() {
            return PollOutcome::Stopped;
        }

        let result = self.source.fetch_alerts().await;

        if self.handle.is_stopped() {
            return PollOutcome::Stopped;
        }

        match result {
            Ok(summary) => {
                let banners = banners_for(&summary);
                let count = banners.len();
                self.sink.render_banners(banners);
                PollOutcome::Rendered(count)
            }
            Err(e) => {
                log::warn!("Alert poll failed, keeping previous banners: {}", e);
                PollOutcome::Skipped
            }
        }
    }

    /// Polls right away, then sleeps one interval between cycles, until
    /// the handle is stopped
    pub async fn run_loop<W, F>(&self, mut sleep: W)
    where
        W: FnMut(Duration) -> F,
        F: Future<Output = ()>,
    {
        loop {
            if self.poll_once().await == PollOutcome::Stopped {
                break;
            }
            sleep(self.interval()).await;
        }
    }

    /// Runs [`Self::run_loop`] on the browser event loop
    pub fn start(self) -> PollerHandle
    where
        S: 'static,
        R: 'static,
    {
        let handle = self.handle();
        log::info!("Alert poller started, every {} ms", self.interval.as_millis());

        spawn_local(async move {
            self.run_loop(|interval| {
                TimeoutFuture::new(u32::try_from(interval.as_millis()).unwrap_or(u32::MAX))
            })
            .await;
            log::info!("Alert poller stopped");
        });

        handle
    }
}

use crate::host::Host;
use crate::widget::PlaybackWidget;
use std::path::PathBuf;
use std::time::Duration;
use timeplay_core::{Message, UpdateOptions};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

/// Drives a [`PlaybackWidget`] from a single task.
///
/// Host messages and timer deadlines are multiplexed on one loop, so no two
/// transitions ever run concurrently.  Widget virtual time is the time
/// elapsed since the driver was created.
pub struct Driver<H> {
    widget:        PlaybackWidget,
    host:          H,
    settings_path: Option<PathBuf>,
    last_update:   Option<UpdateOptions>,
    started:       Instant,
}

impl<H: Host> Driver<H> {
    pub fn new(host: H) -> Self {
        Self {
            widget:        PlaybackWidget::new(),
            host,
            settings_path: None,
            last_update:   None,
            started:       Instant::now(),
        }
    }

    /// Take persisted objects from a TOML file instead of the data view.
    #[must_use]
    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    pub fn widget(&self) -> &PlaybackWidget {
        &self.widget
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run until `Shutdown` arrives or every sender is dropped.
    pub async fn run(mut self, mut rx: mpsc::Receiver<Message>) -> Self {
        loop {
            let deadline = self.widget.next_deadline().map(|d| self.started + d);

            tokio::select! {
                msg = rx.recv() => match msg {
                    Some(Message::Shutdown) | None => break,
                    Some(msg) => self.handle(msg),
                },
                _ = wait_for(deadline) => {
                    let now = self.elapsed();
                    self.widget.advance_to(now, &mut self.host);
                }
            }
        }

        info!("widget shutting down");
        self.widget.destroy();
        self
    }

    fn handle(&mut self, msg: Message) {
        // Catch up on anything already due so new timers start from "now".
        let now = self.elapsed();
        self.widget.advance_to(now, &mut self.host);

        match msg {
            Message::Update(options) => self.update(options),
            Message::Gesture(gesture) => self.widget.gesture(gesture, &mut self.host),
            Message::ConfigReloaded => match self.last_update.take() {
                Some(mut options) => {
                    info!("Settings reloaded");
                    self.restore_applied_filter(&mut options);
                    self.update(options);
                }
                None => debug!("settings changed before first update"),
            },
            Message::Shutdown => {}
        }
    }

    /// Replace the replayed filters with the one the host now holds.
    fn restore_applied_filter(&self, options: &mut UpdateOptions) {
        let Some(filter) = self.widget.applied_filter() else {
            return;
        };
        match serde_json::to_value(filter) {
            Ok(value) => options.json_filters = vec![value],
            Err(e) => warn!("Keeping previous filters: {e}"),
        }
    }

    fn update(&mut self, mut options: UpdateOptions) {
        if let Some(path) = &self.settings_path {
            match timeplay_config::load(path) {
                Ok(objects) => {
                    for view in &mut options.data_views {
                        view.metadata.objects = Some(objects.clone());
                    }
                }
                Err(e) => warn!("Settings reload failed: {e}"),
            }
        }

        if let Err(e) = self.widget.update(&options, &mut self.host) {
            debug!("update skipped: {e}");
        }
        self.last_update = Some(options);
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

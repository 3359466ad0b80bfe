use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use timeplay_core::{Message, Result, TimelineError};
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Quiet period that ends a burst of writes to the settings file.
pub const DEBOUNCE: Duration = Duration::from_millis(250);

/// Watches the persisted settings file and posts [`Message::ConfigReloaded`]
/// once per burst of changes.
///
/// The parent directory is watched so the file may be created, replaced or
/// removed after start-up; events for sibling files are ignored.  Dropping
/// the handle stops the watch.
pub struct SettingsWatcher {
    path:     PathBuf,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn spawn(path: impl AsRef<Path>, tx: mpsc::Sender<Message>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let dir = path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let (raw_tx, raw_rx) = mpsc::channel::<notify::Result<Event>>(16);
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = raw_tx.blocking_send(res);
            },
            notify::Config::default(),
        )
        .map_err(|e| TimelineError::Config(format!("cannot create watcher: {e}")))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| TimelineError::Config(format!("cannot watch '{}': {e}", dir.display())))?;

        info!("Watching settings file: {}", path.display());
        tokio::spawn(forward(raw_rx, path.clone(), tx));

        Ok(Self {
            path,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Whether `event` changed the file at `path`.
fn touches(event: &Event, path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event
        .paths
        .iter()
        .any(|p| p.file_name() == path.file_name())
}

async fn forward(
    mut events: mpsc::Receiver<notify::Result<Event>>,
    path: PathBuf,
    tx: mpsc::Sender<Message>,
) {
    while let Some(event) = events.recv().await {
        match event {
            Ok(e) if touches(&e, &path) => {}
            Ok(_) => continue,
            Err(e) => {
                warn!("Watcher error: {e}");
                continue;
            }
        }

        // Swallow the rest of the burst.
        let closed = loop {
            match timeout(DEBOUNCE, events.recv()).await {
                Ok(Some(_)) => continue,
                Ok(None) => break true,
                Err(_) => break false,
            }
        };

        debug!("settings file changed");
        if tx.send(Message::ConfigReloaded).await.is_err() || closed {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind};

    fn modify(path: &str) -> Event {
        Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content))).add_path(path.into())
    }

    #[test]
    fn only_writes_to_the_settings_file_count() {
        let path = Path::new("/cfg/timeplay/timeplay.toml");
        assert!(touches(&modify("/cfg/timeplay/timeplay.toml"), path));
        assert!(touches(
            &Event::new(EventKind::Create(CreateKind::File)).add_path("/cfg/timeplay/timeplay.toml".into()),
            path
        ));
        assert!(!touches(&modify("/cfg/timeplay/other.toml"), path));
        assert!(!touches(
            &Event::new(EventKind::Access(AccessKind::Read)).add_path("/cfg/timeplay/timeplay.toml".into()),
            path
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn bursts_collapse_into_one_reload() {
        let (raw_tx, raw_rx) = mpsc::channel(16);
        let (tx, mut rx) = mpsc::channel(8);
        let task = tokio::spawn(forward(raw_rx, PathBuf::from("/cfg/timeplay.toml"), tx));

        raw_tx.send(Ok(modify("/cfg/sibling.toml"))).await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());

        for _ in 0..3 {
            raw_tx.send(Ok(modify("/cfg/timeplay.toml"))).await.unwrap();
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
        raw_tx.send(Ok(modify("/cfg/timeplay.toml"))).await.unwrap();
        drop(raw_tx);
        task.await.unwrap();

        let mut reloads = 0;
        while let Ok(msg) = rx.try_recv() {
            assert!(matches!(msg, Message::ConfigReloaded));
            reloads += 1;
        }
        assert_eq!(reloads, 2);
    }
}

use crate::app::{action::Action, command::Command, persistence};
use crate::domain::clipboard::ClipboardFacade;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Collaborators the effect runner needs.
#[derive(Clone)]
pub struct Services {
    pub clipboard: Arc<dyn ClipboardFacade>,
    pub state_path: Option<PathBuf>,
}

pub fn handle_command(command: Command, services: &Services, tx: mpsc::Sender<Action>) {
    match command {
        Command::CopyToClipboard { index, text } => {
            let clipboard = services.clipboard.clone();
            tokio::spawn(async move {
                match clipboard.write_text(&text).await {
                    Ok(()) => {
                        tracing::info!(index, "email copied to clipboard");
                        let _ = tx.send(Action::EmailCopied(index)).await;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "clipboard write failed");
                        let _ = tx.send(Action::ClipboardFailed(e.to_string())).await;
                    }
                }
            });
        }
        Command::After(delay, action) => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(*action).await;
            });
        }
        Command::PersistHintSeen => {
            let Some(path) = services.state_path.clone() else {
                return;
            };
            tokio::task::spawn_blocking(move || {
                let flags = persistence::UiFlags { hint_seen: true };
                if let Err(e) = persistence::save_flags(&path, &flags) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to persist hint flag");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clipboard::{ClipboardError, MockClipboardFacade};
    use std::time::Duration;

    fn services(mock: MockClipboardFacade, state_path: Option<PathBuf>) -> Services {
        Services {
            clipboard: Arc::new(mock),
            state_path,
        }
    }

    #[tokio::test]
    async fn test_copy_success_reports_item() {
        let mut mock = MockClipboardFacade::new();
        mock.expect_write_text()
            .withf(|text: &str| text == "hello@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let (tx, mut rx) = mpsc::channel(1);
        handle_command(
            Command::CopyToClipboard {
                index: 6,
                text: "hello@example.com".to_string(),
            },
            &services(mock, None),
            tx,
        );

        assert_eq!(rx.recv().await, Some(Action::EmailCopied(6)));
    }

    #[tokio::test]
    async fn test_copy_failure_is_reported() {
        let mut mock = MockClipboardFacade::new();
        mock.expect_write_text()
            .returning(|_| Err(ClipboardError::Unavailable("no display".to_string())));

        let (tx, mut rx) = mpsc::channel(1);
        handle_command(
            Command::CopyToClipboard {
                index: 0,
                text: "x".to_string(),
            },
            &services(mock, None),
            tx,
        );

        match rx.recv().await {
            Some(Action::ClipboardFailed(reason)) => assert!(reason.contains("no display")),
            other => panic!("Expected Action::ClipboardFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_after_dispatches_later() {
        let (tx, mut rx) = mpsc::channel(1);
        handle_command(
            Command::After(Duration::from_millis(10), Box::new(Action::HideHint)),
            &services(MockClipboardFacade::new(), None),
            tx,
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(rx.recv().await, Some(Action::HideHint));
    }

    #[tokio::test]
    async fn test_persist_hint_writes_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        let (tx, _rx) = mpsc::channel(1);

        handle_command(
            Command::PersistHintSeen,
            &services(MockClipboardFacade::new(), Some(path.clone())),
            tx,
        );

        for _ in 0..50 {
            if persistence::load_flags(&path).hint_seen {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("hint flag was never written");
    }
}

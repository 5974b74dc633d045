use common::{GameEvent, GameSession, SessionObserver};
use tracing::{debug, info};

/// Logs every game event through tracing.
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn session_updated(&mut self, session: &GameSession, events: &[GameEvent]) {
        for event in events {
            match serde_json::to_string(event) {
                Ok(json) => debug!(length = session.snake_len(), "event {}", json),
                Err(e) => debug!("Failed to serialize event {:?}: {}", event, e),
            }
            if let GameEvent::GameOver { head } = event {
                info!(
                    "Game over at cell {} with length {}",
                    head,
                    session.snake_len()
                );
            }
        }
    }
}

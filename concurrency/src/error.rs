#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActorError {
    #[error("actor is no longer running")]
    ActorStopped,
    #[error("request timed out")]
    RequestTimeout,
}

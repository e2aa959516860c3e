/// Core error type for the intake bot.
///
/// The adapter crate maps its transport errors into this type so the
/// conversation flow can handle failures consistently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;

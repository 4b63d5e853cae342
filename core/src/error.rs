use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Preset values do not match the board size")]
    InvalidBoardShape,
    #[error("Snapshot version {found} is not supported (expected {expected})")]
    UnsupportedSnapshotVersion { found: u32, expected: u32 },
    #[error("Malformed snapshot")]
    MalformedSnapshot,
}

pub type Result<T> = core::result::Result<T, GameError>;

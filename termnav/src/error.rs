/// Errors raised by the widget framework.
///
/// Only terminal I/O can fail at runtime. The remaining variants flag
/// programmer errors: they are returned so the caller decides how loudly to
/// fail, but no widget recovers from them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a key or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A fixed-width formatter was asked for zero columns.
    #[error("invalid width {0}: fixed-width text needs at least one column")]
    InvalidWidth(usize),

    /// A selection prompt was opened without an enabled choice and without
    /// an explicit initial index.
    #[error("selection prompt has no enabled choice")]
    NoEligibleChoice,

    /// A selection prompt was given an initial index outside its choices.
    #[error("initial choice {index} is out of range for {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors raised by slot layout queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A positional lookup fell outside the list of available slots.
    #[error("position {index} is out of range for {available} available slots")]
    IndexOutOfRange {
        /// The requested position, negative when counted from the end.
        index: isize,
        /// How many slots were available at the time of the lookup.
        available: usize,
    },
}

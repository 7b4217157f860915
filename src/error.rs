use std::io;

/// Errors produced while addressing bits or hiding and recovering payloads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The image path does not name a lossless format that preserves LSB data.
    #[error("unsupported image extension: {extension:?} (only .png is accepted)")]
    UnsupportedFormat { extension: String },

    /// The underlying byte source ran dry before a read was satisfied.
    #[error("end of source reached")]
    EndOfSource,

    /// A bit cursor was advanced past its capacity.
    #[error("bit cursor exhausted")]
    Exhausted,

    /// An address points outside of the buffer it was computed for.
    #[error("byte offset {byte_offset} is out of range for a buffer of {len} bytes")]
    OutOfRange { byte_offset: usize, len: usize },

    /// A cursor position would fall outside of `[0, capacity]`.
    #[error("bit index {index} is outside of [0, {capacity}]")]
    InvalidRange { index: i128, capacity: usize },

    /// More bits were requested than the source could ever provide.
    #[error("requested {requested} bits but only {available} were available")]
    InvalidArgument { requested: usize, available: usize },

    /// The cover raster has fewer embeddable bits than the payload needs.
    #[error("payload needs {needed} bits but the image can only hold {available}")]
    InsufficientCapacity { needed: usize, available: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

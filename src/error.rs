use core::fmt::Debug;

/// Errors reported by the driver, generic over the transport error `E`.
///
/// The driver never retries; callers wanting resilience against transient
/// bus contention re-wake and poll again themselves.
#[derive(Debug, thiserror::Error)]
pub enum Error<E: Debug> {
    /// The bus could not hand out a channel to the device. Nothing was
    /// written or read.
    #[error("no channel available: {0:?}")]
    ChannelUnavailable(E),

    /// The transport failed after the channel was open.
    #[error("transport error: {0:?}")]
    Transport(E),

    /// The response did not match the wire contract: wrong length, or a
    /// bad opcode/count echo. Carries the observed length and the raw
    /// bytes as read.
    #[error("malformed response: length {length}, data {data:02x?}")]
    MalformedResponse { length: usize, data: Vec<u8> },
}

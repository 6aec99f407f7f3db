//! Wire codec for the fixed DNS message header, and the bounded buffers
//! used to read it from and write it to raw message bytes.

#[macro_use]
mod macros;

mod error;
pub use error::{DnsError, Result};

mod buffer;
pub use buffer::{ReadBuffer, WriteBuffer};

mod header;
pub use header::{Flags, Header, HEADER_LEN};

mod opcode;
pub use opcode::Opcode;

mod rcode;
pub use rcode::Rcode;

mod class;
pub use class::Class;

mod record_type;
pub use record_type::RecordType;

/// A value with a fixed wire representation.
pub trait Networkable: Sized {
    /// Appends the wire form. Nothing is written if it doesn't fit.
    fn write_to(&self, buf: &mut WriteBuffer) -> Result<()>;

    /// Consumes the wire form. The cursor doesn't move on failure.
    fn read_from(buf: &mut ReadBuffer<'_>) -> Result<Self>;
}

#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

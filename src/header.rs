use bitfield::bitfield;
use byteorder::{BigEndian, ByteOrder};
use tracing::{instrument, warn};

use super::Networkable;
use crate::{DnsError, Opcode, Rcode, ReadBuffer, Result, WriteBuffer};

/// Size of the fixed message header on the wire.
pub const HEADER_LEN: usize = 12;

bitfield! {
    /// The second 16-bit word of the header.
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Flags(u16);
    impl Debug;
    u8;
    // query or response
    pub qr, set_qr: 15;
    // query type
    pub opcode, set_opcode: 14, 11;
    // authoritative answerer
    pub aa, set_aa: 10;
    // truncation
    pub tc, set_tc: 9;
    // recursion desired
    pub rd, set_rd: 8;
    // recursion available
    pub ra, set_ra: 7;
    // reserved
    pub z, set_z: 6, 4;
    // response code
    pub rcode, set_rcode: 3, 0;
}

impl Networkable for Flags {
    #[instrument(level = "trace", skip_all)]
    fn write_to(&self, buf: &mut WriteBuffer) -> Result<()> {
        buf.write_u16(self.0)
    }

    #[instrument(level = "trace", skip_all)]
    fn read_from(buf: &mut ReadBuffer<'_>) -> Result<Self> {
        Ok(Self(buf.read_u16()?))
    }
}

/// The fixed 12-byte prefix of every DNS message (RFC 1035 §4.1.1).
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    QDCOUNT                    |
/// |                    ANCOUNT                    |
/// |                    NSCOUNT                    |
/// |                    ARCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// The reserved Z bits are not modelled: they are always written as zero
/// and ignored when reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Header {
    pub id: u16,
    pub is_response: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: Rcode,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    /// A standard query header with the given id and nothing else set.
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// The header of a response to `query`, with no records counted yet.
    pub fn response_to(query: &Header) -> Self {
        Self {
            id: query.id,
            is_response: true,
            opcode: query.opcode,
            authoritative: false,
            recursion_desired: query.recursion_desired,
            recursion_available: true,
            ..Default::default()
        }
    }

    /// Packs the flag fields. Opcode and response code are cut to 4 bits.
    pub fn flags(&self) -> Flags {
        let mut flags = Flags::default();
        flags.set_qr(self.is_response);
        flags.set_opcode(u8::from(self.opcode) & 0x0f);
        flags.set_aa(self.authoritative);
        flags.set_tc(self.truncated);
        flags.set_rd(self.recursion_desired);
        flags.set_ra(self.recursion_available);
        flags.set_rcode(u8::from(self.response_code) & 0x0f);
        flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.is_response = flags.qr();
        self.opcode = Opcode::from(flags.opcode());
        self.authoritative = flags.aa();
        self.truncated = flags.tc();
        self.recursion_desired = flags.rd();
        self.recursion_available = flags.ra();
        self.response_code = Rcode::from(flags.rcode());
    }

    /// Checks that the 4-bit fields hold values that fit without masking.
    pub fn validate(&self) -> Result<()> {
        let opcode = u8::from(self.opcode);
        if opcode > 0x0f {
            return Err(DnsError::FieldOutOfRange {
                field: "opcode",
                value: opcode.into(),
            });
        }

        let rcode = u8::from(self.response_code);
        if rcode > 0x0f {
            return Err(DnsError::FieldOutOfRange {
                field: "response code",
                value: rcode.into(),
            });
        }

        Ok(())
    }

    /// Encodes the header. Never fails; oversized 4-bit fields are masked.
    #[instrument(level = "trace", skip_all)]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut ret = [0; HEADER_LEN];
        BigEndian::write_u16(&mut ret[0..2], self.id);
        BigEndian::write_u16(&mut ret[2..4], self.flags().0);
        BigEndian::write_u16(&mut ret[4..6], self.question_count);
        BigEndian::write_u16(&mut ret[6..8], self.answer_count);
        BigEndian::write_u16(&mut ret[8..10], self.authority_count);
        BigEndian::write_u16(&mut ret[10..12], self.additional_count);

        ret
    }

    /// Like `to_bytes`, but rejects values that would need masking.
    pub fn to_bytes_strict(&self) -> Result<[u8; HEADER_LEN]> {
        self.validate()?;
        Ok(self.to_bytes())
    }

    /// Decodes a header from the start of `data`.
    ///
    /// Returns the header and the number of bytes consumed, which is always
    /// `HEADER_LEN`. Anything after the header is left alone.
    #[instrument(level = "trace", skip_all)]
    pub fn from_bytes(data: &[u8]) -> Result<(Self, usize)> {
        let mut buf = ReadBuffer::new(data);
        let header = Self::read_from(&mut buf)?;

        Ok((header, buf.position()))
    }
}

impl Networkable for Header {
    #[instrument(level = "trace", skip_all)]
    fn write_to(&self, buf: &mut WriteBuffer) -> Result<()> {
        buf.write(&self.to_bytes())
    }

    #[instrument(level = "trace", skip_all)]
    fn read_from(buf: &mut ReadBuffer<'_>) -> Result<Self> {
        if buf.remaining() < HEADER_LEN {
            warn!(remaining = buf.remaining(), "insufficient remaining bytes");
            return Err(DnsError::TruncatedInput {
                needed: HEADER_LEN,
                available: buf.remaining(),
            });
        }

        let id = buf.read_u16()?;
        let flags = Flags::read_from(buf)?;
        let question_count = buf.read_u16()?;
        let answer_count = buf.read_u16()?;
        let authority_count = buf.read_u16()?;
        let additional_count = buf.read_u16()?;

        let mut header = Self {
            id,
            question_count,
            answer_count,
            authority_count,
            additional_count,
            ..Default::default()
        };
        header.set_flags(flags);

        Ok(header)
    }
}

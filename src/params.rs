//! The SMPP parameter model: mandatory fields and optional TLVs.
//!
//! A PDU body is a flat, positional sequence of typed fields. Four wire
//! shapes exist: fixed-width unsigned integers in network byte order,
//! NUL-terminated C-octet strings, raw octet strings whose length is carried
//! by context (`sm_length`), and tag-length-value optionals. A [`Parameter`]
//! knows its shape, its encoded length, and how to serialize itself; the
//! per-command field ordering lives in [`crate::catalog`].

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::CodecError;

/// Wire shapes a parameter slot can take
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    U8,
    U16,
    U32,
    COctetString,
    OctetString,
    Tlv,
}

/// A typed parameter value. Integers encode big-endian; `Str` and `Bytes`
/// encode as their raw octets (the distinction is advisory, for callers that
/// care whether a TLV carried text).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    U8(u8),
    U16(u16),
    U32(u32),
    Str(Bytes),
    Bytes(Bytes),
}

impl ParamValue {
    /// The number of octets this value occupies on the wire
    pub fn encoded_width(&self) -> u32 {
        match self {
            ParamValue::U8(_) => 1,
            ParamValue::U16(_) => 2,
            ParamValue::U32(_) => 4,
            ParamValue::Str(b) | ParamValue::Bytes(b) => b.len() as u32,
        }
    }

    fn put(&self, buf: &mut BytesMut) {
        match self {
            ParamValue::U8(v) => buf.put_u8(*v),
            ParamValue::U16(v) => buf.put_u16(*v),
            ParamValue::U32(v) => buf.put_u32(*v),
            ParamValue::Str(b) | ParamValue::Bytes(b) => buf.put_slice(b),
        }
    }
}

/// An optional parameter: two-octet tag, two-octet value length, value.
///
/// `value_length` always equals the encoded width of `value`; the decoder
/// preserves it so that re-encoding a decoded TLV is byte-identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tlv {
    pub tag: u16,
    pub value_length: u16,
    pub value: ParamValue,
}

/// One mandatory or optional PDU parameter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parameter {
    U8(u8),
    U16(u16),
    U32(u32),
    COctetString(Bytes),
    OctetString(Bytes),
    Tlv(Tlv),
}

impl Parameter {
    /// Create a fixed-length integer parameter from a tagged value.
    ///
    /// Only the three integer widths are fixed-length; string and byte
    /// values are rejected with [`CodecError::UnsupportedType`].
    pub fn fixed_length(value: ParamValue) -> Result<Parameter, CodecError> {
        match value {
            ParamValue::U8(v) => Ok(Parameter::U8(v)),
            ParamValue::U16(v) => Ok(Parameter::U16(v)),
            ParamValue::U32(v) => Ok(Parameter::U32(v)),
            ParamValue::Str(_) | ParamValue::Bytes(_) => Err(CodecError::UnsupportedType),
        }
    }

    pub fn fixed_length_u8(value: u8) -> Parameter {
        Parameter::U8(value)
    }

    pub fn fixed_length_u16(value: u16) -> Parameter {
        Parameter::U16(value)
    }

    pub fn fixed_length_u32(value: u32) -> Parameter {
        Parameter::U32(value)
    }

    /// Create a C-octet string parameter. The NUL terminator is added at
    /// encode time and counted in the encoded length. The codec is
    /// byte-transparent: interior NULs are stored and emitted verbatim, and
    /// it is the caller's job to supply well-formed ASCII where the field
    /// semantics demand it.
    pub fn c_octet_string(value: impl AsRef<[u8]>) -> Parameter {
        Parameter::COctetString(Bytes::copy_from_slice(value.as_ref()))
    }

    /// Create a raw octet string parameter (no terminator; the receiver
    /// learns the length from context, e.g. a preceding `sm_length`)
    pub fn octet_string(value: impl AsRef<[u8]>) -> Parameter {
        Parameter::OctetString(Bytes::copy_from_slice(value.as_ref()))
    }

    /// Convenience for building an octet string from text
    pub fn octet_string_from_string(value: &str) -> Parameter {
        Parameter::octet_string(value.as_bytes())
    }

    /// Create a TLV parameter. The value length is introspected from the
    /// tagged value.
    pub fn tlv(tag: u16, value: ParamValue) -> Parameter {
        let value_length = value.encoded_width() as u16;
        Parameter::Tlv(Tlv {
            tag,
            value_length,
            value,
        })
    }

    pub fn tlv_u8(tag: u16, value: u8) -> Parameter {
        Parameter::tlv(tag, ParamValue::U8(value))
    }

    pub fn tlv_u16(tag: u16, value: u16) -> Parameter {
        Parameter::tlv(tag, ParamValue::U16(value))
    }

    pub fn tlv_u32(tag: u16, value: u32) -> Parameter {
        Parameter::tlv(tag, ParamValue::U32(value))
    }

    pub fn tlv_bytes(tag: u16, value: impl AsRef<[u8]>) -> Parameter {
        Parameter::tlv(tag, ParamValue::Bytes(Bytes::copy_from_slice(value.as_ref())))
    }

    /// The wire shape of this parameter
    pub fn kind(&self) -> SlotKind {
        match self {
            Parameter::U8(_) => SlotKind::U8,
            Parameter::U16(_) => SlotKind::U16,
            Parameter::U32(_) => SlotKind::U32,
            Parameter::COctetString(_) => SlotKind::COctetString,
            Parameter::OctetString(_) => SlotKind::OctetString,
            Parameter::Tlv(_) => SlotKind::Tlv,
        }
    }

    pub fn is_tlv(&self) -> bool {
        matches!(self, Parameter::Tlv(_))
    }

    /// The exact number of octets [`Parameter::encode`] will emit
    pub fn encoded_length(&self) -> u32 {
        match self {
            Parameter::U8(_) => 1,
            Parameter::U16(_) => 2,
            Parameter::U32(_) => 4,
            Parameter::COctetString(b) => b.len() as u32 + 1,
            Parameter::OctetString(b) => b.len() as u32,
            Parameter::Tlv(tlv) => 4 + tlv.value.encoded_width(),
        }
    }

    /// Append this parameter's wire form to `buf`
    pub fn encode(&self, buf: &mut BytesMut) {
        match self {
            Parameter::U8(v) => buf.put_u8(*v),
            Parameter::U16(v) => buf.put_u16(*v),
            Parameter::U32(v) => buf.put_u32(*v),
            Parameter::COctetString(b) => {
                buf.put_slice(b);
                buf.put_u8(0);
            }
            Parameter::OctetString(b) => buf.put_slice(b),
            Parameter::Tlv(tlv) => {
                buf.put_u16(tlv.tag);
                buf.put_u16(tlv.value_length);
                tlv.value.put(buf);
            }
        }
    }

    /// The integer value, for the fixed-width variants
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Parameter::U8(v) => Some(u32::from(*v)),
            Parameter::U16(v) => Some(u32::from(*v)),
            Parameter::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// The raw octets, for the string variants (terminator excluded)
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Parameter::COctetString(b) | Parameter::OctetString(b) => Some(b),
            _ => None,
        }
    }
}

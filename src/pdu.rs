//! The SMPP PDU aggregate and its bit-exact wire codec.
//!
//! Every PDU shares a 16-octet header (command_length, command_id,
//! command_status, sequence_number, all big-endian u32), followed by the
//! command's mandatory parameters in catalog order and any optional TLVs.
//! Encoding walks the parameter lists; decoding walks the catalog's slot
//! list against the payload, honoring the `sm_length`/`short_message`
//! hand-off, then consumes the remainder as TLVs.

use core::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::catalog::{parameter_definition, pdu_definition};
use crate::codec::{self, CodecError};
use crate::command::CommandId;
use crate::params::{ParamValue, Parameter, SlotKind, Tlv};

/// Size of the PDU header common to every command
pub const HEADER_LENGTH: u32 = 16;

/// One SMPP protocol data unit: header plus two parameter lists.
///
/// Construction does not check the mandatory list against the catalog;
/// callers building requests are trusted, and the decoder only ever produces
/// catalog-conformant lists.
#[derive(Clone, Debug, PartialEq)]
pub struct Pdu {
    pub command_length: u32,
    pub command_id: CommandId,
    pub command_status: u32,
    pub sequence_number: u32,
    pub mandatory_parameters: Vec<Parameter>,
    pub optional_parameters: Vec<Parameter>,
}

impl Pdu {
    /// Create a PDU, computing `command_length` from the parameter lists
    pub fn new(
        command_id: CommandId,
        command_status: u32,
        sequence_number: u32,
        mandatory_parameters: Vec<Parameter>,
        optional_parameters: Vec<Parameter>,
    ) -> Pdu {
        let mut pdu = Pdu {
            command_length: 0,
            command_id,
            command_status,
            sequence_number,
            mandatory_parameters,
            optional_parameters,
        };
        pdu.command_length = pdu.compute_length();
        pdu
    }

    /// Total encoded length: the header plus every parameter's encoded length
    pub fn compute_length(&self) -> u32 {
        let mut length = HEADER_LENGTH;

        for param in &self.mandatory_parameters {
            length += param.encoded_length();
        }

        for param in &self.optional_parameters {
            length += param.encoded_length();
        }

        length
    }

    /// The canonical textual name of this PDU's command
    pub fn command_name(&self) -> &'static str {
        self.command_id.name()
    }

    /// True when the high bit of the command identifier is clear
    pub fn is_request(&self) -> bool {
        self.command_id.is_request()
    }

    /// Serialize to wire form. The length field is recomputed from the
    /// parameter lists, so a PDU whose lists changed since construction
    /// still advertises the correct length.
    pub fn encode(&self) -> Bytes {
        // A zeroed-out length marks a deliberately empty PDU; nothing is emitted.
        if self.command_length < 1 {
            return Bytes::new();
        }

        let command_length = self.compute_length();
        let mut buf = BytesMut::with_capacity(command_length as usize);

        buf.put_u32(command_length);
        buf.put_u32(self.command_id as u32);
        buf.put_u32(self.command_status);
        buf.put_u32(self.sequence_number);

        for param in &self.mandatory_parameters {
            param.encode(&mut buf);
        }

        for param in &self.optional_parameters {
            param.encode(&mut buf);
        }

        buf.freeze()
    }

    /// Decode one whole PDU from the front of `stream`.
    ///
    /// `stream` must contain at least the advertised `command_length` octets;
    /// the framer guarantees this for PDUs it slices out of a connection.
    #[tracing::instrument(skip_all, fields(available = stream.len()))]
    pub fn decode(stream: &[u8]) -> Result<Pdu, CodecError> {
        if stream.len() < HEADER_LENGTH as usize {
            return Err(CodecError::HeaderUnderflow(stream.len()));
        }

        // The 16-octet check above guarantees the four header reads.
        let underflow = || CodecError::HeaderUnderflow(stream.len());
        let mut pos = 0usize;
        let command_length = codec::get_u32(stream, &mut pos).ok_or_else(underflow)?;

        if command_length < HEADER_LENGTH {
            return Err(CodecError::BadLength {
                length: command_length,
                min: HEADER_LENGTH,
            });
        }

        if command_length as usize > stream.len() {
            return Err(CodecError::Truncated {
                advertised: command_length,
                available: stream.len(),
            });
        }

        let raw_id = codec::get_u32(stream, &mut pos).ok_or_else(underflow)?;
        let command_id =
            CommandId::try_from(raw_id).map_err(|_| CodecError::UnknownCommand(raw_id))?;

        let definition = pdu_definition(command_id);
        if command_length < definition.min_length {
            return Err(CodecError::BadLength {
                length: command_length,
                min: definition.min_length,
            });
        }

        let command_status = codec::get_u32(stream, &mut pos).ok_or_else(underflow)?;
        let sequence_number = codec::get_u32(stream, &mut pos).ok_or_else(underflow)?;

        // Everything from here on is scoped by the advertised length, not by
        // however many octets the caller happened to present.
        let body = &stream[..command_length as usize];

        let mut sm_length: Option<u8> = None;
        let mut mandatory_parameters = Vec::with_capacity(definition.mandatory.len());

        for &name in definition.mandatory {
            let slot = parameter_definition(name).ok_or(CodecError::UnknownSlot(name))?;

            // A short payload is permitted: remaining slots are simply
            // absent. The exception is a zero-length short_message sitting
            // exactly at the end of the PDU, which still gets its (empty)
            // parameter so the decoded PDU re-encodes structurally whole.
            if pos >= body.len() {
                let zero_length_tail =
                    slot.kind == SlotKind::OctetString && sm_length == Some(0);
                if !zero_length_tail {
                    break;
                }
            }

            match slot.kind {
                SlotKind::U8 => {
                    let value =
                        codec::get_u8(body, &mut pos).ok_or(CodecError::BadLength {
                            length: command_length,
                            min: pos as u32 + 1,
                        })?;
                    if slot.name == "sm_length" {
                        sm_length = Some(value);
                    }
                    mandatory_parameters.push(Parameter::fixed_length_u8(value));
                }
                SlotKind::U16 => {
                    let value =
                        codec::get_u16(body, &mut pos).ok_or(CodecError::BadLength {
                            length: command_length,
                            min: pos as u32 + 2,
                        })?;
                    mandatory_parameters.push(Parameter::fixed_length_u16(value));
                }
                SlotKind::U32 => {
                    let value =
                        codec::get_u32(body, &mut pos).ok_or(CodecError::BadLength {
                            length: command_length,
                            min: pos as u32 + 4,
                        })?;
                    mandatory_parameters.push(Parameter::fixed_length_u32(value));
                }
                SlotKind::COctetString => {
                    let value = codec::get_cstring(body, &mut pos)
                        .ok_or(CodecError::BadCString(slot.name))?;
                    mandatory_parameters.push(Parameter::c_octet_string(value));
                }
                SlotKind::OctetString => {
                    // Scoped by the sm_length consumed earlier in this walk.
                    // An empty payload still yields a parameter, so that a
                    // decoded PDU re-encodes to the bytes it came from.
                    let length = sm_length.take().ok_or(CodecError::MissingSmLength)?;
                    let value = codec::get_bytes(body, &mut pos, length as usize).ok_or(
                        CodecError::BadLength {
                            length: command_length,
                            min: pos as u32 + u32::from(length),
                        },
                    )?;
                    mandatory_parameters.push(Parameter::octet_string(value));
                }
                SlotKind::Tlv => return Err(CodecError::UnknownSlot(slot.name)),
            }
        }

        let mut optional_parameters = Vec::new();

        while pos < body.len() {
            let tag = codec::get_u16(body, &mut pos).ok_or(CodecError::TruncatedTlv)?;
            let value_length = codec::get_u16(body, &mut pos).ok_or(CodecError::TruncatedTlv)?;
            let value = codec::get_bytes(body, &mut pos, value_length as usize)
                .ok_or(CodecError::TruncatedTlv)?;

            // The tag is not re-typed; unknown optional parameters round-trip
            // as raw octets.
            optional_parameters.push(Parameter::Tlv(Tlv {
                tag,
                value_length,
                value: ParamValue::Bytes(Bytes::copy_from_slice(value)),
            }));
        }

        Ok(Pdu::new(
            command_id,
            command_status,
            sequence_number,
            mandatory_parameters,
            optional_parameters,
        ))
    }
}

impl fmt::Display for Pdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (seq {})", self.command_name(), self.sequence_number)
    }
}

/// The advertised length of the next PDU in `stream`, or 0 when fewer than
/// four octets are available
pub fn length_of_next_pdu(stream: &[u8]) -> u32 {
    codec::peek_u32(stream).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(length: u32, id: u32, status: u32, sequence: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&length.to_be_bytes());
        bytes.extend_from_slice(&id.to_be_bytes());
        bytes.extend_from_slice(&status.to_be_bytes());
        bytes.extend_from_slice(&sequence.to_be_bytes());
        bytes
    }

    #[test]
    fn new_computes_length() {
        let pdu = Pdu::new(CommandId::EnquireLink, 0, 0x0f, vec![], vec![]);
        assert_eq!(pdu.command_length, 16);
        assert_eq!(pdu.compute_length(), 16);
        assert_eq!(pdu.encode().as_ref(), &header(16, 0x0000_0015, 0, 0x0f)[..]);
    }

    #[test]
    fn compute_length_sums_both_lists() {
        let pdu = Pdu::new(
            CommandId::SubmitSmResp,
            0,
            1,
            vec![Parameter::c_octet_string("msg_id")],
            vec![Parameter::tlv_u8(0x0421, 0)],
        );
        assert_eq!(pdu.command_length, 16 + 7 + 5);
        assert_eq!(pdu.compute_length(), pdu.command_length);
        assert_eq!(pdu.encode().len() as u32, pdu.command_length);
    }

    #[test]
    fn encode_is_idempotent() {
        let pdu = Pdu::new(
            CommandId::Unbind,
            0,
            7,
            vec![],
            vec![Parameter::tlv_u16(0x020c, 5)],
        );
        assert_eq!(pdu.encode(), pdu.encode());
        assert_eq!(pdu.compute_length(), pdu.compute_length());
    }

    #[test]
    fn zeroed_length_encodes_to_nothing() {
        let mut pdu = Pdu::new(CommandId::EnquireLink, 0, 1, vec![], vec![]);
        pdu.command_length = 0;
        assert!(pdu.encode().is_empty());
    }

    #[test]
    fn request_response_classification() {
        let request = Pdu::new(CommandId::SubmitSm, 0, 1, vec![], vec![]);
        assert!(request.is_request());
        assert_eq!(request.command_name(), "submit-sm");

        let response = Pdu::new(CommandId::SubmitSmResp, 0, 1, vec![], vec![]);
        assert!(!response.is_request());
        assert_eq!(response.command_name(), "submit-sm-resp");
    }

    #[test]
    fn decode_rejects_short_header() {
        let result = Pdu::decode(&[0x00, 0x00, 0x00, 0x10, 0x00, 0x00]);
        assert!(matches!(result, Err(CodecError::HeaderUnderflow(6))));
    }

    #[test]
    fn decode_rejects_undersized_length() {
        let bytes = header(8, 0x0000_0015, 0, 1);
        let result = Pdu::decode(&bytes);
        assert!(matches!(
            result,
            Err(CodecError::BadLength { length: 8, min: 16 })
        ));
    }

    #[test]
    fn decode_rejects_overadvertised_length() {
        let bytes = header(64, 0x0000_0015, 0, 1);
        let result = Pdu::decode(&bytes);
        assert!(matches!(
            result,
            Err(CodecError::Truncated {
                advertised: 64,
                available: 16
            })
        ));
    }

    #[test]
    fn decode_rejects_unknown_command() {
        let bytes = header(16, 0x0000_00FF, 0, 1);
        let result = Pdu::decode(&bytes);
        assert!(matches!(result, Err(CodecError::UnknownCommand(0xFF))));
    }

    #[test]
    fn decode_enforces_command_minimum_length() {
        // data-sm declares a 26-octet minimum; a bare header is malformed.
        let bytes = header(16, 0x0000_0103, 0, 0x0419);
        let result = Pdu::decode(&bytes);
        assert!(matches!(
            result,
            Err(CodecError::BadLength {
                length: 16,
                min: 26
            })
        ));
    }

    #[test]
    fn decode_rejects_unterminated_cstring() {
        let mut bytes = header(20, 0x8000_0002, 0, 1);
        bytes.extend_from_slice(b"smsc"); // system_id without a terminator
        let result = Pdu::decode(&bytes);
        assert!(matches!(result, Err(CodecError::BadCString("system_id"))));
    }

    #[test]
    fn decode_rejects_mid_tlv_end() {
        // enquire-link has no mandatory slots, so the body is all TLVs;
        // three octets cannot hold a tag and a length.
        let mut bytes = header(19, 0x0000_0015, 0, 1);
        bytes.extend_from_slice(&[0x02, 0x0c, 0x00]);
        let result = Pdu::decode(&bytes);
        assert!(matches!(result, Err(CodecError::TruncatedTlv)));

        // A declared value length that overruns the PDU is just as bad.
        let mut bytes = header(22, 0x0000_0015, 0, 1);
        bytes.extend_from_slice(&[0x02, 0x0c, 0x00, 0x04, 0xaa, 0xbb]);
        let result = Pdu::decode(&bytes);
        assert!(matches!(result, Err(CodecError::TruncatedTlv)));
    }

    #[test]
    fn decode_absent_trailing_slots_is_permitted() {
        // A bind-transceiver-resp whose body ends after system_id decodes to
        // exactly one mandatory parameter.
        let mut bytes = header(23, 0x8000_0009, 0, 1);
        bytes.extend_from_slice(b"smsc01\0");
        let pdu = Pdu::decode(&bytes).unwrap();
        assert_eq!(pdu.mandatory_parameters.len(), 1);
        assert_eq!(pdu.mandatory_parameters[0].as_bytes(), Some(&b"smsc01"[..]));
        assert!(pdu.optional_parameters.is_empty());
    }

    #[test]
    fn decode_empty_short_message_yields_empty_parameter() {
        let submit = Pdu::new(
            CommandId::SubmitSm,
            0,
            9,
            vec![
                Parameter::c_octet_string(""),
                Parameter::fixed_length_u8(0),
                Parameter::fixed_length_u8(1),
                Parameter::c_octet_string("1234"),
                Parameter::fixed_length_u8(1),
                Parameter::fixed_length_u8(1),
                Parameter::c_octet_string("5678"),
                Parameter::fixed_length_u8(0),
                Parameter::fixed_length_u8(0),
                Parameter::fixed_length_u8(0),
                Parameter::c_octet_string(""),
                Parameter::c_octet_string(""),
                Parameter::fixed_length_u8(0),
                Parameter::fixed_length_u8(0),
                Parameter::fixed_length_u8(0),
                Parameter::fixed_length_u8(0),
                Parameter::fixed_length_u8(0),
                Parameter::octet_string(b""),
            ],
            vec![],
        );

        let encoded = submit.encode();
        let decoded = Pdu::decode(&encoded).unwrap();

        // All 18 declared slots come back, the last one empty, so the
        // decoded PDU re-encodes to the original bytes.
        assert_eq!(decoded.mandatory_parameters.len(), 18);
        assert_eq!(decoded.mandatory_parameters[17].as_bytes(), Some(&b""[..]));
        assert_eq!(decoded.encode(), encoded);
    }

    #[test]
    fn decode_short_message_overrunning_pdu_fails() {
        // A replace-sm whose sm_length claims more octets than remain inside
        // command_length must not read past the PDU boundary.
        let mut body: Vec<u8> = Vec::new();
        body.extend_from_slice(b"abc123\0"); // message_id
        body.extend_from_slice(&[0x00, 0x01]); // source_addr_ton, source_addr_npi
        body.extend_from_slice(b"555\0"); // source_addr
        body.push(0x00); // schedule_delivery_time
        body.push(0x00); // validity_period
        body.push(0x00); // registered_delivery
        body.push(0x01); // sm_default_msg_id
        body.extend_from_slice(&[0x07, 0xff]); // sm_length=7, one octet follows

        let mut bytes = header(16 + body.len() as u32, 0x0000_0007, 0, 1);
        bytes.extend_from_slice(&body);

        let result = Pdu::decode(&bytes);
        assert!(matches!(result, Err(CodecError::BadLength { .. })));
    }

    #[test]
    fn decoded_length_matches_wire_header() {
        let pdu = Pdu::new(
            CommandId::BindTransceiver,
            0,
            2,
            vec![
                Parameter::c_octet_string("esme01"),
                Parameter::c_octet_string("password"),
                Parameter::c_octet_string(""),
                Parameter::fixed_length_u8(0x34),
                Parameter::fixed_length_u8(0),
                Parameter::fixed_length_u8(0),
                Parameter::c_octet_string(""),
            ],
            vec![],
        );
        let encoded = pdu.encode();
        let wire_length = length_of_next_pdu(&encoded);
        let decoded = Pdu::decode(&encoded).unwrap();
        assert_eq!(decoded.command_length, wire_length);
        assert_eq!(decoded.compute_length(), wire_length);
    }

    #[test]
    fn length_of_next_pdu_underflow() {
        assert_eq!(length_of_next_pdu(&[]), 0);
        assert_eq!(length_of_next_pdu(&[0x00, 0x00, 0x00]), 0);
        assert_eq!(length_of_next_pdu(&[0x00, 0x00, 0x00, 0x2d, 0xff]), 0x2d);
    }

    #[test]
    fn display_names_the_command() {
        let pdu = Pdu::new(CommandId::EnquireLink, 0, 42, vec![], vec![]);
        assert_eq!(pdu.to_string(), "enquire-link (seq 42)");
    }
}

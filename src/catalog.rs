// ABOUTME: Static SMPP v3.4 catalog mapping commands to their ordered mandatory slots
// ABOUTME: Also carries per-slot parameter definitions and standard optional TLV tags

use crate::command::CommandId;
use crate::params::SlotKind;

/// Standard optional-parameter tag constants per SMPP v3.4 Table 5-3
pub mod tags {
    pub const DEST_ADDR_SUBUNIT: u16 = 0x0005;
    pub const DEST_NETWORK_TYPE: u16 = 0x0006;
    pub const DEST_BEARER_TYPE: u16 = 0x0007;
    pub const DEST_TELEMATICS_ID: u16 = 0x0008;
    pub const SOURCE_ADDR_SUBUNIT: u16 = 0x000D;
    pub const SOURCE_NETWORK_TYPE: u16 = 0x000E;
    pub const SOURCE_BEARER_TYPE: u16 = 0x000F;
    pub const SOURCE_TELEMATICS_ID: u16 = 0x0010;
    pub const QOS_TIME_TO_LIVE: u16 = 0x0017;
    pub const PAYLOAD_TYPE: u16 = 0x0019;
    pub const ADDITIONAL_STATUS_INFO_TEXT: u16 = 0x001D;
    pub const RECEIPTED_MESSAGE_ID: u16 = 0x001E;
    pub const MS_MSG_WAIT_FACILITIES: u16 = 0x0030;
    pub const PRIVACY_INDICATOR: u16 = 0x0201;
    pub const SOURCE_SUBADDRESS: u16 = 0x0202;
    pub const DEST_SUBADDRESS: u16 = 0x0203;
    pub const USER_MESSAGE_REFERENCE: u16 = 0x0204;
    pub const USER_RESPONSE_CODE: u16 = 0x0205;
    pub const SOURCE_PORT: u16 = 0x020A;
    pub const DESTINATION_PORT: u16 = 0x020B;
    pub const SAR_MSG_REF_NUM: u16 = 0x020C;
    pub const LANGUAGE_INDICATOR: u16 = 0x020D;
    pub const SAR_TOTAL_SEGMENTS: u16 = 0x020E;
    pub const SAR_SEGMENT_SEQNUM: u16 = 0x020F;
    pub const SC_INTERFACE_VERSION: u16 = 0x0210;
    pub const CALLBACK_NUM_PRES_IND: u16 = 0x0302;
    pub const CALLBACK_NUM_ATAG: u16 = 0x0303;
    pub const NUMBER_OF_MESSAGES: u16 = 0x0304;
    pub const CALLBACK_NUM: u16 = 0x0381;
    pub const DPF_RESULT: u16 = 0x0420;
    pub const SET_DPF: u16 = 0x0421;
    pub const MS_AVAILABILITY_STATUS: u16 = 0x0422;
    pub const NETWORK_ERROR_CODE: u16 = 0x0423;
    pub const MESSAGE_PAYLOAD: u16 = 0x0424;
    pub const DELIVERY_FAILURE_REASON: u16 = 0x0425;
    pub const MORE_MESSAGES_TO_SEND: u16 = 0x0426;
    pub const MESSAGE_STATE: u16 = 0x0427;
    pub const USSD_SERVICE_OP: u16 = 0x0501;
    pub const DISPLAY_TIME: u16 = 0x1201;
    pub const SMS_SIGNAL: u16 = 0x1203;
    pub const MS_VALIDITY: u16 = 0x1204;
    pub const ALERT_ON_MESSAGE_DELIVERY: u16 = 0x130C;
    pub const ITS_REPLY_TYPE: u16 = 0x1380;
    pub const ITS_SESSION_INFO: u16 = 0x1383;
}

/// Static descriptor for one named parameter slot.
///
/// `max_length` is the fixed width for integers and the maximum octet count
/// including the terminator for C-octet strings; it is advisory for the
/// byte-transparent decoder. `tag` is non-zero only for optional TLV
/// definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub name: &'static str,
    pub kind: SlotKind,
    pub max_length: usize,
    pub tag: u16,
}

const fn u8_slot(name: &'static str) -> ParameterDefinition {
    ParameterDefinition {
        name,
        kind: SlotKind::U8,
        max_length: 1,
        tag: 0,
    }
}

const fn cstring_slot(name: &'static str, max_length: usize) -> ParameterDefinition {
    ParameterDefinition {
        name,
        kind: SlotKind::COctetString,
        max_length,
        tag: 0,
    }
}

const fn tlv_slot(name: &'static str, tag: u16) -> ParameterDefinition {
    ParameterDefinition {
        name,
        kind: SlotKind::Tlv,
        max_length: 0,
        tag,
    }
}

static SLOT_DEFINITIONS: &[ParameterDefinition] = &[
    // Mandatory one-octet fields
    u8_slot("addr_npi"),
    u8_slot("addr_ton"),
    u8_slot("data_coding"),
    u8_slot("dest_addr_npi"),
    u8_slot("dest_addr_ton"),
    u8_slot("error_code"),
    u8_slot("esm_class"),
    u8_slot("esme_addr_npi"),
    u8_slot("esme_addr_ton"),
    u8_slot("interface_version"),
    u8_slot("message_state"),
    u8_slot("no_unsuccess"),
    u8_slot("number_of_dests"),
    u8_slot("priority_flag"),
    u8_slot("protocol_id"),
    u8_slot("registered_delivery"),
    u8_slot("replace_if_present_flag"),
    u8_slot("sm_default_msg_id"),
    u8_slot("sm_length"),
    u8_slot("source_addr_npi"),
    u8_slot("source_addr_ton"),
    // Mandatory C-octet strings, max octets inclusive of the terminator
    cstring_slot("address_range", 41),
    cstring_slot("destination_addr", 21),
    cstring_slot("esme_addr", 65),
    cstring_slot("final_date", 17),
    cstring_slot("message_id", 9),
    cstring_slot("password", 9),
    cstring_slot("schedule_delivery_time", 21),
    cstring_slot("service_type", 9),
    cstring_slot("source_addr", 21),
    cstring_slot("system_id", 16),
    cstring_slot("system_type", 13),
    cstring_slot("validity_period", 21),
    // short_message is scoped by the preceding sm_length, not a terminator
    ParameterDefinition {
        name: "short_message",
        kind: SlotKind::OctetString,
        max_length: 254,
        tag: 0,
    },
    // Common optional parameters, identified on the wire by tag alone
    tlv_slot("sar_msg_ref_num", tags::SAR_MSG_REF_NUM),
    tlv_slot("sar_total_segments", tags::SAR_TOTAL_SEGMENTS),
    tlv_slot("sar_segment_seqnum", tags::SAR_SEGMENT_SEQNUM),
    tlv_slot("message_payload", tags::MESSAGE_PAYLOAD),
    tlv_slot("set_dpf", tags::SET_DPF),
    tlv_slot("user_message_reference", tags::USER_MESSAGE_REFERENCE),
    tlv_slot("source_port", tags::SOURCE_PORT),
    tlv_slot("destination_port", tags::DESTINATION_PORT),
    tlv_slot("sc_interface_version", tags::SC_INTERFACE_VERSION),
    tlv_slot("receipted_message_id", tags::RECEIPTED_MESSAGE_ID),
    tlv_slot("payload_type", tags::PAYLOAD_TYPE),
    tlv_slot("qos_time_to_live", tags::QOS_TIME_TO_LIVE),
];

/// Look up a slot definition by name
pub fn parameter_definition(name: &str) -> Option<&'static ParameterDefinition> {
    SLOT_DEFINITIONS.iter().find(|def| def.name == name)
}

/// Per-command decoding recipe: the minimum encoded length and the ordered
/// mandatory slot list the decoder walks against the payload.
#[derive(Clone, Copy, Debug)]
pub struct PduDefinition {
    pub command_id: CommandId,
    pub min_length: u32,
    pub mandatory: &'static [&'static str],
}

const EMPTY_BODY: &[&str] = &[];

const BIND_BODY: &[&str] = &[
    "system_id",
    "password",
    "system_type",
    "interface_version",
    "addr_ton",
    "addr_npi",
    "address_range",
];

const BIND_RESP_BODY: &[&str] = &["system_id"];

const OUTBIND_BODY: &[&str] = &["system_id", "password"];

const MESSAGE_ID_BODY: &[&str] = &["message_id"];

const SM_BODY: &[&str] = &[
    "service_type",
    "source_addr_ton",
    "source_addr_npi",
    "source_addr",
    "dest_addr_ton",
    "dest_addr_npi",
    "destination_addr",
    "esm_class",
    "protocol_id",
    "priority_flag",
    "schedule_delivery_time",
    "validity_period",
    "registered_delivery",
    "replace_if_present_flag",
    "data_coding",
    "sm_default_msg_id",
    "sm_length",
    "short_message",
];

const DATA_SM_BODY: &[&str] = &[
    "service_type",
    "source_addr_ton",
    "source_addr_npi",
    "source_addr",
    "dest_addr_ton",
    "dest_addr_npi",
    "destination_addr",
    "esm_class",
    "registered_delivery",
    "data_coding",
];

const QUERY_SM_BODY: &[&str] = &[
    "message_id",
    "source_addr_ton",
    "source_addr_npi",
    "source_addr",
];

const QUERY_SM_RESP_BODY: &[&str] = &[
    "message_id",
    "final_date",
    "message_state",
    "error_code",
];

const REPLACE_SM_BODY: &[&str] = &[
    "message_id",
    "source_addr_ton",
    "source_addr_npi",
    "source_addr",
    "schedule_delivery_time",
    "validity_period",
    "registered_delivery",
    "sm_default_msg_id",
    "sm_length",
    "short_message",
];

const CANCEL_SM_BODY: &[&str] = &[
    "service_type",
    "message_id",
    "source_addr_ton",
    "source_addr_npi",
    "source_addr",
    "dest_addr_ton",
    "dest_addr_npi",
    "destination_addr",
];

const ALERT_NOTIFICATION_BODY: &[&str] = &[
    "source_addr_ton",
    "source_addr_npi",
    "source_addr",
    "esme_addr_ton",
    "esme_addr_npi",
    "esme_addr",
];

// The repeated destination groups of submit_multi (and the unsuccess list of
// its response) cannot be expressed as a flat positional slot list, so only
// the leading fields are cataloged. Callers building these PDUs supply the
// variable section as explicit octet-string parameters.
const SUBMIT_MULTI_BODY: &[&str] = &[
    "service_type",
    "source_addr_ton",
    "source_addr_npi",
    "source_addr",
    "number_of_dests",
];

const SUBMIT_MULTI_RESP_BODY: &[&str] = &["message_id", "no_unsuccess"];

/// The decoding recipe for a known command. Total over [`CommandId`]: an
/// unknown wire identifier is rejected before this lookup happens.
pub fn pdu_definition(id: CommandId) -> PduDefinition {
    let (min_length, mandatory): (u32, &'static [&'static str]) = match id {
        CommandId::GenericNack => (16, EMPTY_BODY),
        CommandId::BindReceiver => (16, BIND_BODY),
        CommandId::BindReceiverResp => (16, BIND_RESP_BODY),
        CommandId::BindTransmitter => (16, BIND_BODY),
        CommandId::BindTransmitterResp => (16, BIND_RESP_BODY),
        CommandId::QuerySm => (16, QUERY_SM_BODY),
        CommandId::QuerySmResp => (16, QUERY_SM_RESP_BODY),
        CommandId::SubmitSm => (16, SM_BODY),
        CommandId::SubmitSmResp => (16, MESSAGE_ID_BODY),
        CommandId::DeliverSm => (16, SM_BODY),
        CommandId::DeliverSmResp => (16, MESSAGE_ID_BODY),
        CommandId::Unbind => (16, EMPTY_BODY),
        CommandId::UnbindResp => (16, EMPTY_BODY),
        CommandId::ReplaceSm => (16, REPLACE_SM_BODY),
        CommandId::ReplaceSmResp => (16, EMPTY_BODY),
        CommandId::CancelSm => (16, CANCEL_SM_BODY),
        CommandId::CancelSmResp => (16, EMPTY_BODY),
        CommandId::BindTransceiver => (16, BIND_BODY),
        CommandId::BindTransceiverResp => (16, BIND_RESP_BODY),
        CommandId::Outbind => (16, OUTBIND_BODY),
        CommandId::EnquireLink => (16, EMPTY_BODY),
        CommandId::EnquireLinkResp => (16, EMPTY_BODY),
        CommandId::SubmitMulti => (16, SUBMIT_MULTI_BODY),
        CommandId::SubmitMultiResp => (16, SUBMIT_MULTI_RESP_BODY),
        CommandId::AlertNotification => (16, ALERT_NOTIFICATION_BODY),
        // Header plus the ten mandatory fields at their minimum widths
        CommandId::DataSm => (26, DATA_SM_BODY),
        CommandId::DataSmResp => (16, MESSAGE_ID_BODY),
    };

    PduDefinition {
        command_id: id,
        min_length,
        mandatory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_has_a_definition() {
        for id in CommandId::all() {
            let def = pdu_definition(*id);
            assert_eq!(def.command_id, *id);
            assert!(def.min_length >= 16);
        }
    }

    #[test]
    fn every_mandatory_slot_resolves() {
        for id in CommandId::all() {
            for slot in pdu_definition(*id).mandatory {
                let def = parameter_definition(slot)
                    .unwrap_or_else(|| panic!("missing definition for slot {slot}"));
                assert_ne!(def.kind, SlotKind::Tlv, "mandatory slot {slot} declared as TLV");
            }
        }
    }

    #[test]
    fn data_sm_minimum_length() {
        let def = pdu_definition(CommandId::DataSm);
        assert_eq!(def.min_length, 26);
        assert_eq!(def.mandatory.len(), 10);
    }

    #[test]
    fn submit_sm_slot_order() {
        let def = pdu_definition(CommandId::SubmitSm);
        assert_eq!(def.mandatory.len(), 18);
        assert_eq!(def.mandatory[0], "service_type");
        assert_eq!(def.mandatory[16], "sm_length");
        assert_eq!(def.mandatory[17], "short_message");
    }

    #[test]
    fn short_message_is_length_scoped() {
        let def = parameter_definition("short_message").unwrap();
        assert_eq!(def.kind, SlotKind::OctetString);
        assert_eq!(def.max_length, 254);
    }

    #[test]
    fn string_slot_limits() {
        assert_eq!(parameter_definition("system_id").unwrap().max_length, 16);
        assert_eq!(parameter_definition("password").unwrap().max_length, 9);
        assert_eq!(parameter_definition("address_range").unwrap().max_length, 41);
        assert_eq!(parameter_definition("destination_addr").unwrap().max_length, 21);
    }

    #[test]
    fn tlv_definitions_carry_tags() {
        let def = parameter_definition("sar_msg_ref_num").unwrap();
        assert_eq!(def.kind, SlotKind::Tlv);
        assert_eq!(def.tag, 0x020C);
        assert_eq!(parameter_definition("message_payload").unwrap().tag, 0x0424);
        assert_eq!(parameter_definition("set_dpf").unwrap().tag, 0x0421);
    }

    #[test]
    fn unknown_slot_name() {
        assert!(parameter_definition("not_a_slot").is_none());
    }
}

// ABOUTME: Defines SMPP v3.4 command identifiers per specification Table 4-1
// ABOUTME: Maps each identifier to its canonical name and request/response role

use num_enum::TryFromPrimitive;

/// SMPP v3.4 Command Identifiers (Table 4-1)
///
/// The command_id field identifies the SMPP PDU type. Per SMPP v3.4
/// specification Section 2.2.1, this is a 4-octet field in the PDU header.
///
/// ## Command ID Structure
/// - **Bit 31 (MSB)**: Response indicator bit
///   - 0 = Request PDU
///   - 1 = Response PDU
/// - **Bits 30-0**: Command type identifier
#[derive(TryFromPrimitive)]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// generic_nack PDU (Section 4.3.1) - Error response for invalid PDUs
    GenericNack = 0x8000_0000,

    // Connection Management Operations (Section 4.1)
    /// bind_receiver PDU (Section 4.1.1)
    BindReceiver = 0x0000_0001,
    /// bind_receiver_resp PDU (Section 4.1.2)
    BindReceiverResp = 0x8000_0001,
    /// bind_transmitter PDU (Section 4.1.1)
    BindTransmitter = 0x0000_0002,
    /// bind_transmitter_resp PDU (Section 4.1.2)
    BindTransmitterResp = 0x8000_0002,

    // Message Management Operations (Section 4.8)
    /// query_sm PDU (Section 4.8.1)
    QuerySm = 0x0000_0003,
    /// query_sm_resp PDU (Section 4.8.2)
    QuerySmResp = 0x8000_0003,

    // Message Submission Operations (Section 4.4)
    /// submit_sm PDU (Section 4.4.1)
    SubmitSm = 0x0000_0004,
    /// submit_sm_resp PDU (Section 4.4.2)
    SubmitSmResp = 0x8000_0004,

    // Message Delivery Operations (Section 4.6)
    /// deliver_sm PDU (Section 4.6.1)
    DeliverSm = 0x0000_0005,
    /// deliver_sm_resp PDU (Section 4.6.2)
    DeliverSmResp = 0x8000_0005,

    // Session Management Operations (Section 4.2)
    /// unbind PDU (Section 4.2.1)
    Unbind = 0x0000_0006,
    /// unbind_resp PDU (Section 4.2.2)
    UnbindResp = 0x8000_0006,

    // Message Modification Operations (Section 4.9-4.10)
    /// replace_sm PDU (Section 4.9.1)
    ReplaceSm = 0x0000_0007,
    /// replace_sm_resp PDU (Section 4.9.2)
    ReplaceSmResp = 0x8000_0007,
    /// cancel_sm PDU (Section 4.10.1)
    CancelSm = 0x0000_0008,
    /// cancel_sm_resp PDU (Section 4.10.2)
    CancelSmResp = 0x8000_0008,

    // Transceiver Operations (Section 4.2.5-4.2.6)
    /// bind_transceiver PDU (Section 4.2.5)
    BindTransceiver = 0x0000_0009,
    /// bind_transceiver_resp PDU (Section 4.2.6)
    BindTransceiverResp = 0x8000_0009,

    // Network Initiated Operations (Section 4.1.4)
    /// outbind PDU (Section 4.1.4) - SMSC initiated bind request
    Outbind = 0x0000_000B,

    // Link Management Operations (Section 4.11)
    /// enquire_link PDU (Section 4.11.1)
    EnquireLink = 0x0000_0015,
    /// enquire_link_resp PDU (Section 4.11.2)
    EnquireLinkResp = 0x8000_0015,

    // Multi-destination Operations (Section 4.5)
    /// submit_multi PDU (Section 4.5.1)
    SubmitMulti = 0x0000_0021,
    /// submit_multi_resp PDU (Section 4.5.2)
    SubmitMultiResp = 0x8000_0021,

    // Enhanced Messaging Operations (Section 4.12)
    /// alert_notification PDU (Section 4.12.1) - no response PDU is defined
    AlertNotification = 0x0000_0102,
    /// data_sm PDU (Section 4.12.2)
    DataSm = 0x0000_0103,
    /// data_sm_resp PDU (Section 4.12.3)
    DataSmResp = 0x8000_0103,
}

impl CommandId {
    /// Check if this command_id represents a response PDU
    pub fn is_response(self) -> bool {
        (self as u32) & 0x8000_0000 != 0
    }

    /// Check if this command_id represents a request PDU
    pub fn is_request(self) -> bool {
        !self.is_response()
    }

    /// The canonical textual name for this command
    pub fn name(self) -> &'static str {
        match self {
            CommandId::GenericNack => "generic-nack",
            CommandId::BindReceiver => "bind-receiver",
            CommandId::BindReceiverResp => "bind-receiver-resp",
            CommandId::BindTransmitter => "bind-transmitter",
            CommandId::BindTransmitterResp => "bind-transmitter-resp",
            CommandId::QuerySm => "query-sm",
            CommandId::QuerySmResp => "query-sm-resp",
            CommandId::SubmitSm => "submit-sm",
            CommandId::SubmitSmResp => "submit-sm-resp",
            CommandId::DeliverSm => "deliver-sm",
            CommandId::DeliverSmResp => "deliver-sm-resp",
            CommandId::Unbind => "unbind",
            CommandId::UnbindResp => "unbind-resp",
            CommandId::ReplaceSm => "replace-sm",
            CommandId::ReplaceSmResp => "replace-sm-resp",
            CommandId::CancelSm => "cancel-sm",
            CommandId::CancelSmResp => "cancel-sm-resp",
            CommandId::BindTransceiver => "bind-transceiver",
            CommandId::BindTransceiverResp => "bind-transceiver-resp",
            CommandId::Outbind => "outbind",
            CommandId::EnquireLink => "enquire-link",
            CommandId::EnquireLinkResp => "enquire-link-resp",
            CommandId::SubmitMulti => "submit-multi",
            CommandId::SubmitMultiResp => "submit-multi-resp",
            CommandId::AlertNotification => "alert-notification",
            CommandId::DataSm => "data-sm",
            CommandId::DataSmResp => "data-sm-resp",
        }
    }

    /// All known command identifiers, in numeric request/response pairs
    pub fn all() -> &'static [CommandId] {
        &[
            CommandId::GenericNack,
            CommandId::BindReceiver,
            CommandId::BindReceiverResp,
            CommandId::BindTransmitter,
            CommandId::BindTransmitterResp,
            CommandId::QuerySm,
            CommandId::QuerySmResp,
            CommandId::SubmitSm,
            CommandId::SubmitSmResp,
            CommandId::DeliverSm,
            CommandId::DeliverSmResp,
            CommandId::Unbind,
            CommandId::UnbindResp,
            CommandId::ReplaceSm,
            CommandId::ReplaceSmResp,
            CommandId::CancelSm,
            CommandId::CancelSmResp,
            CommandId::BindTransceiver,
            CommandId::BindTransceiverResp,
            CommandId::Outbind,
            CommandId::EnquireLink,
            CommandId::EnquireLinkResp,
            CommandId::SubmitMulti,
            CommandId::SubmitMultiResp,
            CommandId::AlertNotification,
            CommandId::DataSm,
            CommandId::DataSmResp,
        ]
    }
}

/// Resolve a canonical kebab-case command name back to its identifier
pub fn command_id_from_name(name: &str) -> Option<CommandId> {
    CommandId::all()
        .iter()
        .copied()
        .find(|id| id.name() == name)
}

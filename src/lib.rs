//! SMPP v3.4 wire codec and stream framer.
//!
//! This crate implements the framing, encoding, and decoding of SMPP
//! Protocol Data Units as exchanged between External Short Messaging
//! Entities (ESMEs) and Short Message Service Centers (SMSCs) over a
//! long-lived TCP connection. It is a codec, not a client: bind session
//! management, windowing, and keepalives belong to the layers above.
//!
//! The pieces:
//!
//! - [`Parameter`]: one typed field value (fixed-width integer, C-octet
//!   string, raw octet string, or TLV) that knows its encoded length.
//! - [`catalog`]: the static mapping from command identifier to the ordered
//!   list of mandatory parameter slots, which makes the positional SMPP
//!   body parseable without per-command code.
//! - [`Pdu`]: header plus parameter lists, with bit-exact
//!   [`encode`](Pdu::encode) and [`decode`](Pdu::decode).
//! - [`StreamReader`]: an incremental framer that turns an arbitrary byte
//!   stream into a sequence of whole PDUs.
//!
//! # Building and sending a request
//!
//! ```rust,no_run
//! use smpp_codec::{CommandId, Parameter, Pdu};
//! use tokio::io::AsyncWriteExt;
//! use tokio::net::TcpStream;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut stream = TcpStream::connect("localhost:2775").await?;
//!
//!     let bind = Pdu::new(
//!         CommandId::BindTransceiver,
//!         0,
//!         1,
//!         vec![
//!             Parameter::c_octet_string("esme01"),
//!             Parameter::c_octet_string("password"),
//!             Parameter::c_octet_string("generic"),
//!             Parameter::fixed_length_u8(0x34),
//!             Parameter::fixed_length_u8(0),
//!             Parameter::fixed_length_u8(0),
//!             Parameter::c_octet_string(""),
//!         ],
//!         vec![],
//!     );
//!
//!     stream.write_all(&bind.encode()).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Reading PDUs from a connection
//!
//! ```rust,no_run
//! use smpp_codec::StreamReader;
//! use tokio::net::TcpStream;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let stream = TcpStream::connect("localhost:2775").await?;
//!     let mut reader = StreamReader::new(stream);
//!
//!     loop {
//!         let pdus = reader.extract_next_pdus().await?;
//!         for pdu in pdus {
//!             println!("received {pdu}");
//!         }
//!     }
//! }
//! ```

pub mod catalog;
pub mod codec;
pub mod command;
pub mod params;
pub mod pdu;
pub mod peer;
pub mod reader;


pub use codec::CodecError;
pub use command::{CommandId, command_id_from_name};
pub use params::{ParamValue, Parameter, SlotKind, Tlv};
pub use pdu::{HEADER_LENGTH, Pdu, length_of_next_pdu};
pub use peer::{Peer, PeerState};
pub use reader::StreamReader;

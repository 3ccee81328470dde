//! Client side of DriftChat: a per-session state machine that submits one
//! message at a time and renders the reply incrementally as bytes arrive.

pub mod chat;
pub mod decode;
pub mod error;
pub mod render;
pub mod session;
pub mod transport;

pub use chat::Chat;
pub use decode::StreamDecoder;
pub use error::{ClientError, DecodeError, TransportError};
pub use render::{NullSink, ReplySink};
pub use session::{ClientSession, Exchange, ExchangeEvent, ExchangeStatus, SessionState};
pub use transport::{ChatTransport, HttpTransport, MockStep, MockTransport, ServerReply};

//! Turns text captures of USB traffic between a host driver and a mobile-broadband
//! modem into readable protocol traces.
//!
//! The pipeline runs in one pass over the capture:
//!
//! 1. [`PacketAssembler`](capture::PacketAssembler) reads capture lines and
//!    reassembles the payload of each transfer into a [`Packet`](capture::Packet).
//! 2. The packet's [`ProtocolBinding`](binding::ProtocolBinding) dissects the
//!    payload with the codecs from [`wwan_proto`].
//! 3. [`trace::describe`] turns the dissection into labelled [`Section`](trace::Section)s.
//! 4. [`Renderer`](render::Renderer) writes the hex dump and sections as text.
//!
//! [`TraceDecoder`](decoder::TraceDecoder) wires these together.

pub mod binding;
pub mod capture;
pub mod config;
pub mod decoder;
pub mod error;
pub mod render;
pub mod trace;

pub use binding::ProtocolBinding;
pub use config::DecoderConfig;
pub use decoder::TraceDecoder;
pub use error::TraceError;

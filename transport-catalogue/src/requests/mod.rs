//! JSON request documents for the two phases of a run.
//!
//! The build phase ingests base requests into a catalogue, builds the
//! router and writes a snapshot. The serve phase loads that snapshot and
//! answers stat requests in order.

mod dto;
mod error;
mod handler;
mod pipeline;

pub use dto::{
    BaseRequest, ColorDto, ItemDto, MakeBaseRequest, ProcessRequests, Query, RenderSettingsDto,
    ResponseBody, StatRequest, StatResponse,
};
pub use error::RequestError;
pub use handler::{Answer, RequestHandler, build_catalogue};
pub use pipeline::{make_base, process_requests};

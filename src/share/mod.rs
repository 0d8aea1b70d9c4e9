//! Share Module
//!
//! Stateless share links: the answer token codec and the `data`/`k` query
//! pair that lets a receiver reproduce a result without server storage.

mod codec;
mod link;

pub use codec::{decode, encode};
pub use link::{Resolution, ResolutionSource, ShareLink, DATA_PARAM, RESULT_PARAM};

//! Request extractors shared by the HTTP handlers.

pub mod negotiation;
pub mod page_query;
pub mod payload;

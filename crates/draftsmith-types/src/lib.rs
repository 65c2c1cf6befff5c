//! Shared data model for Draftsmith: stored records, the generation payload,
//! and the wire types exchanged with the browser front-end.

pub mod api;
pub mod models;
pub mod validation;

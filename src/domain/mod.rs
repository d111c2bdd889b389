//! Domain types shared by the ingestion pipeline and the service layer.

pub mod rollup;
pub mod sale;

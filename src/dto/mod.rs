//! Data transfer objects for the public HTTP contract.
//!
//! Every wire-visible field is declared here and serialized in camelCase.
//! Inbound records keep every field optional so that a missing field reaches
//! the validator instead of failing inside the decoder.

pub mod request;
pub mod response;

pub use request::{ContactDto, SubscribeDto};
pub use response::{
    BenchmarkDto, DocsSectionDto, ExampleDto, FeatureDto, MessageDto, ResponseDto, StatsDto,
};

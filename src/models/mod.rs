// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AlleleCode, DonorMatch, DonorRecord, Grade, HlaProfile, RecipientProfile};
pub use requests::RankMatchesRequest;
pub use responses::{ErrorResponse, HealthResponse, RankMatchesResponse};

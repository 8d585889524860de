pub mod publication_dto;

pub use publication_dto::{CreatePublicationRequest, PublicationDto, UpdatePublicationRequest};

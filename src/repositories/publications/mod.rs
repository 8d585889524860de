pub mod publication_repo;

pub use publication_repo::MongoPublicationRepository;

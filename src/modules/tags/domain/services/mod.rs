pub mod tag_domain_service;

pub use tag_domain_service::TagDomainService;

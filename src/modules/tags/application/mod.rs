pub mod service;

pub use service::{TagAppModel, TagCreateAppModel, TagService, TagUpdateAppModel};

pub mod service;

pub use service::{AuthService, LoginRequestAppModel, TokenAppModel, TokenUserAppModel};

pub mod authenticator;

pub use authenticator::{Account, Authenticator, InMemoryAuthenticator};

//! Application Layer
//!
//! Use cases, session codec, and configuration.

pub mod codec;
pub mod config;
pub mod refresh;
pub mod request_code;
pub mod resend_code;
pub mod sign_out;
pub mod verify_code;

pub use codec::SessionCodec;
pub use config::AuthConfig;
pub use refresh::RefreshSessionUseCase;
pub use request_code::RequestCodeUseCase;
pub use resend_code::ResendCodeUseCase;
pub use sign_out::SignOutUseCase;
pub use verify_code::VerifyCodeUseCase;

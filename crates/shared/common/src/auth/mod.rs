//! Bearer token authentication shared by the issuing and verifying services.

mod guard;
mod token;

pub use guard::{authorization_header, bearer_auth, bearer_token, AuthenticatedSubject, SubjectGuard};
pub use token::{parse_algorithm, Claims, TokenIssuer, TokenVerifier};

// Internal modules
mod issue;
mod parsed;
#[allow(clippy::module_inception)]
mod token;
mod verified;

// Public API exports
pub use issue::{issue, issue_with};
pub use token::Token;
pub use verified::{Verification, verify, verify_as, verify_as_with, verify_with};

pub mod match_form;
pub mod signup;

pub use match_form::{parse_match_form, MatchForm, MatchFormError};
pub use signup::{SignupError, SignupValidator};

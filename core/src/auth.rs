use std::fmt;
use serde::{Serialize, Deserialize};

#[derive(Clone, Serialize, PartialEq)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LoginResult {
	pub text: String,
	pub logged_in: bool,
}

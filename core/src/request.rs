use anyhow::*;

use crate::auth::Credentials;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
	Post,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CacheMode {
	NoCache,
}

/// A login request, ready for whichever transport the host has.
#[derive(Clone, Debug)]
pub struct Submission {
	pub method: Method,
	pub path: String,
	pub cache: CacheMode,
	pub same_origin: bool,
	pub credentials: Credentials,
}

impl Submission {
	pub fn new(path: &str, credentials: Credentials) -> Self {
		Self {
			method: Method::Post,
			path: path.to_owned(),
			cache: CacheMode::NoCache,
			same_origin: true,
			credentials,
		}
	}

	pub fn body(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.credentials)?)
	}

	/// Full URL for hosts that are not already on the server's origin.
	pub fn url(&self, root: &str) -> String {
		format!("{}{}", root.trim_end_matches('/'), self.path)
	}
}

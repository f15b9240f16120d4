use serde::{Serialize, Deserialize};

pub const LOGIN_PATH: &str = "/login-submit";
pub const APP_PATH: &str = "/app";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormConfig {
	#[serde(default = "default_endpoint")]
	pub endpoint: String,

	#[serde(default = "default_app_path")]
	pub app_path: String,
}

fn default_endpoint() -> String {
	LOGIN_PATH.to_owned()
}

fn default_app_path() -> String {
	APP_PATH.to_owned()
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			endpoint: default_endpoint(),
			app_path: default_app_path(),
		}
	}
}

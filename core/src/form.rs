use log::*;
use anyhow::*;

use crate::auth::{Credentials, LoginResult};
use crate::config::FormConfig;
use crate::keys::{self, Field, Key, KeyAction};
use crate::request::Submission;

pub const FAILURE_TEXT: &str = "Login failed: no valid response from server";

/// The page the controller drives. Field values are read on demand,
/// the view stays the system of record.
pub trait FormView {
	fn username(&self) -> Result<String>;
	fn password(&self) -> Result<String>;
	fn focus_password(&mut self) -> Result<()>;
	fn show_result(&mut self, text: &str);
	fn navigate(&mut self, path: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
	config: FormConfig,
}

impl LoginForm {
	pub fn new(config: FormConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &FormConfig {
		&self.config
	}

	/// Applies a key-up event. Returns a submission when the key
	/// should behave like clicking the submit control.
	pub fn handle_key<V: FormView + ?Sized>(&self, view: &mut V, field: Field, key: &Key<'_>) -> Result<Option<Submission>> {
		match keys::action_for(field, key) {
			KeyAction::FocusPassword => {
				view.focus_password()?;
				Ok(None)
			},
			KeyAction::Submit => self.submit(view).map(Some),
			KeyAction::Ignore => Ok(None),
		}
	}

	pub fn submit<V: FormView + ?Sized>(&self, view: &V) -> Result<Submission> {
		let credentials = Credentials {
			username: view.username().context("reading username")?,
			password: view.password().context("reading password")?,
		};
		info!("Submitting login for {}", &credentials.username);
		Ok(Submission::new(&self.config.endpoint, credentials))
	}

	/// Handles the server's reply (or the transport failure in its place).
	/// Returns whether the login was accepted.
	pub fn complete<V: FormView + ?Sized>(&self, view: &mut V, reply: Result<String>) -> bool {
		match reply.and_then(|body| parse_reply(&body)) {
			Result::Ok(result) => self.apply(view, result),
			Result::Err(e) => {
				warn!("Login request failed: {:#}", e);
				view.show_result(FAILURE_TEXT);
				false
			},
		}
	}

	pub fn apply<V: FormView + ?Sized>(&self, view: &mut V, result: LoginResult) -> bool {
		debug!("login result: {:?}", &result);
		view.show_result(&result.text);
		if result.logged_in {
			if let Err(e) = view.navigate(&self.config.app_path) {
				error!("Navigation to {} failed: {:#}", &self.config.app_path, e);
			}
		}
		result.logged_in
	}
}

pub fn parse_reply(body: &str) -> Result<LoginResult> {
	serde_json::from_str::<LoginResult>(body)
		.with_context(|| anyhow!("Parsing login reply {:?}", body))
}

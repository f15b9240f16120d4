mod config;

use std::borrow::Cow;

use log::*;
use anyhow::*;
use clap::{Arg, Command};

use login_form::form::{FormView, LoginForm};
use login_form::request::{Method, Submission};

use crate::config::{Config, SERVER_ENV};

pub fn main() -> Result<()> {
	env_logger::init();

	let app = Command::new("login-form")
		.arg(Arg::new("server").long("server").takes_value(true).help("Server root, e.g. http://localhost:8000"))
		.arg(Arg::new("user").long("user").short('u').takes_value(true))
	;

	let opts = app.get_matches();
	debug!("cli opts: {:?}", &opts);

	let mut config = Config::load_user()?;
	let root = config.server_root(
		opts.get_one::<String>("server").map(|s| s.as_str()),
		std::env::var(SERVER_ENV).ok(),
	);

	let form = LoginForm::default();
	let mut prompt = Prompt {
		user: opts.get_one::<String>("user").cloned(),
		remembered: config.user.clone(),
		root: root.clone(),
	};

	let submission = form.submit(&prompt)?;
	let reply = post(&root, &submission);
	let accepted = form.complete(&mut prompt, reply);

	if accepted {
		config.remember_user(&submission.credentials.username);
	}
	config.save_user()?;

	if !accepted {
		std::process::exit(1);
	}
	Ok(())
}

fn post(root: &str, submission: &Submission) -> Result<String> {
	let url = submission.url(root);
	let request = match submission.method {
		Method::Post => ureq::post(&url),
	};
	let sent = request
		.set("Content-Type", "text/plain;charset=UTF-8")
		.set("Cache-Control", "no-cache")
		.send_string(&submission.body()?);
	let response = match sent {
		Result::Ok(response) => response,
		// the server explains rejections and its own failures in the body
		Result::Err(ureq::Error::Status(status, response)) => {
			debug!("{} replied with status {}", &url, status);
			response
		},
		Result::Err(e) => return Err(e).with_context(|| anyhow!("POST {}", &url)),
	};
	Ok(response.into_string()?)
}

/// The terminal stand-in for the login page.
struct Prompt {
	user: Option<String>,
	remembered: Option<String>,
	root: String,
}

impl FormView for Prompt {
	fn username(&self) -> Result<String> {
		if let Some(user) = &self.user {
			return Ok(user.to_owned());
		}
		let prompt_suffix = match &self.remembered {
			Some(u) => Cow::Owned(format!("[{}] ", u)),
			None => Cow::Borrowed(""),
		};
		let user = rprompt::prompt_reply_stderr(&format!("User: {}", prompt_suffix))?;
		if user.is_empty() {
			Ok(self.remembered.clone().ok_or_else(|| anyhow!("user required"))?)
		} else {
			Ok(user)
		}
	}

	fn password(&self) -> Result<String> {
		Ok(rpassword::prompt_password("Password: ")?)
	}

	fn focus_password(&mut self) -> Result<()> {
		Ok(())
	}

	fn show_result(&mut self, text: &str) {
		println!("{}", text);
	}

	fn navigate(&mut self, path: &str) -> Result<()> {
		println!("Continue at {}{}", self.root.trim_end_matches('/'), path);
		Ok(())
	}
}

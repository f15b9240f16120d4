use anyhow::{anyhow, Error, Result};
use seed::{prelude::*, window};

use login_form::form::FormView;
use login_form::request::{CacheMode, Method as LoginMethod, Submission};

#[derive(Default)]
pub struct Refs {
	pub username: ElRef<web_sys::HtmlInputElement>,
	pub password: ElRef<web_sys::HtmlInputElement>,
}

/// The mounted form, as seen by the controller.
pub struct Page<'a> {
	pub refs: &'a Refs,
	pub result: &'a mut Option<String>,
}

fn input_value(el: &ElRef<web_sys::HtmlInputElement>, id: &str) -> Result<String> {
	el.get().map(|input| input.value()).ok_or_else(|| anyhow!("#{} is not mounted", id))
}

fn js_error(e: JsValue) -> Error {
	anyhow!("{:?}", e)
}

impl<'a> FormView for Page<'a> {
	fn username(&self) -> Result<String> {
		input_value(&self.refs.username, "uname")
	}

	fn password(&self) -> Result<String> {
		input_value(&self.refs.password, "password")
	}

	fn focus_password(&mut self) -> Result<()> {
		let input = self.refs.password.get().ok_or_else(|| anyhow!("#password is not mounted"))?;
		input.focus().map_err(js_error)
	}

	fn show_result(&mut self, text: &str) {
		*self.result = Some(text.to_owned());
	}

	fn navigate(&mut self, path: &str) -> Result<()> {
		window().location().set_href(path).map_err(js_error)
	}
}

pub async fn send(submission: Submission) -> Result<String> {
	let method = match submission.method {
		LoginMethod::Post => Method::Post,
	};
	let cache = match submission.cache {
		CacheMode::NoCache => web_sys::RequestCache::NoCache,
	};
	let mut request = Request::new(submission.path.as_str())
		.method(method)
		.cache(cache);
	if submission.same_origin {
		request = request.mode(web_sys::RequestMode::SameOrigin);
	}
	// plain string body, as a form post from the page would send it
	let request = request.text(submission.body()?);

	// error statuses still carry a reply whose text should be shown
	let response = request.fetch().await
		.map_err(|e| anyhow!("POST {}: {:?}", &submission.path, e))?;
	response.text().await
		.map_err(|e| anyhow!("Reading reply from {}: {:?}", &submission.path, e))
}

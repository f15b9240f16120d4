mod console;
mod page;

use log::{error, LevelFilter};
use seed::{prelude::*, *};

use login_form::form::LoginForm;
use login_form::keys::{Field, Key};

use page::{Page, Refs};

fn init(_: Url, _: &mut impl Orders<Msg>) -> Model {
	Model {
		form: LoginForm::default(),
		refs: Refs::default(),
		result: None,
	}
}

struct Model {
	form: LoginForm,
	refs: Refs,
	result: Option<String>,
}

enum Msg {
	KeyUp(Field, String, u32),
	Submit,
	Reply(anyhow::Result<String>),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
	let form = &model.form;
	let mut dom = Page { refs: &model.refs, result: &mut model.result };
	let submission = match msg {
		Msg::KeyUp(field, name, code) => form.handle_key(&mut dom, field, &Key { name: &name, code }),
		Msg::Submit => form.submit(&dom).map(Some),
		Msg::Reply(reply) => {
			form.complete(&mut dom, reply);
			Ok(None)
		},
	};

	match submission {
		Ok(Some(submission)) => {
			// no in-flight guard: every submit gets its own request
			orders.perform_cmd(async move { Msg::Reply(page::send(submission).await) });
		},
		Ok(None) => (),
		Err(e) => error!("{:#}", e),
	}
}

fn on_key_up(field: Field) -> EventHandler<Msg> {
	keyboard_ev(Ev::KeyUp, move |ev| Msg::KeyUp(field, ev.key(), ev.key_code()))
}

fn view(model: &Model) -> Node<Msg> {
	div![
		C!["login-form"],
		input![
			el_ref(&model.refs.username),
			id!("uname"),
			attrs!{ At::Type => "text", At::Name => "uname" },
			on_key_up(Field::Username),
		],
		input![
			el_ref(&model.refs.password),
			id!("password"),
			attrs!{ At::Type => "password", At::Name => "password" },
			on_key_up(Field::Password),
		],
		button![
			id!("login-submit"),
			attrs!{ At::Type => "button" },
			"Log in",
			ev(Ev::Click, |_| Msg::Submit),
		],
		// rendered as a text node, server text is never parsed as markup
		div![
			id!("login-result"),
			model.result.as_deref().unwrap_or_default(),
		],
	]
}

// (This function is invoked by `init` function in `index.html`.)
#[wasm_bindgen(start)]
pub fn start() {
	console::init(LevelFilter::Debug);
	App::start("app", init, update, view);
}

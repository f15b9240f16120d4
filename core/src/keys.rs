pub const ENTER: &str = "Enter";
pub const ENTER_CODE: u32 = 13;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
	Username,
	Password,
}

/// The parts of a key-up event we look at.
#[derive(Clone, Debug)]
pub struct Key<'a> {
	pub name: &'a str,
	pub code: u32,
}

impl<'a> Key<'a> {
	pub fn is_enter(&self) -> bool {
		self.name == ENTER || self.code == ENTER_CODE
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
	FocusPassword,
	Submit,
	Ignore,
}

pub fn action_for(field: Field, key: &Key<'_>) -> KeyAction {
	if !key.is_enter() {
		return KeyAction::Ignore;
	}
	match field {
		Field::Username => KeyAction::FocusPassword,
		Field::Password => KeyAction::Submit,
	}
}

#[cfg(test)]
pub mod test {
	use super::*;

	#[test]
	pub fn test_enter_by_name_or_code() {
		assert!(Key { name: "Enter", code: 0 }.is_enter());
		// older browsers report "Unidentified" but still set keyCode
		assert!(Key { name: "Unidentified", code: 13 }.is_enter());
		assert!(!Key { name: "a", code: 65 }.is_enter());
	}

	#[test]
	pub fn test_actions() {
		let enter = Key { name: "Enter", code: 13 };
		let tab = Key { name: "Tab", code: 9 };
		assert_eq!(action_for(Field::Username, &enter), KeyAction::FocusPassword);
		assert_eq!(action_for(Field::Password, &enter), KeyAction::Submit);
		assert_eq!(action_for(Field::Username, &tab), KeyAction::Ignore);
		assert_eq!(action_for(Field::Password, &tab), KeyAction::Ignore);
	}
}

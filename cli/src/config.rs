use log::*;
use anyhow::*;
use serde::{Serialize, Deserialize};
use std::{fs, path::{Path, PathBuf}, ops::Deref};

pub const SERVER_ENV: &str = "LOGIN_FORM_SERVER";
pub const DEFAULT_SERVER: &str = "http://localhost:8000";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
	#[serde(default)]
	pub server: Option<String>,

	// last user that logged in successfully
	#[serde(default)]
	pub user: Option<String>,
}

pub struct Config {
	pub data: ConfigFile,
	pub dirty: bool,
}

impl Deref for Config {
	type Target = ConfigFile;

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl Config {
	fn user_path() -> PathBuf {
		PathBuf::from(shellexpand::tilde("~/.config/login-form/client.json").into_owned())
	}

	pub fn load_user() -> Result<Config> {
		Self::load(&Self::user_path())
	}

	pub fn load(path: &Path) -> Result<Config> {
		let data = if path.exists() {
			let contents = fs::read_to_string(path)?;
			serde_json::from_str::<ConfigFile>(&contents)
				.with_context(|| anyhow!("Processing {:?}", path))?
		} else {
			ConfigFile::default()
		};
		Ok(Self { data, dirty: false })
	}

	pub fn save_user(&mut self) -> Result<()> {
		self.save(&Self::user_path())
	}

	pub fn save(&mut self, path: &Path) -> Result<()> {
		if self.dirty {
			info!("Storing {}", &path.to_string_lossy());
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent)?;
			}
			fs::write(path, serde_json::to_string_pretty(&self.data)?)?;
			self.dirty = false;
		}
		Ok(())
	}

	/// `--server` wins over the environment, which wins over the stored root.
	pub fn server_root(&self, flag: Option<&str>, env: Option<String>) -> String {
		flag.map(|s| s.to_owned())
			.or(env)
			.or_else(|| self.server.clone())
			.unwrap_or_else(|| DEFAULT_SERVER.to_owned())
	}

	pub fn remember_user(&mut self, user: &str) {
		if self.data.user.as_deref() != Some(user) {
			self.data.user = Some(user.to_owned());
			self.dirty = true;
		}
	}
}

#[cfg(test)]
pub mod test {
	use super::*;

	fn config(server: Option<&str>) -> Config {
		Config {
			data: ConfigFile { server: server.map(|s| s.to_owned()), user: None },
			dirty: false,
		}
	}

	#[test]
	pub fn test_server_precedence() {
		let stored = config(Some("http://stored"));
		assert_eq!(stored.server_root(Some("http://flag"), Some("http://env".to_owned())), "http://flag");
		assert_eq!(stored.server_root(None, Some("http://env".to_owned())), "http://env");
		assert_eq!(stored.server_root(None, None), "http://stored");
		assert_eq!(config(None).server_root(None, None), DEFAULT_SERVER);
	}

	#[test]
	pub fn test_remember_user_marks_dirty() {
		let mut config = config(None);
		config.remember_user("alice");
		assert!(config.dirty);
		assert_eq!(config.user.as_deref(), Some("alice"));

		config.dirty = false;
		config.remember_user("alice");
		assert!(!config.dirty);
	}

	#[test]
	pub fn test_save_and_load() {
		let path = std::env::temp_dir()
			.join(format!("login-form-test-{}", std::process::id()))
			.join("client.json");
		let mut config = config(Some("http://example.org"));
		config.remember_user("bob");
		config.save(&path).unwrap();
		assert!(!config.dirty);

		let loaded = Config::load(&path).unwrap();
		assert_eq!(loaded.data, config.data);
		fs::remove_dir_all(path.parent().unwrap()).unwrap();
	}

	#[test]
	pub fn test_missing_file_is_default() {
		let loaded = Config::load(Path::new("/nonexistent/login-form/client.json")).unwrap();
		assert_eq!(loaded.data, ConfigFile::default());
		assert!(!loaded.dirty);
	}
}

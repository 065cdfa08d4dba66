use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use colored::Colorize;

use crate::error::AppError;

/// Profile file inside the client directory
pub const PROFILE_FILE_NAME: &str = ".profile.txt";

/// Variables consulted, in order, for the login name
const USER_NAME_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Resolved identity and paths for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEnvironment {
    client_name: String,
    home_dir: PathBuf,
    client_dir: PathBuf,
    profile_path: PathBuf,
}

impl ClientEnvironment {
    /// Resolves the current user and home directory from the OS
    pub fn resolve() -> Result<Self, AppError> {
        let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
        let client_name: String = current_user_name()?;
        Ok(Self::from_parts(client_name, home_dir))
    }

    /// Builds the context from an explicit user name and home directory
    pub fn from_parts(client_name: impl Into<String>, home_dir: impl Into<PathBuf>) -> Self {
        let client_name: String = client_name.into();
        let home_dir: PathBuf = home_dir.into();
        let client_dir: PathBuf = home_dir.join(&client_name);
        let profile_path: PathBuf = client_dir.join(PROFILE_FILE_NAME);
        Self {
            client_name,
            home_dir,
            client_dir,
            profile_path,
        }
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    #[cfg(test)]
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    #[cfg(test)]
    pub fn client_dir(&self) -> &Path {
        &self.client_dir
    }

    pub fn profile_path(&self) -> &Path {
        &self.profile_path
    }

    /// Creates the client directory if missing and reports which case applied
    ///
    /// Only the last path level is created; the home directory must already exist.
    pub fn ensure_client_directory<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        writeln!(
            out,
            "{}\n",
            format!("Setting up [{}] environment...", self.client_name).yellow()
        )?;

        if !self.home_dir.is_dir() {
            return Err(AppError::HomeDirNotFound);
        }

        if self.client_dir.is_dir() {
            writeln!(
                out,
                "{} {}",
                "client directory already exists:".blue(),
                self.client_dir.display()
            )?;
        } else {
            writeln!(
                out,
                "{} {}",
                "Creating directory for client:".green(),
                self.client_name
            )?;
            fs::create_dir(&self.client_dir)?;
        }
        Ok(())
    }

    /// Makes the client directory the process working directory
    pub fn enter_client_directory(&self) -> Result<(), AppError> {
        env::set_current_dir(&self.client_dir)?;
        Ok(())
    }
}

/// Login name of the current user
fn current_user_name() -> Result<String, AppError> {
    user_name_from(|key| env::var(key).ok(), passwd_user_name)
}

/// First non-empty login variable, otherwise the account database entry
fn user_name_from<F, G>(lookup_var: F, account_name: G) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
    G: FnOnce() -> Option<String>,
{
    USER_NAME_VARS
        .iter()
        .filter_map(|key| lookup_var(*key))
        .find(|value| !value.is_empty())
        .or_else(account_name)
        .ok_or(AppError::UserNotFound)
}

/// Name of the passwd entry for the real uid
#[cfg(unix)]
fn passwd_user_name() -> Option<String> {
    use nix::unistd::{Uid, User};

    User::from_uid(Uid::current())
        .ok()
        .flatten()
        .map(|user| user.name)
}

#[cfg(not(unix))]
fn passwd_user_name() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_paths_from_home_and_user() {
        let env = ClientEnvironment::from_parts("jane", "/home/jane");
        assert_eq!(env.client_name(), "jane");
        assert_eq!(env.home_dir(), Path::new("/home/jane"));
        assert_eq!(env.client_dir(), Path::new("/home/jane/jane"));
        assert_eq!(env.profile_path(), Path::new("/home/jane/jane/.profile.txt"));
    }

    #[test]
    fn creates_missing_client_directory() {
        let home = tempfile::tempdir().unwrap();
        let env = ClientEnvironment::from_parts("jane", home.path());
        let mut out: Vec<u8> = Vec::new();

        env.ensure_client_directory(&mut out).unwrap();

        assert!(env.client_dir().is_dir());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Creating directory for client:"));
        assert!(!output.contains("already exists"));
    }

    #[test]
    fn existing_client_directory_is_left_alone() {
        let home = tempfile::tempdir().unwrap();
        let env = ClientEnvironment::from_parts("jane", home.path());
        fs::create_dir(env.client_dir()).unwrap();
        fs::write(env.profile_path(), "keep me").unwrap();
        let mut out: Vec<u8> = Vec::new();

        env.ensure_client_directory(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("client directory already exists:"));
        assert_eq!(fs::read_to_string(env.profile_path()).unwrap(), "keep me");
    }

    #[test]
    fn missing_home_directory_is_an_error() {
        let home = tempfile::tempdir().unwrap();
        let env = ClientEnvironment::from_parts("jane", home.path().join("gone"));
        let mut out: Vec<u8> = Vec::new();

        let result = env.ensure_client_directory(&mut out);

        assert!(matches!(result, Err(AppError::HomeDirNotFound)));
        assert!(!env.client_dir().exists());
    }

    #[test]
    fn login_variables_are_checked_in_order() {
        let name = user_name_from(
            |key| match key {
                "USER" => Some("from-user".to_string()),
                "USERNAME" => Some("from-username".to_string()),
                _ => None,
            },
            || Some("from-passwd".to_string()),
        )
        .unwrap();
        assert_eq!(name, "from-user");

        let name = user_name_from(
            |key| (key == "LOGNAME").then(|| "from-logname".to_string()),
            || None,
        )
        .unwrap();
        assert_eq!(name, "from-logname");
    }

    #[test]
    fn empty_login_variables_are_skipped() {
        let name = user_name_from(
            |key| match key {
                "LOGNAME" => Some(String::new()),
                "LNAME" => Some("from-lname".to_string()),
                _ => None,
            },
            || None,
        )
        .unwrap();
        assert_eq!(name, "from-lname");
    }

    #[test]
    fn account_database_is_the_fallback() {
        let name = user_name_from(|_| None, || Some("from-passwd".to_string())).unwrap();
        assert_eq!(name, "from-passwd");
    }

    #[test]
    fn no_user_name_is_an_error() {
        let result = user_name_from(|_| Some(String::new()), || None);
        assert!(matches!(result, Err(AppError::UserNotFound)));
    }
}

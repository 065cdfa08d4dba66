use std::{
    fs,
    io::Write,
    path::PathBuf,
};

use colored::Colorize;

use crate::{error::AppError, profile::Profile};

/// Reads and writes the client's profile file
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Checks if the profile file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Saves the profile, replacing any previous content
    ///
    /// # Arguments
    /// * `profile` - Validated profile to write
    pub fn save(&self, profile: &Profile) -> Result<(), AppError> {
        fs::write(&self.path, profile.to_string())?;
        Ok(())
    }

    /// Prints the raw file content under a header; no-op when the file is absent
    pub fn read_and_display<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        if !self.exists() {
            return Ok(());
        }

        let file_contents: String = fs::read_to_string(&self.path)?;
        writeln!(out, "\n{}", "--- Profile Information ---".blue())?;
        writeln!(out, "{}", file_contents)?;
        Ok(())
    }
}

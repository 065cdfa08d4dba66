use std::io::Write;

use colored::Colorize;

use crate::{
    environment::ClientEnvironment,
    error::AppError,
    profile::Profile,
    prompt::Prompter,
    storage::ProfileStore,
    validation::{validate_input_email, validate_input_name, validate_input_phone},
};

const NAME_PROMPT: &str = "Please enter your name:";
const PHONE_PROMPT: &str = "Please enter your phone number:";
const EMAIL_PROMPT: &str = "Please enter your email address:";
const CONFIRM_PROMPT: &str = "Is the information above up to date? (Yes/y or No/n):";
const GRANT_MESSAGE: &str = "ACCESS GRANTED.";

/// Normalized answer to the "is this up to date" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Affirm,
    Deny,
    Unrecognized,
}

impl Confirmation {
    /// Case-insensitive match on yes/y and no/n; input is not trimmed
    pub fn parse(response: &str) -> Self {
        if ["yes", "y"].iter().any(|word| response.eq_ignore_ascii_case(word)) {
            Confirmation::Affirm
        } else if ["no", "n"].iter().any(|word| response.eq_ignore_ascii_case(word)) {
            Confirmation::Deny
        } else {
            Confirmation::Unrecognized
        }
    }
}

/// How the profile check finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// No file existed; a new profile was collected and saved
    Created,
    /// The stored profile was confirmed as current
    Confirmed,
    /// The stored profile was replaced
    Updated,
}

/// Drives the setup flow for one client session
pub struct ProfileManager<P, W> {
    env: ClientEnvironment,
    store: ProfileStore,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> ProfileManager<P, W> {
    pub fn new(env: ClientEnvironment, prompter: P, out: W) -> Self {
        let store = ProfileStore::new(env.profile_path());
        Self {
            env,
            store,
            prompter,
            out,
        }
    }

    /// Runs the complete flow: directory setup, then profile creation or confirmation
    pub fn execute(&mut self) -> Result<ProfileOutcome, AppError> {
        writeln!(
            self.out,
            "{}\n",
            format!("Welcome => {} <=", self.env.client_name()).green()
        )?;
        self.env.ensure_client_directory(&mut self.out)?;
        self.env.enter_client_directory()?;
        self.check_and_update_profile()
    }

    /// Creates the profile if absent, otherwise shows it and loops until confirmed or replaced
    pub fn check_and_update_profile(&mut self) -> Result<ProfileOutcome, AppError> {
        if !self.store.exists() {
            writeln!(
                self.out,
                "{}",
                "Profile file not found. Creating a new profile...".yellow()
            )?;
            let profile: Profile = self.collect_profile()?;
            self.save_profile(&profile)?;
            self.grant()?;
            return Ok(ProfileOutcome::Created);
        }

        self.store.read_and_display(&mut self.out)?;
        loop {
            let response: String = self.prompter.ask(&format!("{}", CONFIRM_PROMPT.blue()))?;
            match Confirmation::parse(&response) {
                Confirmation::Affirm => {
                    self.grant()?;
                    break Ok(ProfileOutcome::Confirmed);
                }
                Confirmation::Deny => {
                    writeln!(self.out, "{}", "Updating your details...".yellow())?;
                    let profile: Profile = self.collect_profile()?;
                    self.save_profile(&profile)?;
                    self.grant()?;
                    break Ok(ProfileOutcome::Updated);
                }
                Confirmation::Unrecognized => {
                    writeln!(self.out, "{}", "Please enter a valid response.".red())?
                }
            }
        }
    }

    /// Prompts for name, phone and email until all three are valid
    ///
    /// Any invalid field restarts the form from the name prompt.
    pub fn collect_profile(&mut self) -> Result<Profile, AppError> {
        loop {
            match self.prompt_profile() {
                Ok(profile) => {
                    writeln!(self.out, "\n{}", "--- client Details ---".blue())?;
                    write!(self.out, "{}", profile)?;
                    break Ok(profile);
                }
                Err(AppError::Validation(msg)) => writeln!(self.out, "{}", msg.red())?,
                Err(e) => break Err(e),
            }
        }
    }

    fn prompt_profile(&mut self) -> Result<Profile, AppError> {
        let name: String = self.prompt_field(NAME_PROMPT, validate_input_name)?;
        let phone: String = self.prompt_field(PHONE_PROMPT, validate_input_phone)?;
        let email: String = self.prompt_field(EMAIL_PROMPT, validate_input_email)?;
        Ok(Profile::new(name, phone, email))
    }

    fn prompt_field<F>(&mut self, prompt_message: &str, input_validation: F) -> Result<String, AppError>
    where
        F: Fn(&str) -> Result<(), AppError>,
    {
        let input: String = self.prompter.ask(&format!("{}", prompt_message.blue()))?;
        input_validation(&input)?;
        Ok(input)
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<(), AppError> {
        writeln!(self.out, "{}", "Saving client details...".yellow())?;
        self.store.save(profile)
    }

    fn grant(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "{}\n", GRANT_MESSAGE.green())?;
        Ok(())
    }
}

//! Field constraints checked before a record is written.

use crate::errors::{ErrorKind, Result};
use crate::models::{NewMessage, NewThread, NewTopic, NewUser};

pub const TOPIC_TITLE_MAX: usize = 50;
pub const TOPIC_DESCRIPTION_MAX: usize = 200;
pub const THREAD_TITLE_MAX: usize = 50;
pub const USERNAME_MAX: usize = 150;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Lengths are counted in characters, not bytes.
fn max_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        bail!(ErrorKind::FieldTooLong(field, max));
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!(ErrorKind::FieldEmpty(field));
    }
    Ok(())
}

impl<'a> Validate for NewTopic<'a> {
    fn validate(&self) -> Result<()> {
        required("title", self.title)?;
        max_length("title", self.title, TOPIC_TITLE_MAX)?;
        max_length("description", self.description, TOPIC_DESCRIPTION_MAX)
    }
}

impl<'a> Validate for NewThread<'a> {
    fn validate(&self) -> Result<()> {
        required("title", self.title)?;
        max_length("title", self.title, THREAD_TITLE_MAX)
    }
}

impl<'a> Validate for NewMessage<'a> {
    fn validate(&self) -> Result<()> {
        required("body", self.body)
    }
}

impl<'a> Validate for NewUser<'a> {
    fn validate(&self) -> Result<()> {
        required("username", self.username)?;
        max_length("username", self.username, USERNAME_MAX)
    }
}

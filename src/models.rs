use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::naive::NaiveDateTime;
use chrono::Utc;
use diesel::prelude::*;
use crate::errors::{ErrorKind, Result};
use crate::schema::*;
use std::fmt;

pub mod validation;

/// Current time as stored in `time_created` columns (naive UTC).
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[derive(Debug, Clone, PartialEq, Identifiable, Queryable, Selectable)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// argon2 PHC string
    pub password_hash: String,
}

impl User {
    pub fn verify_password(&self, password: &str) -> bool {
        let hash = match PasswordHash::new(&self.password_hash) {
            Ok(hash) => hash,
            Err(err) => {
                error!("failed to parse password hash of user {}: {}", self.id, err);
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.username)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: String,
}

impl<'a> NewUser<'a> {
    pub fn new(username: &'a str, password: &str) -> Result<NewUser<'a>> {
        Ok(NewUser {
            username,
            password_hash: hash_password(password)?,
        })
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ErrorKind::PasswordHash(e.to_string()).into())
}

#[derive(Debug, Clone, PartialEq, Identifiable, Queryable, Selectable)]
#[diesel(table_name = topics)]
pub struct Topic {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = topics)]
pub struct NewTopic<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, PartialEq, Identifiable, Queryable, Selectable)]
#[diesel(table_name = threads)]
pub struct Thread {
    pub id: i32,
    pub title: String,
    pub time_created: NaiveDateTime,
}

impl fmt::Display for Thread {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = threads)]
pub struct NewThread<'a> {
    pub title: &'a str,
    pub time_created: NaiveDateTime,
}

impl<'a> NewThread<'a> {
    pub fn new(title: &'a str) -> NewThread<'a> {
        NewThread {
            title,
            time_created: now(),
        }
    }

    pub fn created_at(mut self, time: NaiveDateTime) -> NewThread<'a> {
        self.time_created = time;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(User))]
#[diesel(belongs_to(Thread))]
#[diesel(table_name = messages)]
pub struct Message {
    pub id: i32,
    pub user_id: i32,
    pub thread_id: i32,
    pub body: String,
    pub time_created: NaiveDateTime,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.body)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessage<'a> {
    pub user_id: i32,
    pub thread_id: i32,
    pub body: &'a str,
    pub time_created: NaiveDateTime,
}

impl<'a> NewMessage<'a> {
    pub fn new(user_id: i32, thread_id: i32, body: &'a str) -> NewMessage<'a> {
        NewMessage {
            user_id,
            thread_id,
            body,
            time_created: now(),
        }
    }

    pub fn created_at(mut self, time: NaiveDateTime) -> NewMessage<'a> {
        self.time_created = time;
        self
    }
}

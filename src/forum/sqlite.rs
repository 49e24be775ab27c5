use crate::errors::{Error, ErrorKind, Result};
use crate::forum::Forum;
use crate::models::validation::Validate;
use crate::models::{Message, NewMessage, NewThread, NewTopic, NewUser, Thread, Topic, User};
use crate::schema::{messages, threads, topics, users};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

pub struct SqliteForum<'a> {
    connection: &'a mut SqliteConnection,
}

impl<'a> Forum for SqliteForum<'a> {
    fn create_user(&mut self, new_user: &NewUser) -> Result<User> {
        new_user.validate()?;
        if self.user_by_name(new_user.username)?.is_some() {
            bail!(ErrorKind::UsernameTaken(new_user.username.to_owned()));
        }

        let user: User = diesel::insert_into(users::table)
            .values(new_user)
            .returning(User::as_returning())
            .get_result(self.conn())
            .map_err(|e| username_conflict(e, new_user.username))?;
        debug!("created user {} ({})", user.id, user.username);
        Ok(user)
    }

    fn create_topic(&mut self, new_topic: &NewTopic) -> Result<Topic> {
        new_topic.validate()?;
        let topic: Topic = diesel::insert_into(topics::table)
            .values(new_topic)
            .returning(Topic::as_returning())
            .get_result(self.conn())?;
        debug!("created topic {}", topic.id);
        Ok(topic)
    }

    fn create_thread(&mut self, new_thread: &NewThread) -> Result<Thread> {
        new_thread.validate()?;
        let thread: Thread = diesel::insert_into(threads::table)
            .values(new_thread)
            .returning(Thread::as_returning())
            .get_result(self.conn())?;
        debug!("created thread {}", thread.id);
        Ok(thread)
    }

    fn create_message(&mut self, new_message: &NewMessage) -> Result<Message> {
        new_message.validate()?;
        if self.user(new_message.user_id)?.is_none() {
            bail!(ErrorKind::NotFound("user", new_message.user_id));
        }
        if self.thread(new_message.thread_id)?.is_none() {
            bail!(ErrorKind::NotFound("thread", new_message.thread_id));
        }

        let message: Message = diesel::insert_into(messages::table)
            .values(new_message)
            .returning(Message::as_returning())
            .get_result(self.conn())?;
        debug!("created message {} in thread {}", message.id, message.thread_id);
        Ok(message)
    }

    fn user(&mut self, id: i32) -> Result<Option<User>> {
        users::table
            .find(id)
            .select(User::as_select())
            .first(self.conn())
            .optional()
            .map_err(|e| e.into())
    }

    fn user_by_name(&mut self, username: &str) -> Result<Option<User>> {
        users::table
            .filter(users::username.eq(username))
            .select(User::as_select())
            .first(self.conn())
            .optional()
            .map_err(|e| e.into())
    }

    fn thread(&mut self, id: i32) -> Result<Option<Thread>> {
        threads::table
            .find(id)
            .select(Thread::as_select())
            .first(self.conn())
            .optional()
            .map_err(|e| e.into())
    }

    fn topics(&mut self) -> Result<Vec<Topic>> {
        topics::table
            .order(topics::id.asc())
            .select(Topic::as_select())
            .load(self.conn())
            .map_err(|e| e.into())
    }

    fn threads(&mut self) -> Result<Vec<Thread>> {
        threads::table
            .order((threads::time_created.desc(), threads::id.desc()))
            .select(Thread::as_select())
            .load(self.conn())
            .map_err(|e| e.into())
    }

    fn messages_in_thread(&mut self, thread_id: i32) -> Result<Vec<Message>> {
        let thread = self.thread(thread_id)?
            .ok_or(ErrorKind::NotFound("thread", thread_id))?;

        Message::belonging_to(&thread)
            .order((messages::time_created.asc(), messages::id.asc()))
            .select(Message::as_select())
            .load(self.conn())
            .map_err(|e| e.into())
    }
}

impl<'a> SqliteForum<'a> {
    pub fn new(connection: &'a mut SqliteConnection) -> SqliteForum<'a> {
        SqliteForum { connection }
    }

    fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.connection
    }
}

/// The lookup in `create_user` can race with another writer; the unique
/// index has the final say.
fn username_conflict(err: DieselError, username: &str) -> Error {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ErrorKind::UsernameTaken(username.to_owned()).into()
        }
        other => other.into(),
    }
}

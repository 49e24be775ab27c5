use crate::errors::{ErrorKind, Result};
use crate::models::validation::Validate;
use crate::models::{Message, NewMessage, NewThread, NewTopic, NewUser, Thread, Topic, User};
pub use self::sqlite::SqliteForum;

mod sqlite;

/// Storage for users, topics, threads and their messages.
///
/// Every `create_*` call validates its input before anything is written.
pub trait Forum {
    fn create_user(&mut self, new_user: &NewUser) -> Result<User>;
    fn create_topic(&mut self, new_topic: &NewTopic) -> Result<Topic>;
    fn create_thread(&mut self, new_thread: &NewThread) -> Result<Thread>;
    /// Fails with `NotFound` if the author or the thread does not exist.
    fn create_message(&mut self, new_message: &NewMessage) -> Result<Message>;

    fn user(&mut self, id: i32) -> Result<Option<User>>;
    fn user_by_name(&mut self, username: &str) -> Result<Option<User>>;
    fn thread(&mut self, id: i32) -> Result<Option<Thread>>;

    /// Topics in creation order.
    fn topics(&mut self) -> Result<Vec<Topic>>;
    /// Threads, newest first.
    fn threads(&mut self) -> Result<Vec<Thread>>;
    /// Messages of a thread, oldest first.
    fn messages_in_thread(&mut self, thread_id: i32) -> Result<Vec<Message>>;
}

/// Keeps everything in vectors. Ids are handed out sequentially from 1.
#[derive(Debug, Default)]
pub struct MemoryForum {
    pub users: Vec<User>,
    pub topics: Vec<Topic>,
    pub threads: Vec<Thread>,
    pub messages: Vec<Message>,
}

impl MemoryForum {
    pub fn new() -> MemoryForum {
        MemoryForum::default()
    }

    fn next_id(len: usize) -> i32 {
        len as i32 + 1
    }
}

impl Forum for MemoryForum {
    fn create_user(&mut self, new_user: &NewUser) -> Result<User> {
        new_user.validate()?;
        if self.users.iter().any(|u| u.username == new_user.username) {
            bail!(ErrorKind::UsernameTaken(new_user.username.to_owned()));
        }

        let user = User {
            id: Self::next_id(self.users.len()),
            username: new_user.username.to_owned(),
            password_hash: new_user.password_hash.clone(),
        };
        self.users.push(user.clone());
        Ok(user)
    }

    fn create_topic(&mut self, new_topic: &NewTopic) -> Result<Topic> {
        new_topic.validate()?;
        let topic = Topic {
            id: Self::next_id(self.topics.len()),
            title: new_topic.title.to_owned(),
            description: new_topic.description.to_owned(),
        };
        self.topics.push(topic.clone());
        Ok(topic)
    }

    fn create_thread(&mut self, new_thread: &NewThread) -> Result<Thread> {
        new_thread.validate()?;
        let thread = Thread {
            id: Self::next_id(self.threads.len()),
            title: new_thread.title.to_owned(),
            time_created: new_thread.time_created,
        };
        self.threads.push(thread.clone());
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

        let message = Message {
            id: Self::next_id(self.messages.len()),
            user_id: new_message.user_id,
            thread_id: new_message.thread_id,
            body: new_message.body.to_owned(),
            time_created: new_message.time_created,
        };
        self.messages.push(message.clone());
        Ok(message)
    }

    fn user(&mut self, id: i32) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    fn user_by_name(&mut self, username: &str) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    fn thread(&mut self, id: i32) -> Result<Option<Thread>> {
        Ok(self.threads.iter().find(|t| t.id == id).cloned())
    }

    fn topics(&mut self) -> Result<Vec<Topic>> {
        Ok(self.topics.clone())
    }

    fn threads(&mut self) -> Result<Vec<Thread>> {
        let mut threads = self.threads.clone();
        threads.sort_by(|a, b| (b.time_created, b.id).cmp(&(a.time_created, a.id)));
        Ok(threads)
    }

    fn messages_in_thread(&mut self, thread_id: i32) -> Result<Vec<Message>> {
        if self.thread(thread_id)?.is_none() {
            bail!(ErrorKind::NotFound("thread", thread_id));
        }

        let mut messages: Vec<Message> = self.messages.iter()
            .filter(|m| m.thread_id == thread_id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| (m.time_created, m.id));
        Ok(messages)
    }
}

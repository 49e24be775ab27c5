#![allow(dead_code)]

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use simple_forums::db;
use simple_forums::forum::Forum;
use simple_forums::models::{Message, NewMessage, NewThread, NewUser, Thread, User};

pub fn connect() -> SqliteConnection {
    let mut conn = db::establish_and_migrate(":memory:")
        .expect("Error setting up in-memory database");
    conn.begin_test_transaction().unwrap();
    conn
}

pub fn create_user<F: Forum>(forum: &mut F, username: &str) -> User {
    let new_user = NewUser::new(username, "test").unwrap();
    forum.create_user(&new_user).unwrap()
}

pub fn create_thread<F: Forum>(forum: &mut F) -> Thread {
    forum.create_thread(&NewThread::new("Test Thread")).unwrap()
}

pub fn create_message<F: Forum>(forum: &mut F) -> Message {
    let user = create_user(forum, "poster");
    let thread = create_thread(forum);
    forum.create_message(&NewMessage::new(user.id, thread.id, "Test message")).unwrap()
}

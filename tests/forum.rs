extern crate chrono;
extern crate diesel;
extern crate simple_forums;

mod common;

use chrono::Duration;
use common::*;
use diesel::prelude::*;
use simple_forums::errors::{Error, ErrorKind};
use simple_forums::forum::{Forum, SqliteForum};
use simple_forums::models::validation::TOPIC_TITLE_MAX;
use simple_forums::models::{Message, NewMessage, NewThread, NewTopic, NewUser};
use simple_forums::schema::topics;

#[test]
fn save_topic() {
    let mut connection = connect();
    let topic = {
        let mut forum = SqliteForum::new(&mut connection);
        forum.create_topic(&NewTopic { title: "General", description: "Anything goes" }).unwrap()
    };

    let count: i64 = topics::table.count().get_result(&mut connection).unwrap();
    assert_eq!(count, 1);

    let mut forum = SqliteForum::new(&mut connection);
    let loaded = forum.topics().unwrap();
    assert_eq!(loaded, vec![topic]);
    assert_eq!("General", loaded[0].to_string());
    assert_eq!("Anything goes", loaded[0].description);
}

#[test]
fn overlong_topic_title_not_saved() {
    let mut connection = connect();
    let mut forum = SqliteForum::new(&mut connection);

    let title = "x".repeat(TOPIC_TITLE_MAX + 1);
    match forum.create_topic(&NewTopic { title: &title, description: "" }) {
        Err(Error(ErrorKind::FieldTooLong("title", TOPIC_TITLE_MAX), _)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(forum.topics().unwrap().is_empty());
}

#[test]
fn duplicate_username_rejected() {
    let mut connection = connect();
    let mut forum = SqliteForum::new(&mut connection);
    create_user(&mut forum, "test");

    let again = NewUser::new("test", "other").unwrap();
    match forum.create_user(&again) {
        Err(Error(ErrorKind::UsernameTaken(name), _)) => assert_eq!(name, "test"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn stored_password_verifies() {
    let mut connection = connect();
    let mut forum = SqliteForum::new(&mut connection);
    let user = forum.create_user(&NewUser::new("test", "s3cret").unwrap()).unwrap();

    let loaded = forum.user_by_name("test").unwrap().unwrap();
    assert_eq!(user, loaded);
    assert!(loaded.verify_password("s3cret"));
    assert!(!loaded.verify_password("wrong"));
    assert!(forum.user_by_name("nobody").unwrap().is_none());
}

#[test]
fn message_to_missing_thread_rejected() {
    let mut connection = connect();
    let mut forum = SqliteForum::new(&mut connection);
    let user = create_user(&mut forum, "test");

    match forum.create_message(&NewMessage::new(user.id, 99, "hello")) {
        Err(Error(ErrorKind::NotFound("thread", 99), _)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn message_from_missing_user_rejected() {
    let mut connection = connect();
    let mut forum = SqliteForum::new(&mut connection);
    let thread = create_thread(&mut forum);

    match forum.create_message(&NewMessage::new(7, thread.id, "hello")) {
        Err(Error(ErrorKind::NotFound("user", 7), _)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn messages_listed_oldest_first() {
    let mut connection = connect();
    let mut forum = SqliteForum::new(&mut connection);
    let user = create_user(&mut forum, "test");
    let thread = create_thread(&mut forum);
    let other = create_thread(&mut forum);
    let base = thread.time_created;

    for (body, offset) in &[("third", 3), ("first", 1), ("second", 2)] {
        forum.create_message(
            &NewMessage::new(user.id, thread.id, body).created_at(base + Duration::milliseconds(*offset))
        ).unwrap();
    }
    forum.create_message(&NewMessage::new(user.id, other.id, "elsewhere")).unwrap();

    let bodies: Vec<String> = forum.messages_in_thread(thread.id).unwrap()
        .into_iter()
        .map(|m: Message| m.body)
        .collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
}

#[test]
fn threads_listed_newest_first() {
    let mut connection = connect();
    let mut forum = SqliteForum::new(&mut connection);
    let old = create_thread(&mut forum);
    let new = forum.create_thread(
        &NewThread::new("Newer").created_at(old.time_created + Duration::hours(1))
    ).unwrap();

    let ids: Vec<i32> = forum.threads().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![new.id, old.id]);
}

#[test]
fn listing_missing_thread_fails() {
    let mut connection = connect();
    let mut forum = SqliteForum::new(&mut connection);

    match forum.messages_in_thread(5) {
        Err(Error(ErrorKind::NotFound("thread", 5), _)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

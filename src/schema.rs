diesel::table! {
    messages (id) {
        id -> Integer,
        user_id -> Integer,
        thread_id -> Integer,
        body -> Text,
        time_created -> Timestamp,
    }
}

diesel::table! {
    threads (id) {
        id -> Integer,
        title -> Text,
        time_created -> Timestamp,
    }
}

diesel::table! {
    topics (id) {
        id -> Integer,
        title -> Text,
        description -> Text,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        password_hash -> Text,
    }
}

diesel::joinable!(messages -> users (user_id));
diesel::joinable!(messages -> threads (thread_id));

diesel::allow_tables_to_appear_in_same_query!(messages, threads, topics, users);

use diesel::result::Error as DieselError;
use diesel::ConnectionError;

error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    foreign_links {
        Diesel(DieselError);
        Connection(ConnectionError);
        Io(::std::io::Error);
    }

    errors {
        Migration(reason: String) {
            description("failed to run migrations")
            display("failed to run migrations: {}", reason)
        }
        FieldTooLong(field: &'static str, max: usize) {
            description("field exceeds its maximum length")
            display("{} must be at most {} characters long", field, max)
        }
        FieldEmpty(field: &'static str) {
            description("required field is empty")
            display("{} must not be empty", field)
        }
        NotFound(entity: &'static str, id: i32) {
            description("record not found")
            display("{} {} does not exist", entity, id)
        }
        UsernameTaken(username: String) {
            description("username already taken")
            display("username '{}' is already taken", username)
        }
        PasswordHash(reason: String) {
            description("failed to hash password")
            display("failed to hash password: {}", reason)
        }
    }
}

use clap::{ArgAction, Parser, Subcommand};
use error_chain::ChainedError;
use log::{error, info, LevelFilter};
use simple_forums::config::Config;
use simple_forums::db;
use simple_forums::errors::{ErrorKind, Result};
use simple_forums::forum::{Forum, SqliteForum};
use simple_forums::models::{NewMessage, NewThread, NewTopic, NewUser};
use std::process;

/// Manage a simple forum database of topics, threads and messages
#[derive(Debug, Parser)]
#[command(name = "simple_forums")]
struct Cli {
    /// Database file (overrides DATABASE_URL)
    #[arg(long = "database", short = 'd', global = true)]
    db_url: Option<String>,
    /// More output per occurrence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbosity: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending schema migrations
    Migrate,
    /// Register a user account
    AddUser {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create a topic
    AddTopic {
        title: String,
        description: String,
    },
    /// Start a new thread
    AddThread {
        title: String,
    },
    /// Post a message to a thread
    Post {
        /// Author's username
        #[arg(long)]
        user: String,
        /// Thread id
        #[arg(long)]
        thread: i32,
        body: String,
    },
    /// List topics
    Topics,
    /// List threads, newest first
    Threads,
    /// Print a thread with its messages
    Show {
        thread: i32,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Cli) -> Result<()> {
    let config = Config::load(args.db_url);
    info!("using database {}", config.database_url);

    let mut connection = db::establish(&config.database_url)?;
    let applied = db::run_migrations(&mut connection)?;
    if let Command::Migrate = args.command {
        println!("{} migration(s) applied", applied.len());
        return Ok(());
    }

    let mut forum = SqliteForum::new(&mut connection);
    match args.command {
        Command::Migrate => {}
        Command::AddUser { username, password } => {
            let user = forum.create_user(&NewUser::new(&username, &password)?)?;
            println!("{}\t{}", user.id, user);
        }
        Command::AddTopic { title, description } => {
            let topic = forum.create_topic(&NewTopic { title: &title, description: &description })?;
            println!("{}\t{}", topic.id, topic);
        }
        Command::AddThread { title } => {
            let thread = forum.create_thread(&NewThread::new(&title))?;
            println!("{}\t{}", thread.id, thread);
        }
        Command::Post { user, thread, body } => {
            let author = forum.user_by_name(&user)?
                .ok_or_else(|| format!("No user named '{}'", user))?;
            let message = forum.create_message(&NewMessage::new(author.id, thread, &body))?;
            println!("{}\t{}", message.id, message.time_created);
        }
        Command::Topics => {
            for topic in forum.topics()? {
                println!("{}\t{}\t{}", topic.id, topic, topic.description);
            }
        }
        Command::Threads => {
            for thread in forum.threads()? {
                println!("{}\t{}\t{}", thread.id, thread.time_created, thread);
            }
        }
        Command::Show { thread } => {
            let shown = forum.thread(thread)?
                .ok_or(ErrorKind::NotFound("thread", thread))?;
            println!("# {} ({})", shown, shown.time_created);
            for message in forum.messages_in_thread(shown.id)? {
                let author = match forum.user(message.user_id)? {
                    Some(user) => user.username,
                    None => format!("#{}", message.user_id),
                };
                println!("[{}] <{}> {}", message.time_created, author, message);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbosity);

    if let Err(err) = run(args) {
        error!("{}", err.display_chain());
        process::exit(1);
    }
}

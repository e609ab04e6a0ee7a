pub mod connection_string;
pub mod migrations;
pub mod pool;

pub use connection_string::{
    normalize_connection_string, DatabaseConnection, NormalizedConnectionParams, SslMode,
};
pub use migrations::{EmbeddedMigrations, SchemaMigrator};
pub use pool::{connect_options, create_pool};

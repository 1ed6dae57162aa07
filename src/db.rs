use std::time::Duration;

use diesel::mysql::MysqlConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub type DbPool = Pool<ConnectionManager<MysqlConnection>>;

/// Build the pool without connecting. An unreachable store surfaces as an
/// error on the first checkout, not at startup.
pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<MysqlConnection>::new(database_url);
    Pool::builder()
        .max_size(4)
        .min_idle(Some(0))
        .connection_timeout(Duration::from_secs(5))
        .build_unchecked(manager)
}

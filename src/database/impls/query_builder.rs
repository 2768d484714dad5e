use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::query_builder::QueryBuilder;

impl QueryBuilder {
    pub fn new(engine: DatabaseDrivers) -> Self {
        Self { engine }
    }

    pub fn quote_identifier(&self, identifier: &str) -> String {
        match self.engine {
            DatabaseDrivers::memory | DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
            DatabaseDrivers::pgsql => identifier.to_string(),
        }
    }

    /// Rewrites `?` placeholders into `$1, $2, ..` for PostgreSQL.
    pub fn placeholders(&self, query: &str) -> String {
        match self.engine {
            DatabaseDrivers::pgsql => {
                let mut index = 0;
                let mut rewritten = String::with_capacity(query.len() + 8);
                for character in query.chars() {
                    if character == '?' {
                        index += 1;
                        rewritten.push_str(&format!("${index}"));
                    } else {
                        rewritten.push(character);
                    }
                }
                rewritten
            }
            _ => query.to_string(),
        }
    }

    pub fn upsert_conflict_clause(&self, conflict_columns: &[&str], update_columns: &[&str]) -> String {
        match self.engine {
            DatabaseDrivers::memory | DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => {
                let conflict: Vec<String> = conflict_columns.iter().map(|col| self.quote_identifier(col)).collect();
                let updates: Vec<String> = update_columns
                    .iter()
                    .map(|col| {
                        let quoted = self.quote_identifier(col);
                        format!("{}=excluded.{}", quoted, quoted)
                    })
                    .collect();
                format!("ON CONFLICT ({}) DO UPDATE SET {}", conflict.join(", "), updates.join(", "))
            }
            DatabaseDrivers::mysql => {
                let updates: Vec<String> = update_columns
                    .iter()
                    .map(|col| {
                        let quoted = self.quote_identifier(col);
                        format!("{}=VALUES({})", quoted, quoted)
                    })
                    .collect();
                format!("ON DUPLICATE KEY UPDATE {}", updates.join(", "))
            }
        }
    }

    pub fn random_function(&self) -> &'static str {
        match self.engine {
            DatabaseDrivers::mysql => "RAND()",
            _ => "RANDOM()",
        }
    }

    pub fn bigint_type(&self) -> &'static str {
        match self.engine {
            DatabaseDrivers::memory | DatabaseDrivers::sqlite3 => "INTEGER",
            DatabaseDrivers::mysql => "BIGINT",
            DatabaseDrivers::pgsql => "bigint",
        }
    }

    pub fn varchar_type(&self, size: usize) -> String {
        match self.engine {
            DatabaseDrivers::memory | DatabaseDrivers::sqlite3 => "TEXT".to_string(),
            DatabaseDrivers::mysql | DatabaseDrivers::pgsql => format!("VARCHAR({})", size),
        }
    }

    pub fn primary_key_type(&self) -> String {
        match self.engine {
            DatabaseDrivers::memory | DatabaseDrivers::sqlite3 => "INTEGER PRIMARY KEY".to_string(),
            DatabaseDrivers::mysql => "BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY".to_string(),
            DatabaseDrivers::pgsql => "bigserial PRIMARY KEY".to_string(),
        }
    }

    /// `CREATE TABLE` statements of the swarm schema.
    pub fn create_tables(&self) -> Vec<String> {
        let int = self.bigint_type();
        vec![
            format!(
                "CREATE TABLE IF NOT EXISTS {} ({} {}, {} {} NOT NULL, {} {})",
                self.quote_identifier("user_groups"),
                self.quote_identifier("id"), self.primary_key_type(),
                self.quote_identifier("slug"), self.varchar_type(64),
                self.quote_identifier("download_slots"), int
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS {} ({} {}, {} {} NOT NULL UNIQUE, {} {} NOT NULL, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 1, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0)",
                self.quote_identifier("users"),
                self.quote_identifier("id"), self.primary_key_type(),
                self.quote_identifier("passkey"), self.varchar_type(32),
                self.quote_identifier("group_id"), int,
                self.quote_identifier("active"), int,
                self.quote_identifier("can_download"), int,
                self.quote_identifier("uploaded"), int,
                self.quote_identifier("downloaded"), int
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS {} ({} {}, {} {} NOT NULL UNIQUE, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0)",
                self.quote_identifier("torrents"),
                self.quote_identifier("id"), self.primary_key_type(),
                self.quote_identifier("info_hash"), self.varchar_type(40),
                self.quote_identifier("status"), int,
                self.quote_identifier("free"), int,
                self.quote_identifier("doubleup"), int,
                self.quote_identifier("seeders"), int,
                self.quote_identifier("leechers"), int,
                self.quote_identifier("times_completed"), int
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS {} ({} {} NOT NULL, {} {} NOT NULL, {} {} NOT NULL, {} {}, {} {}, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL, {} {} NOT NULL, PRIMARY KEY ({}, {}, {}))",
                self.quote_identifier("peers"),
                self.quote_identifier("torrent_id"), int,
                self.quote_identifier("user_id"), int,
                self.quote_identifier("peer_id"), self.varchar_type(40),
                self.quote_identifier("ip"), self.varchar_type(64),
                self.quote_identifier("port"), int,
                self.quote_identifier("seeder"), int,
                self.quote_identifier("uploaded"), int,
                self.quote_identifier("downloaded"), int,
                self.quote_identifier("left_bytes"), int,
                self.quote_identifier("agent"), self.varchar_type(64),
                self.quote_identifier("updated_at"), int,
                self.quote_identifier("torrent_id"), self.quote_identifier("user_id"), self.quote_identifier("peer_id")
            ),
        ]
    }

    pub fn engine_name(&self) -> &'static str {
        match self.engine {
            DatabaseDrivers::memory => "Memory",
            DatabaseDrivers::sqlite3 => "SQLite",
            DatabaseDrivers::mysql => "MySQL",
            DatabaseDrivers::pgsql => "PgSQL",
        }
    }
}

use std::net::IpAddr;
use std::str::FromStr;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use log::info;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::Row;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::store_error::StoreError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::query_builder::QueryBuilder;
use crate::database::traits::swarm_store::SwarmStore;
use crate::tracker::enums::moderation_status::ModerationStatus;
use crate::tracker::structs::account::Account;
use crate::tracker::structs::group::Group;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent::Torrent;

const ACCOUNT_COLUMNS: &str = "id, passkey, group_id, active, can_download, uploaded, downloaded";
const TORRENT_COLUMNS: &str = "id, info_hash, status, free, doubleup, seeders, leechers, times_completed";
const PEER_COLUMNS: &str = "torrent_id, user_id, peer_id, ip, port, seeder, uploaded, downloaded, left_bytes, agent, updated_at";

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn get_u64(row: &AnyRow, column: &str) -> Result<u64, StoreError> {
    let value: i64 = row.try_get(column)?;
    u64::try_from(value).map_err(|_| StoreError::CorruptRecord(format!("negative value {value} in column {column}")))
}

fn get_bool(row: &AnyRow, column: &str) -> Result<bool, StoreError> {
    let value: i64 = row.try_get(column)?;
    Ok(value != 0)
}

fn account_from_row(row: &AnyRow) -> Result<Account, StoreError> {
    Ok(Account {
        id: get_u64(row, "id")?,
        passkey: row.try_get("passkey")?,
        group_id: get_u64(row, "group_id")?,
        active: get_bool(row, "active")?,
        can_download: get_bool(row, "can_download")?,
        uploaded: get_u64(row, "uploaded")?,
        downloaded: get_u64(row, "downloaded")?,
    })
}

fn torrent_from_row(row: &AnyRow) -> Result<Torrent, StoreError> {
    let info_hash: String = row.try_get("info_hash")?;
    let status: i64 = row.try_get("status")?;
    Ok(Torrent {
        id: get_u64(row, "id")?,
        info_hash: InfoHash::from_str(&info_hash)
            .map_err(|_| StoreError::CorruptRecord(format!("invalid info_hash {info_hash}")))?,
        status: ModerationStatus::from_i64(status)
            .ok_or_else(|| StoreError::CorruptRecord(format!("invalid moderation status {status}")))?,
        free: get_bool(row, "free")?,
        double_upload: get_bool(row, "doubleup")?,
        seeders: get_u64(row, "seeders")?,
        leechers: get_u64(row, "leechers")?,
        times_completed: get_u64(row, "times_completed")?,
    })
}

fn peer_from_row(row: &AnyRow) -> Result<PeerRecord, StoreError> {
    let peer_id: String = row.try_get("peer_id")?;
    let ip: Option<String> = row.try_get("ip")?;
    let port: Option<i64> = row.try_get("port")?;
    let updated_at: i64 = row.try_get("updated_at")?;
    Ok(PeerRecord {
        torrent_id: get_u64(row, "torrent_id")?,
        user_id: get_u64(row, "user_id")?,
        peer_id: PeerId::from_str(&peer_id)
            .map_err(|_| StoreError::CorruptRecord(format!("invalid peer_id {peer_id}")))?,
        ip: ip.and_then(|ip| IpAddr::from_str(&ip).ok()),
        port: port.and_then(|port| u16::try_from(port).ok()),
        seeder: get_bool(row, "seeder")?,
        uploaded: get_u64(row, "uploaded")?,
        downloaded: get_u64(row, "downloaded")?,
        left: get_u64(row, "left_bytes")?,
        agent: row.try_get("agent")?,
        updated_at: DateTime::<Utc>::from_timestamp(updated_at, 0).unwrap_or_default(),
    })
}

impl DatabaseConnector {
    /// Connects to the configured database, creating the schema when asked.
    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn new(config: &DatabaseConfig, create_database: bool) -> Result<DatabaseConnector, StoreError>
    {
        if config.engine == DatabaseDrivers::memory {
            return Err(StoreError::Unavailable(String::from("the memory engine has no database connection")));
        }
        sqlx::any::install_default_drivers();
        let pool = AnyPoolOptions::new().connect(config.path.as_str()).await?;
        let connector = DatabaseConnector {
            pool,
            query_builder: QueryBuilder::new(config.engine),
        };
        if create_database {
            connector.create_tables().await?;
        }
        Ok(connector)
    }

    pub async fn create_tables(&self) -> Result<(), StoreError>
    {
        info!("[BOOT] Database creation triggered for {}.", self.query_builder.engine_name());
        for query in self.query_builder.create_tables() {
            sqlx::query(&query).execute(&self.pool).await?;
        }
        info!("[BOOT {}] Created the swarm tables", self.query_builder.engine_name());
        Ok(())
    }

    fn sql(&self, query: &str) -> String
    {
        self.query_builder.placeholders(query)
    }

    async fn count(&self, query: &str, binds: &[i64]) -> Result<u64, StoreError>
    {
        let query = self.sql(query);
        let mut statement = sqlx::query(&query);
        for bind in binds {
            statement = statement.bind(*bind);
        }
        let row = statement.fetch_one(&self.pool).await?;
        get_u64(&row, "total")
    }
}

#[async_trait]
impl SwarmStore for DatabaseConnector {
    #[tracing::instrument(level = "debug", skip(self, passkey))]
    async fn find_account_by_passkey(&self, passkey: &str) -> Result<Option<Account>, StoreError>
    {
        let query = self.sql(&format!("SELECT {ACCOUNT_COLUMNS} FROM users WHERE passkey = ?"));
        match sqlx::query(&query).bind(passkey.to_string()).fetch_optional(&self.pool).await? {
            None => Ok(None),
            Some(row) => Ok(Some(account_from_row(&row)?)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_torrent_by_info_hash(&self, info_hash: &InfoHash) -> Result<Option<Torrent>, StoreError>
    {
        let query = self.sql(&format!("SELECT {TORRENT_COLUMNS} FROM torrents WHERE info_hash = ?"));
        match sqlx::query(&query).bind(info_hash.to_string()).fetch_optional(&self.pool).await? {
            None => Ok(None),
            Some(row) => Ok(Some(torrent_from_row(&row)?)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_peer(&self, torrent_id: u64, user_id: u64, peer_id: &PeerId) -> Result<Option<PeerRecord>, StoreError>
    {
        let query = self.sql(&format!("SELECT {PEER_COLUMNS} FROM peers WHERE torrent_id = ? AND user_id = ? AND peer_id = ?"));
        match sqlx::query(&query)
            .bind(to_i64(torrent_id))
            .bind(to_i64(user_id))
            .bind(peer_id.to_string())
            .fetch_optional(&self.pool)
            .await? {
            None => Ok(None),
            Some(row) => Ok(Some(peer_from_row(&row)?)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn peer_exists(&self, torrent_id: u64, user_id: u64, peer_id: &PeerId) -> Result<bool, StoreError>
    {
        let query = self.sql("SELECT COUNT(*) AS total FROM peers WHERE torrent_id = ? AND user_id = ? AND peer_id = ?");
        let row = sqlx::query(&query)
            .bind(to_i64(torrent_id))
            .bind(to_i64(user_id))
            .bind(peer_id.to_string())
            .fetch_one(&self.pool)
            .await?;
        Ok(get_u64(&row, "total")? > 0)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn count_user_torrent_peers(&self, torrent_id: u64, user_id: u64) -> Result<u64, StoreError>
    {
        self.count(
            "SELECT COUNT(*) AS total FROM peers WHERE torrent_id = ? AND user_id = ?",
            &[to_i64(torrent_id), to_i64(user_id)]
        ).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn count_user_leeching_peers(&self, user_id: u64, exclude_peer_id: &PeerId) -> Result<u64, StoreError>
    {
        let query = self.sql("SELECT COUNT(*) AS total FROM peers WHERE user_id = ? AND seeder = 0 AND peer_id <> ?");
        let row = sqlx::query(&query)
            .bind(to_i64(user_id))
            .bind(exclude_peer_id.to_string())
            .fetch_one(&self.pool)
            .await?;
        get_u64(&row, "total")
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_swarm_peers(&self, torrent_id: u64, exclude_user_id: u64, leechers_only: bool, limit: u64) -> Result<Vec<PeerRecord>, StoreError>
    {
        let seeder_filter = if leechers_only { " AND seeder = 0" } else { "" };
        let query = self.sql(&format!(
            "SELECT {PEER_COLUMNS} FROM peers WHERE torrent_id = ? AND user_id <> ?{seeder_filter} ORDER BY {} LIMIT ?",
            self.query_builder.random_function()
        ));
        let mut rows = sqlx::query(&query)
            .bind(to_i64(torrent_id))
            .bind(to_i64(exclude_user_id))
            .bind(to_i64(limit))
            .fetch(&self.pool);
        let mut peers = Vec::new();
        while let Some(row) = rows.try_next().await? {
            peers.push(peer_from_row(&row)?);
        }
        Ok(peers)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_groups(&self) -> Result<Vec<Group>, StoreError>
    {
        let rows = sqlx::query("SELECT id, slug, download_slots FROM user_groups")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(|row| {
            Ok(Group {
                id: get_u64(row, "id")?,
                slug: row.try_get("slug")?,
                download_slots: row.try_get("download_slots")?,
            })
        }).collect()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn upsert_peer(&self, peer: &PeerRecord) -> Result<(), StoreError>
    {
        let query = self.sql(&format!(
            "INSERT INTO peers ({PEER_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) {}",
            self.query_builder.upsert_conflict_clause(
                &["torrent_id", "user_id", "peer_id"],
                &["ip", "port", "seeder", "uploaded", "downloaded", "left_bytes", "agent", "updated_at"]
            )
        ));
        sqlx::query(&query)
            .bind(to_i64(peer.torrent_id))
            .bind(to_i64(peer.user_id))
            .bind(peer.peer_id.to_string())
            .bind(peer.ip.map(|ip| ip.to_string()))
            .bind(peer.port.map(i64::from))
            .bind(i64::from(peer.seeder))
            .bind(to_i64(peer.uploaded))
            .bind(to_i64(peer.downloaded))
            .bind(to_i64(peer.left))
            .bind(peer.agent.clone())
            .bind(peer.updated_at.timestamp())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn remove_peer(&self, torrent_id: u64, user_id: u64, peer_id: &PeerId) -> Result<bool, StoreError>
    {
        let query = self.sql("DELETE FROM peers WHERE torrent_id = ? AND user_id = ? AND peer_id = ?");
        let result = sqlx::query(&query)
            .bind(to_i64(torrent_id))
            .bind(to_i64(user_id))
            .bind(peer_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn credit_account(&self, user_id: u64, uploaded: u64, downloaded: u64) -> Result<(), StoreError>
    {
        let query = self.sql("UPDATE users SET uploaded = uploaded + ?, downloaded = downloaded + ? WHERE id = ?");
        sqlx::query(&query)
            .bind(to_i64(uploaded))
            .bind(to_i64(downloaded))
            .bind(to_i64(user_id))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn increment_completed(&self, torrent_id: u64) -> Result<(), StoreError>
    {
        let query = self.sql("UPDATE torrents SET times_completed = times_completed + 1 WHERE id = ?");
        sqlx::query(&query).bind(to_i64(torrent_id)).execute(&self.pool).await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn refresh_torrent_counters(&self, torrent_id: u64) -> Result<(u64, u64), StoreError>
    {
        let seeders = self.count(
            "SELECT COUNT(*) AS total FROM peers WHERE torrent_id = ? AND seeder = 1",
            &[to_i64(torrent_id)]
        ).await?;
        let leechers = self.count(
            "SELECT COUNT(*) AS total FROM peers WHERE torrent_id = ? AND seeder = 0",
            &[to_i64(torrent_id)]
        ).await?;
        let query = self.sql("UPDATE torrents SET seeders = ?, leechers = ? WHERE id = ?");
        sqlx::query(&query)
            .bind(to_i64(seeders))
            .bind(to_i64(leechers))
            .bind(to_i64(torrent_id))
            .execute(&self.pool)
            .await?;
        Ok((seeders, leechers))
    }
}

// SQLite persistence for generated players and small bits of app state.

use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use prospect_core::generator::{Batch, PositionBreakdown};
use prospect_core::player::{Hand, OriginType, PlayerRecord};
use prospect_core::sport::{Position, Sport};
use rusqlite::{params, Connection, Transaction};
use serde::{Deserialize, Serialize};

/// Summary of the most recent `generate` run, kept in `app_state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastBatch {
    pub batch_id: String,
    pub generated_at: String,
    pub seed: u32,
    pub requested: usize,
    pub breakdown: PositionBreakdown,
}

/// SQLite-backed store for the accumulated player collection.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) a SQLite database at `path` and ensure all tables
    /// exist. Pass `":memory:"` for an ephemeral in-memory database (useful
    /// for tests).
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {path}"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .context("failed to set database pragmas")?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS players (
                id             TEXT PRIMARY KEY,
                sort_order     INTEGER NOT NULL,
                name           TEXT NOT NULL,
                name_key       TEXT NOT NULL UNIQUE,
                sport          TEXT NOT NULL,
                position       TEXT NOT NULL,
                archetype      TEXT NOT NULL,
                height_inches  INTEGER NOT NULL,
                weight_pounds  INTEGER NOT NULL,
                age            INTEGER NOT NULL,
                dominant_hand  TEXT NOT NULL,
                jersey_number  INTEGER NOT NULL,
                origin_type    TEXT NOT NULL,
                origin_value   TEXT NOT NULL,
                batch_id       TEXT NOT NULL,
                created_at     TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_players_sort_order ON players(sort_order);

            CREATE TABLE IF NOT EXISTS app_state (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )
        .context("failed to create database schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the connection lock.
    ///
    /// Panics if the mutex is poisoned (another thread panicked while
    /// holding the lock). This should never happen in normal operation.
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("database mutex poisoned")
    }

    // ------------------------------------------------------------------
    // Players
    // ------------------------------------------------------------------

    /// Every stored player, newest batch first and generation order within a
    /// batch.
    pub fn load_players(&self) -> Result<Vec<PlayerRecord>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare(
                "SELECT id, name, sport, position, archetype, height_inches, weight_pounds,
                        age, dominant_hand, jersey_number, origin_type, origin_value
                 FROM players ORDER BY sort_order",
            )
            .context("failed to prepare load_players query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StoredPlayer {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    sport: row.get(2)?,
                    position: row.get(3)?,
                    archetype: row.get(4)?,
                    height_inches: row.get(5)?,
                    weight_pounds: row.get(6)?,
                    age: row.get(7)?,
                    dominant_hand: row.get(8)?,
                    jersey_number: row.get(9)?,
                    origin_type: row.get(10)?,
                    origin_value: row.get(11)?,
                })
            })
            .context("failed to query players")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("failed to map player rows")?;

        rows.into_iter().map(StoredPlayer::into_record).collect()
    }

    /// Drop the stored collection and store `players` in its place.
    pub fn replace_players(&self, players: &[PlayerRecord], batch_id: &str) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction().context("failed to begin transaction")?;
        tx.execute("DELETE FROM players", [])
            .context("failed to delete players")?;
        insert_players(&tx, players, 0, batch_id)?;
        tx.commit().context("failed to commit replace_players")?;
        Ok(())
    }

    /// Store `players` ahead of the existing collection, keeping their order.
    pub fn prepend_players(&self, players: &[PlayerRecord], batch_id: &str) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction().context("failed to begin transaction")?;
        let first: Option<i64> = tx
            .query_row("SELECT MIN(sort_order) FROM players", [], |row| row.get(0))
            .context("failed to read first sort order")?;
        let start = first.unwrap_or(0) - players.len() as i64;
        insert_players(&tx, players, start, batch_id)?;
        tx.commit().context("failed to commit prepend_players")?;
        Ok(())
    }

    /// Remove every stored player. App state is kept.
    pub fn clear_players(&self) -> Result<usize> {
        let conn = self.conn();
        let removed = conn
            .execute("DELETE FROM players", [])
            .context("failed to clear players")?;
        Ok(removed)
    }

    pub fn player_count(&self) -> Result<usize> {
        let conn = self.conn();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
            .context("failed to count players")?;
        Ok(count as usize)
    }

    // ------------------------------------------------------------------
    // Key-value state
    // ------------------------------------------------------------------

    /// Persist an arbitrary JSON value under `key`. Uses INSERT OR REPLACE so
    /// repeated saves overwrite the previous value.
    pub fn save_state(&self, key: &str, value: &serde_json::Value) -> Result<()> {
        let conn = self.conn();
        let json_str = serde_json::to_string(value).context("failed to serialize state value")?;
        conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
            params![key, json_str],
        )
        .context("failed to save state")?;
        Ok(())
    }

    /// Load a previously saved JSON value by `key`. Returns `None` if the key
    /// does not exist.
    pub fn load_state(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT value FROM app_state WHERE key = ?1")
            .context("failed to prepare load_state query")?;

        let mut rows = stmt
            .query_map(params![key], |row| row.get::<_, String>(0))
            .context("failed to query app state")?;

        match rows.next() {
            Some(row_result) => {
                let json_str = row_result.context("failed to read state row")?;
                let value = serde_json::from_str(&json_str)
                    .context("failed to deserialize state value")?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    const LAST_BATCH_KEY: &'static str = "last_batch";

    pub fn save_last_batch(&self, last: &LastBatch) -> Result<()> {
        let value = serde_json::to_value(last).context("failed to serialize last batch")?;
        self.save_state(Self::LAST_BATCH_KEY, &value)
    }

    pub fn load_last_batch(&self) -> Result<Option<LastBatch>> {
        self.load_state(Self::LAST_BATCH_KEY)?
            .map(|v| serde_json::from_value(v).context("failed to decode last batch"))
            .transpose()
    }

    /// Generate a batch ID from the current UTC time.
    ///
    /// Format: `batch_YYYYMMDD_HHMMSS_SSS` (e.g. `batch_20260228_143022_123`).
    pub fn generate_batch_id() -> String {
        chrono::Utc::now().format("batch_%Y%m%d_%H%M%S_%3f").to_string()
    }

    /// Store a generated batch and its summary in one call. `replace` drops
    /// the existing collection first; otherwise the batch goes in front.
    pub fn commit_batch(&self, batch: &Batch, replace: bool) -> Result<LastBatch> {
        let batch_id = Self::generate_batch_id();
        if replace {
            self.replace_players(&batch.players, &batch_id)?;
        } else {
            self.prepend_players(&batch.players, &batch_id)?;
        }
        let last = LastBatch {
            batch_id,
            generated_at: chrono::Utc::now().to_rfc3339(),
            seed: batch.seed,
            requested: batch.requested,
            breakdown: batch.breakdown.clone(),
        };
        self.save_last_batch(&last)?;
        Ok(last)
    }
}

fn insert_players(
    tx: &Transaction<'_>,
    players: &[PlayerRecord],
    start: i64,
    batch_id: &str,
) -> Result<()> {
    let created_at = chrono::Utc::now().to_rfc3339();
    let mut stmt = tx
        .prepare(
            "INSERT INTO players
                (id, sort_order, name, name_key, sport, position, archetype, height_inches,
                 weight_pounds, age, dominant_hand, jersey_number, origin_type, origin_value,
                 batch_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
        )
        .context("failed to prepare player insert")?;

    for (i, p) in players.iter().enumerate() {
        stmt.execute(params![
            p.id,
            start + i as i64,
            p.name,
            p.name_key(),
            p.sport.code(),
            p.position.code(),
            p.archetype_label,
            p.height_inches,
            p.weight_pounds,
            p.age,
            p.dominant_hand.as_str(),
            p.jersey_number,
            p.origin_type.as_str(),
            p.origin_value,
            batch_id,
            created_at,
        ])
        .with_context(|| format!("failed to insert player {}", p.name))?;
    }
    Ok(())
}

/// Raw column values of one `players` row.
struct StoredPlayer {
    id: String,
    name: String,
    sport: String,
    position: String,
    archetype: String,
    height_inches: i32,
    weight_pounds: i32,
    age: i32,
    dominant_hand: String,
    jersey_number: i32,
    origin_type: String,
    origin_value: String,
}

impl StoredPlayer {
    fn into_record(self) -> Result<PlayerRecord> {
        let sport: Sport = self
            .sport
            .parse()
            .with_context(|| format!("bad sport stored for {}", self.name))?;
        let position: Position = self
            .position
            .parse()
            .with_context(|| format!("bad position stored for {}", self.name))?;
        let dominant_hand = match self.dominant_hand.as_str() {
            "Right" => Hand::Right,
            "Left" => Hand::Left,
            other => return Err(anyhow!("bad hand `{other}` stored for {}", self.name)),
        };
        let origin_type = match self.origin_type.as_str() {
            "college" => OriginType::College,
            "country" => OriginType::Country,
            other => return Err(anyhow!("bad origin type `{other}` stored for {}", self.name)),
        };
        Ok(PlayerRecord {
            id: self.id,
            name: self.name,
            sport,
            position,
            archetype_label: self.archetype,
            height_inches: self.height_inches,
            weight_pounds: self.weight_pounds,
            age: self.age,
            dominant_hand,
            jersey_number: self.jersey_number,
            origin_type,
            origin_value: self.origin_value,
        })
    }
}

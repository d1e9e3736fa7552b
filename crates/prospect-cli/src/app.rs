// Command runner: wires config, reference data, the engine and the store.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use prospect_core::data::ReferenceData;
use prospect_core::generator::{Batch, BatchGenerator};
use tracing::{info, warn};

use crate::cli::{Command, ExportArgs, GenerateArgs};
use crate::config::{self, Config};
use crate::db::Database;
use crate::export::{self, to_text};

pub struct App {
    pub config: Config,
    pub data: ReferenceData,
    pub db: Database,
}

impl App {
    /// Load config from `base_dir` (copying defaults on first run), load the
    /// reference tables and open the store. `db_override` replaces
    /// `storage.db_path`.
    pub fn open(base_dir: &Path, db_override: Option<&str>) -> Result<Self> {
        let config = config::load_config_in(base_dir).context("failed to load configuration")?;
        let data = config::load_reference_data(&config).context("failed to load reference data")?;
        let db_path = resolve_db_path(base_dir, db_override.unwrap_or(&config.db_path));
        let db = Database::open(&db_path).context("failed to open database")?;
        info!(db_path = %db_path, "Store opened");
        Ok(Self { config, data, db })
    }

    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        match command {
            Command::Generate(args) => self.generate(args, out).map(|_| ()),
            Command::List => self.list(out),
            Command::Export(args) => self.export(args, out),
            Command::Clear => self.clear(out),
            Command::Last => self.last(out),
        }
    }

    /// Generate with file defaults overridden by `args`, commit, and print
    /// the new records followed by the breakdown line.
    pub fn generate<W: Write>(&self, args: &GenerateArgs, out: &mut W) -> Result<Batch> {
        let mut defaults = self.config.defaults.clone();
        args.apply(&mut defaults);
        config::validate_defaults(&defaults).context("invalid generation options")?;
        let gen_config = defaults
            .to_generation_config()
            .context("invalid generation options")?;

        let existing = if args.clear_before {
            Vec::new()
        } else {
            self.db.load_players()?
        };
        let batch = BatchGenerator::new(&self.data).generate(&gen_config, &existing);
        let last = self.db.commit_batch(&batch, args.clear_before)?;
        info!(
            batch_id = %last.batch_id,
            produced = batch.players.len(),
            replaced = args.clear_before,
            "Batch committed"
        );

        write!(out, "{}", to_text(&batch.players))?;
        writeln!(out, "{}", batch.breakdown.summary_line())?;
        if batch.is_short() {
            warn!(requested = batch.requested, produced = batch.players.len(), "Short batch");
            writeln!(
                out,
                "Only {} of {} players generated: name combinations ran out.",
                batch.players.len(),
                batch.requested
            )?;
        }
        match &gen_config.seed {
            Some(text) => writeln!(out, "Seed: {text} ({})", batch.seed)?,
            None => writeln!(out, "Seed: {}", batch.seed)?,
        }
        Ok(batch)
    }

    pub fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        let players = self.db.load_players()?;
        if players.is_empty() {
            writeln!(out, "No players stored.")?;
            return Ok(());
        }
        write!(out, "{}", to_text(&players))?;
        writeln!(out, "{} players", players.len())?;
        Ok(())
    }

    pub fn export<W: Write>(&self, args: &ExportArgs, out: &mut W) -> Result<()> {
        let players = self.db.load_players()?;
        match &args.output {
            Some(path) => {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                export::export(&players, args.format, std::io::BufWriter::new(file))?;
                info!(path = %path.display(), count = players.len(), "Exported players");
                writeln!(out, "Exported {} players to {}", players.len(), path.display())?;
            }
            None => export::export(&players, args.format, out)?,
        }
        Ok(())
    }

    pub fn clear<W: Write>(&self, out: &mut W) -> Result<()> {
        let removed = self.db.clear_players()?;
        info!(removed, "Cleared stored players");
        writeln!(out, "Removed {removed} players.")?;
        Ok(())
    }

    pub fn last<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.db.load_last_batch()? {
            Some(last) => {
                writeln!(out, "{}", last.breakdown.summary_line())?;
                writeln!(out, "Generated {} (seed {})", last.generated_at, last.seed)?;
            }
            None => writeln!(out, "No batch generated yet.")?,
        }
        Ok(())
    }
}

/// Relative database paths live under the base directory; `:memory:` is
/// passed through.
fn resolve_db_path(base_dir: &Path, db_path: &str) -> String {
    if db_path == ":memory:" {
        return db_path.to_string();
    }
    let path = PathBuf::from(db_path);
    if path.is_absolute() {
        db_path.to_string()
    } else {
        base_dir.join(path).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_path_resolution() {
        let base = Path::new("/srv/prospect");
        assert_eq!(resolve_db_path(base, ":memory:"), ":memory:");
        assert_eq!(resolve_db_path(base, "/tmp/x.db"), "/tmp/x.db");
        assert_eq!(resolve_db_path(base, "x.db"), "/srv/prospect/x.db");
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::{Rng, seq::IndexedRandom as _};
use typedex_engine::{BundleCatalog, CreatureRecord};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DataArg {
    /// Held-out test records (JSON array)
    #[arg(long, global = true, default_value = "data/test_set.json")]
    test_data: PathBuf,
    /// Training pool records (JSON array)
    #[arg(long, global = true, default_value = "data/training_pool.json")]
    training_data: PathBuf,
}

impl DataArg {
    /// Loads both data files; any failure is fatal for the run.
    pub(crate) fn load(&self) -> anyhow::Result<GameData> {
        let test_set = load_records("test set", &self.test_data)?;
        let pool = load_records("training pool", &self.training_data)?;
        let catalog = BundleCatalog::from_pool(&pool).with_context(|| {
            format!(
                "Failed to build bundles from {}",
                self.training_data.display()
            )
        })?;
        eprintln!(
            "Loaded {} test records and {} training records",
            test_set.len(),
            pool.len()
        );
        Ok(GameData {
            test_set,
            pool,
            catalog,
        })
    }
}

fn load_records(file_kind: &str, path: &Path) -> anyhow::Result<Vec<CreatureRecord>> {
    let records: Vec<CreatureRecord> = util::read_json_file(file_kind, path)?;
    for record in &records {
        record
            .validate()
            .with_context(|| format!("Invalid {} file: {}", file_kind, path.display()))?;
    }
    Ok(records)
}

#[derive(Debug)]
pub(crate) struct GameData {
    pub(crate) test_set: Vec<CreatureRecord>,
    pub(crate) pool: Vec<CreatureRecord>,
    pub(crate) catalog: BundleCatalog,
}

impl GameData {
    /// Finds a test record by name, or picks one at random.
    pub(crate) fn pick_test_record<R>(
        &self,
        name: Option<&str>,
        rng: &mut R,
    ) -> anyhow::Result<&CreatureRecord>
    where
        R: Rng + ?Sized,
    {
        match name {
            Some(name) => self
                .test_set
                .iter()
                .find(|record| record.name().eq_ignore_ascii_case(name))
                .with_context(|| format!("No test record named '{name}'")),
            None => self.test_set.choose(rng).context("Test set is empty"),
        }
    }
}

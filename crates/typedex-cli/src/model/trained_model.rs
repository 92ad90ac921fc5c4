use std::{collections::BTreeMap, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typedex_engine::{BundleId, CreatureClass, WeightTable};

use crate::util;

/// Weight table exported by `typedex train`, with where it came from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainedModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub bundles: Vec<BundleId>,
    pub class_counts: BTreeMap<CreatureClass, usize>,
    pub weights: WeightTable,
}

impl TrainedModel {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        util::read_json_file("trained model", path)
    }
}

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::Utc;
use typedex_engine::{BundleCatalog, BundleId, ClassMap, CreatureClass, Session};
use typedex_evaluator::{accuracy, weighted_scorer::WeightedScorer};
use typedex_training::trainer;

use crate::{
    data::GameData,
    model::trained_model::TrainedModel,
    util::{Output, eprint_weight_table, percent},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Bundle to train on (1-9, up to 4)
    #[arg(long = "bundle", required = true)]
    bundles: Vec<BundleId>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Selects each bundle in the session, rejecting repeated ids.
pub(crate) fn select_bundles(
    session: &mut Session,
    catalog: &BundleCatalog,
    ids: &[BundleId],
) -> anyhow::Result<()> {
    for id in ids {
        let change = session
            .toggle_bundle(catalog, *id)
            .with_context(|| format!("Failed to select bundle {id}"))?;
        if change.is_deselected() {
            bail!("Bundle {id} was given more than once");
        }
    }
    Ok(())
}

/// Trains the session's weights from its selection and returns the per-class counts.
pub(crate) fn train_session(
    session: &mut Session,
    catalog: &BundleCatalog,
) -> anyhow::Result<ClassMap<usize>> {
    let mut class_counts = ClassMap::default();
    session.train_with(|selection| -> anyhow::Result<_> {
        let outcome = trainer::train_selection(catalog, selection)?;
        eprintln!("Trained on {} records", outcome.record_count);
        class_counts = outcome.class_counts;
        Ok(outcome.weights)
    })?;
    Ok(class_counts)
}

pub(crate) fn run(arg: &TrainArg, data: &GameData, session: &mut Session) -> anyhow::Result<()> {
    let TrainArg { bundles, output } = arg;
    select_bundles(session, &data.catalog, bundles)?;

    let names = session
        .selection()
        .ids()
        .iter()
        .filter_map(|id| data.catalog.get(*id))
        .map(|bundle| bundle.name())
        .collect::<Vec<_>>();
    eprintln!("Selected bundles: {}", names.join(", "));

    let class_counts = train_session(session, &data.catalog)?;
    for class in CreatureClass::ALL {
        eprintln!("  {:<7} {:>3} records", class.to_string(), class_counts[class]);
    }

    let weights = session.weights()?.clone();
    eprintln!("Learned weights:");
    eprint_weight_table(&weights);

    let scorer = WeightedScorer::new(weights.clone());
    let report = accuracy::evaluate_multi_class(&scorer, &data.test_set, session.rng_mut());
    eprintln!("Test accuracy:");
    for class in CreatureClass::ALL {
        eprintln!(
            "  {:<7} {:>3} / {:<3} ({})",
            class.to_string(),
            report.correct[class],
            report.totals[class],
            percent(report.class_accuracy(class))
        );
    }
    eprintln!(
        "  Overall {:>3} / {:<3} ({})",
        report.correct_total(),
        report.total(),
        percent(report.accuracy())
    );

    let model = TrainedModel {
        name: names.join(" + "),
        trained_at: Utc::now(),
        bundles: session.selection().ids().to_vec(),
        class_counts: class_counts.iter().map(|(class, n)| (class, *n)).collect(),
        weights,
    };
    Output::save_json(&model, output.clone())?;

    eprintln!();
    eprintln!("Model saved successfully");
    if let Some(path) = output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Name: {}", model.name);
    eprintln!("  Trained at: {}", model.trained_at);
    eprintln!("  Bundles: {}", model.bundles.len());

    Ok(())
}

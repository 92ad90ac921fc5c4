use std::path::PathBuf;

use typedex_engine::{BundleId, Session};
use typedex_evaluator::{prediction::ClassPredictor as _, weighted_scorer::WeightedScorer};

use crate::{
    command::train::{select_bundles, train_session},
    data::GameData,
    model::trained_model::TrainedModel,
    util::{eprint_weight_table, format_values, percent},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PredictArg {
    /// Bundle to train on before predicting (1-9, up to 4)
    #[arg(long = "bundle", required_unless_present = "model", conflicts_with = "model")]
    bundles: Vec<BundleId>,
    /// Trained model file written by `typedex train`
    #[arg(long)]
    model: Option<PathBuf>,
    /// Name of the test record to score (random if omitted)
    #[arg(long)]
    name: Option<String>,
}

pub(crate) fn run(arg: &PredictArg, data: &GameData, session: &mut Session) -> anyhow::Result<()> {
    let weights = match &arg.model {
        Some(path) => {
            let model = TrainedModel::open(path)?;
            eprintln!(
                "Loaded model '{}' trained at {}",
                model.name, model.trained_at
            );
            model.weights
        }
        None => {
            select_bundles(session, &data.catalog, &arg.bundles)?;
            train_session(session, &data.catalog)?;
            session.weights()?.clone()
        }
    };
    eprintln!("Weights:");
    eprint_weight_table(&weights);

    let scorer = WeightedScorer::new(weights);
    let record = data.pick_test_record(arg.name.as_deref(), session.rng_mut())?;
    println!("Mystery creature: {}", record.name());
    println!("  {}", format_values(record));
    println!();

    for (rank, entry) in scorer.leaderboard(record).iter().enumerate() {
        println!(
            "  {}. {:<7} score {:>4}  confidence {:>6}",
            rank + 1,
            entry.class.to_string(),
            entry.score,
            percent(entry.confidence)
        );
    }

    let prediction = scorer.predict(record, session.rng_mut());
    let verdict = if prediction.class == record.class() {
        "correct"
    } else {
        "wrong"
    };
    println!();
    println!(
        "Predicted {} (actual {}): {verdict}",
        prediction.class,
        record.class()
    );
    Ok(())
}

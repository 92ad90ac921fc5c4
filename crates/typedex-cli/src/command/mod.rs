use clap::{Parser, Subcommand};
use typedex_engine::{Session, SessionSeed};

use crate::data::DataArg;

use self::{
    mystery::{MysteryMultiArg, MysteryRulesArg},
    predict::PredictArg,
    test_multi::TestMultiArg,
    test_rules::TestRulesArg,
    train::TrainArg,
};

mod bundles;
mod mystery;
mod predict;
mod purity_quiz;
mod test_multi;
mod test_rules;
mod train;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    data: DataArg,
    /// Seed for tie-breaks and random record picks (32 hex characters)
    #[arg(long, global = true)]
    seed: Option<SessionSeed>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Test a single-class rule list against the whole test set
    TestRules(#[clap(flatten)] TestRulesArg),
    /// Test one rule list per class against the whole test set
    TestMulti(#[clap(flatten)] TestMultiArg),
    /// List the training data bundles
    Bundles,
    /// Learn weights from selected bundles and export them as JSON
    Train(#[clap(flatten)] TrainArg),
    /// Score one test record with learned weights
    Predict(#[clap(flatten)] PredictArg),
    /// Check a single-class rule list against one test record
    MysteryRules(#[clap(flatten)] MysteryRulesArg),
    /// Check per-class rule lists against one test record
    MysteryMulti(#[clap(flatten)] MysteryMultiArg),
    /// Spot the clean package for every class
    PurityQuiz,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let data = args.data.load()?;
    let mut session = match args.seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    };
    eprintln!("Session seed: {}", session.seed());

    match &args.mode {
        Mode::TestRules(arg) => test_rules::run(arg, &data, &mut session)?,
        Mode::TestMulti(arg) => test_multi::run(arg, &data, &mut session)?,
        Mode::Bundles => bundles::run(&data),
        Mode::Train(arg) => train::run(arg, &data, &mut session)?,
        Mode::Predict(arg) => predict::run(arg, &data, &mut session)?,
        Mode::MysteryRules(arg) => mystery::run_rules(arg, &data, &mut session)?,
        Mode::MysteryMulti(arg) => mystery::run_multi(arg, &data, &mut session)?,
        Mode::PurityQuiz => purity_quiz::run(&data, &mut session)?,
    }
    Ok(())
}

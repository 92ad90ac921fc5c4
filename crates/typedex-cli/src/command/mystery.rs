use typedex_engine::{CreatureClass, Session};
use typedex_evaluator::prediction::ClassPredictor as _;

use crate::{
    command::{test_multi::TestMultiArg, test_rules::TestRulesArg},
    data::GameData,
    util::format_values,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MysteryRulesArg {
    #[clap(flatten)]
    rules: TestRulesArg,
    /// Name of the test record to check (random if omitted)
    #[arg(long)]
    name: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MysteryMultiArg {
    #[clap(flatten)]
    rules: TestMultiArg,
    /// Name of the test record to check (random if omitted)
    #[arg(long)]
    name: Option<String>,
}

fn verdict(correct: bool) -> &'static str {
    if correct { "correct" } else { "wrong" }
}

pub(crate) fn run_rules(
    arg: &MysteryRulesArg,
    data: &GameData,
    session: &mut Session,
) -> anyhow::Result<()> {
    let evaluator = arg.rules.evaluator(session)?;
    let record = data.pick_test_record(arg.name.as_deref(), session.rng_mut())?;
    println!("Mystery creature: {}", record.name());
    println!("  {}", format_values(record));
    println!();

    for check in evaluator.trace(record) {
        println!(
            "  {:<14} {} = {} -> {} : {}",
            check.rule.phrase(),
            check.rule.feature,
            check.raw_value,
            check.binary_value,
            if check.matched { "pass" } else { "fail" }
        );
    }

    let target = evaluator.target();
    let member = evaluator.matches(record);
    println!();
    println!(
        "Predicted {}{target} (actual {}): {}",
        if member { "" } else { "not " },
        record.class(),
        verdict(evaluator.is_correct(record))
    );
    Ok(())
}

pub(crate) fn run_multi(
    arg: &MysteryMultiArg,
    data: &GameData,
    session: &mut Session,
) -> anyhow::Result<()> {
    let scorer = arg.rules.scorer(session)?;
    let record = data.pick_test_record(arg.name.as_deref(), session.rng_mut())?;
    println!("Mystery creature: {}", record.name());
    println!("  {}", format_values(record));
    println!();

    let prediction = scorer.predict(record, session.rng_mut());
    for class in CreatureClass::ALL {
        println!(
            "  {:<7} {} points",
            class.to_string(),
            prediction.scores[class]
        );
    }
    println!();
    println!(
        "Predicted {} with {} points (actual {}): {}",
        prediction.class,
        prediction.score,
        record.class(),
        verdict(prediction.class == record.class())
    );
    Ok(())
}

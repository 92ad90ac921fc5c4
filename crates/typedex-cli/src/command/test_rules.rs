use anyhow::Context;
use typedex_engine::{CreatureClass, Rule, Session};
use typedex_evaluator::{accuracy, rule_evaluator::SingleClassEvaluator};

use crate::{data::GameData, util::percent};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TestRulesArg {
    /// Class the rules should recognize
    #[arg(long)]
    pub(crate) target: CreatureClass,
    /// Rule in slot order, e.g. `Attack=high` (up to 4, one feature each)
    #[arg(long = "rule")]
    pub(crate) rules: Vec<Rule>,
}

impl TestRulesArg {
    /// Places the rules in the session's single-class list and builds an evaluator.
    pub(crate) fn evaluator(&self, session: &mut Session) -> anyhow::Result<SingleClassEvaluator> {
        for (slot, rule) in self.rules.iter().enumerate() {
            session
                .place_single_rule(slot, *rule)
                .with_context(|| format!("Failed to place rule {rule} in slot {slot}"))?;
        }
        let evaluator = SingleClassEvaluator::new(session.single_rules(), self.target)?;
        Ok(evaluator)
    }
}

pub(crate) fn run(
    arg: &TestRulesArg,
    data: &GameData,
    session: &mut Session,
) -> anyhow::Result<()> {
    let evaluator = arg.evaluator(session)?;
    eprintln!("Testing rules for {}:", arg.target);
    for (slot, rule) in evaluator.rules().rules().iter().enumerate() {
        eprintln!("  {}: {} ({rule})", slot + 1, rule.phrase());
    }

    let report = accuracy::evaluate_single_class(&evaluator, arg.target, &data.test_set);
    println!(
        "{} recognized:      {:>3} / {:<3}",
        arg.target, report.target_correct, report.target_total
    );
    println!(
        "Others rejected:    {:>3} / {:<3}",
        report.non_target_correct, report.non_target_total
    );
    println!(
        "Accuracy:           {} ({} / {})",
        percent(report.accuracy()),
        report.correct(),
        report.total()
    );
    Ok(())
}

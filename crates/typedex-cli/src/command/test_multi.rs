use std::str::FromStr;

use anyhow::Context;
use typedex_engine::{CreatureClass, Rule, Session};
use typedex_evaluator::{accuracy, rule_scorer::RuleScorer};

use crate::{data::GameData, util::percent};

/// A rule for one class, written `<class>:<Feature>=<high|low>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClassRule {
    class: CreatureClass,
    rule: Rule,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid class rule '{input}': expected '<class>:<Feature>=<high|low>'")]
pub(crate) struct ClassRuleParseError {
    input: String,
}

impl FromStr for ClassRule {
    type Err = ClassRuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ClassRuleParseError {
            input: s.to_owned(),
        };
        let (class, rule) = s.split_once(':').ok_or_else(err)?;
        Ok(Self {
            class: class.trim().parse().map_err(|_| err())?,
            rule: rule.parse().map_err(|_| err())?,
        })
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TestMultiArg {
    /// Rule for a class, e.g. `water:HabitatAltitude=low`; repeat in slot order
    #[arg(long = "rule")]
    pub(crate) rules: Vec<ClassRule>,
}

impl TestMultiArg {
    /// Places the rules in the session's per-class lists and builds a scorer.
    pub(crate) fn scorer(&self, session: &mut Session) -> anyhow::Result<RuleScorer> {
        for ClassRule { class, rule } in &self.rules {
            let slot = session.class_rules()[*class].len();
            session
                .place_class_rule(*class, slot, *rule)
                .with_context(|| format!("Failed to place rule {rule} for {class}"))?;
        }
        Ok(RuleScorer::new(session.class_rules().clone()))
    }
}

pub(crate) fn run(
    arg: &TestMultiArg,
    data: &GameData,
    session: &mut Session,
) -> anyhow::Result<()> {
    let scorer = arg.scorer(session)?;
    for (class, rules) in scorer.rules().iter() {
        let phrases = rules
            .rules()
            .iter()
            .map(|rule| rule.phrase())
            .collect::<Vec<_>>();
        eprintln!("  {:<7} {}", class.to_string(), phrases.join(" > "));
    }

    let report = accuracy::evaluate_multi_class(&scorer, &data.test_set, session.rng_mut());
    for class in CreatureClass::ALL {
        println!(
            "{:<7} {:>3} / {:<3} ({})",
            class.to_string(),
            report.correct[class],
            report.totals[class],
            percent(report.class_accuracy(class))
        );
    }
    println!(
        "Overall {:>3} / {:<3} ({})",
        report.correct_total(),
        report.total(),
        percent(report.accuracy())
    );
    Ok(())
}

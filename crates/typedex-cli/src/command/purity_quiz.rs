use std::io::{self, BufRead as _, Write as _};

use anyhow::{Context, bail};
use typedex_engine::{AnswerOutcome, CreatureRecord, PackageSide, PurityChallenge, Session};

use crate::{data::GameData, util::format_values};

fn print_package(side: PackageSide, records: &[CreatureRecord]) {
    println!("Package {side}:");
    for record in records {
        println!("  {:<12} {}", record.base_name(), format_values(record));
    }
}

fn parse_side(input: &str) -> Option<PackageSide> {
    match input.trim() {
        "a" | "A" => Some(PackageSide::A),
        "b" | "B" => Some(PackageSide::B),
        _ => None,
    }
}

pub(crate) fn run(data: &GameData, session: &mut Session) -> anyhow::Result<()> {
    let mut lines = io::stdin().lock().lines();
    let mut challenge = PurityChallenge::new();
    let mut mistakes = 0;

    while let Some(class) = challenge.current_class() {
        let step = challenge.completed_steps() + 1;
        let pair = challenge.deal(&data.pool, session.rng_mut())?;
        println!();
        println!("Step {step}: which {class} package holds the clean samples?");
        print_package(PackageSide::A, pair.package(PackageSide::A));
        print_package(PackageSide::B, pair.package(PackageSide::B));

        loop {
            print!("Clean package (A/B): ");
            io::stdout().flush().context("Failed to flush stdout")?;
            let Some(line) = lines.next() else {
                bail!("Input ended before the quiz was finished");
            };
            let line = line.context("Failed to read answer")?;
            let Some(side) = parse_side(&line) else {
                println!("Please answer A or B.");
                continue;
            };
            match challenge.answer(side)? {
                AnswerOutcome::Correct { completed } => {
                    println!("Correct!");
                    if completed {
                        println!();
                        println!("All classes done with {mistakes} wrong picks.");
                    }
                    break;
                }
                AnswerOutcome::Incorrect => {
                    mistakes += 1;
                    println!("Not that one. Look for values that contradict the class.");
                }
            }
        }
    }
    Ok(())
}

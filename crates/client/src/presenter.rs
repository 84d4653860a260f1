//! Console rendering of raid guides.

use std::fmt::Write as _;

use async_trait::async_trait;
use raid_core::{PlanView, StepStatus, WorkerKind};
use raid_runtime::{Presenter, SessionOutcome};

const GUIDE_TITLE: &str = "Raid guide";
const ARROW: &str = " ➜ ";
const POWER_ICON: &str = "⚡";

/// Display label per worker kind.
const LABELS: [(WorkerKind, &str); 7] = [
    (WorkerKind::Useless, "Useless"),
    (WorkerKind::Deficient, "Deficient"),
    (WorkerKind::Common, "Common"),
    (WorkerKind::Talented, "Talented"),
    (WorkerKind::Wise, "Wise"),
    (WorkerKind::Expert, "Expert"),
    (WorkerKind::Masterful, "Masterful"),
];

pub fn label(kind: WorkerKind) -> &'static str {
    LABELS
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map_or("Unknown", |(_, label)| label)
}

/// Prints guides to stdout.
#[derive(Clone, Debug, Default)]
pub struct ConsolePresenter {
    compact: bool,
}

impl ConsolePresenter {
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }

    pub fn render_plan(&self, plan: &PlanView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{GUIDE_TITLE}");
        let _ = writeln!(out, "{}", guide_line(plan));
        let _ = writeln!(out, "You can kill {} farms.", plan.kill_count);

        if !self.compact {
            let _ = writeln!(out, "\nYour top workers");
            for attacker in plan.attackers.iter().rev() {
                let _ = writeln!(
                    out,
                    "{} - {} {POWER_ICON}",
                    label(attacker.kind),
                    format_power(attacker.power)
                );
            }

            let _ = writeln!(out, "\nEnemy farms");
            for defender in &plan.defenders {
                let _ = writeln!(
                    out,
                    "{} - {} {POWER_ICON}",
                    label(defender.kind),
                    format_power(defender.power)
                );
            }
        }

        out
    }

    pub fn render_outcome(&self, outcome: &SessionOutcome) -> String {
        let notice = match outcome {
            SessionOutcome::Completed { .. } => "Raid completed.",
            SessionOutcome::TimedOut { .. } => "Timed out.",
            SessionOutcome::Abandoned => "Stopped following the raid.",
        };
        format!("{GUIDE_TITLE}\n{notice}\n")
    }
}

#[async_trait]
impl Presenter for ConsolePresenter {
    async fn present_plan(&self, plan: &PlanView) {
        println!("{}", self.render_plan(plan));
    }

    async fn present_outcome(&self, outcome: &SessionOutcome) {
        println!("{}", self.render_outcome(outcome));
    }
}

/// Fallen attackers first, then the plan; fallen ones are struck through
/// and the next attacker is bracketed.
fn guide_line(plan: &PlanView) -> String {
    let mut parts: Vec<String> = plan
        .fallen_outside_plan()
        .map(|kind| struck(label(kind)))
        .collect();

    for step in &plan.steps {
        let name = label(step.attacker);
        parts.push(match step.status {
            StepStatus::Spent => struck(name),
            StepStatus::Next => format!("[{name}]"),
            StepStatus::Queued => name.to_string(),
        });
    }

    if parts.is_empty() {
        return "No attackers available.".to_string();
    }
    parts.join(ARROW)
}

fn struck(label: &str) -> String {
    label.chars().flat_map(|c| [c, '\u{0336}']).collect()
}

/// Rounds to two decimals, drops trailing zeros, and groups thousands.
pub fn format_power(power: f64) -> String {
    let fixed = format!("{:.2}", (power * 100.0).round() / 100.0);
    let fixed = fixed.trim_end_matches('0').trim_end_matches('.');

    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::new();
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raid_core::{DefenderId, KillCount, PlanStep, RatedAttacker, RatedDefender};

    fn plan() -> PlanView {
        PlanView {
            steps: vec![
                PlanStep {
                    attacker: WorkerKind::Common,
                    power: 25.67,
                    status: StepStatus::Spent,
                },
                PlanStep {
                    attacker: WorkerKind::Wise,
                    power: 66.0,
                    status: StepStatus::Next,
                },
                PlanStep {
                    attacker: WorkerKind::Expert,
                    power: 1234.5,
                    status: StepStatus::Queued,
                },
            ],
            kill_count: KillCount::Partial(2),
            fallen: vec![WorkerKind::Masterful, WorkerKind::Common],
            attackers: vec![
                RatedAttacker {
                    kind: WorkerKind::Wise,
                    level: 1,
                    power: 66.0,
                },
                RatedAttacker {
                    kind: WorkerKind::Expert,
                    level: 9,
                    power: 1234.5,
                },
            ],
            defenders: vec![RatedDefender {
                id: DefenderId(0),
                kind: WorkerKind::Useless,
                power: 5.25,
            }],
        }
    }

    #[test]
    fn power_formatting() {
        assert_eq!(format_power(66.0), "66");
        assert_eq!(format_power(25.666_666), "25.67");
        assert_eq!(format_power(1234.5), "1,234.5");
        assert_eq!(format_power(1_234_567.891), "1,234,567.89");
        assert_eq!(format_power(0.004), "0");
        assert_eq!(format_power(999.999), "1,000");
    }

    #[test]
    fn guide_line_marks_fallen_and_next() {
        let line = guide_line(&plan());
        let parts: Vec<&str> = line.split(ARROW).collect();

        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], struck("Masterful"));
        assert_eq!(parts[1], struck("Common"));
        assert_eq!(parts[2], "[Wise]");
        assert_eq!(parts[3], "Expert");
    }

    #[test]
    fn full_render_lists_workers_descending() {
        let text = ConsolePresenter::new(false).render_plan(&plan());

        assert!(text.starts_with("Raid guide\n"));
        assert!(text.contains("You can kill 2 farms."));
        let top = text.find("Your top workers").unwrap();
        let expert = text.find("Expert - 1,234.5 ⚡").unwrap();
        let wise = text.find("Wise - 66 ⚡").unwrap();
        assert!(top < expert && expert < wise);
        assert!(text.contains("Enemy farms\nUseless - 5.25 ⚡"));
    }

    #[test]
    fn compact_render_prints_only_the_guide() {
        let mut plan = plan();
        plan.kill_count = KillCount::All;

        let text = ConsolePresenter::new(true).render_plan(&plan);

        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("You can kill all farms.\n"));
        assert!(!text.contains("Enemy farms"));
    }

    #[test]
    fn outcome_notices() {
        let presenter = ConsolePresenter::default();
        let plan = plan();

        assert!(
            presenter
                .render_outcome(&SessionOutcome::Completed { plan: plan.clone() })
                .contains("Raid completed.")
        );
        assert!(
            presenter
                .render_outcome(&SessionOutcome::TimedOut { plan })
                .contains("Timed out.")
        );
    }

    #[test]
    fn empty_plan_has_placeholder() {
        let mut plan = plan();
        plan.steps.clear();
        plan.fallen.clear();
        assert_eq!(guide_line(&plan), "No attackers available.");
    }
}

//! Properties of solves and queries on small random formulas, checked against enumeration of every valuation.

use proptest::prelude::*;
use stoat_sat::{
    config::Config,
    context::Context,
    reports::{Report, Status},
    structures::{clause::Clause, literal::Literal},
};

/// A count of at most `max_atoms` atoms together with at most `max_clauses` clauses over those atoms.
fn formula_within(
    max_atoms: usize,
    max_clauses: usize,
) -> impl Strategy<Value = (usize, Vec<Vec<i32>>)> {
    (1..=max_atoms).prop_flat_map(move |atoms| {
        let literal = (1..=atoms as i32, any::<bool>())
            .prop_map(|(atom, polarity)| if polarity { atom } else { -atom });
        let clauses =
            prop::collection::vec(prop::collection::vec(literal, 1..=4), 0..=max_clauses);
        (Just(atoms), clauses)
    })
}

fn formula() -> impl Strategy<Value = (usize, Vec<Vec<i32>>)> {
    formula_within(8, 40)
}

/// A formula, with dead atoms and an assignment over the atoms of the formula.
fn formula_and_query() -> impl Strategy<Value = (usize, Vec<Vec<i32>>, Vec<u32>, Vec<i32>)> {
    formula().prop_flat_map(|(atoms, clauses)| {
        let dead = prop::collection::vec(1..=atoms as u32, 0..=2);
        let assignment = prop::collection::vec(
            (1..=atoms as i32, any::<bool>())
                .prop_map(|(atom, polarity)| if polarity { atom } else { -atom }),
            0..=3,
        );
        (Just(atoms), Just(clauses), dead, assignment)
    })
}

/// Every model of `clauses` over `atoms` atoms, each indexed by atom.
fn models(atoms: usize, clauses: &[Vec<i32>]) -> Vec<Vec<bool>> {
    (0_u32..(1 << atoms))
        .map(|mask| {
            let mut model = vec![false; atoms + 1];
            for atom in 1..=atoms {
                model[atom] = (mask >> (atom - 1)) & 1 == 1;
            }
            model
        })
        .filter(|model| clauses.iter().all(|clause| clause.satisfied_by(model)))
        .collect()
}

fn extends(model: &[bool], dead: &[u32], assignment: &[i32]) -> bool {
    dead.iter().all(|atom| !model[*atom as usize])
        && assignment
            .iter()
            .all(|literal| model[literal.atom() as usize] == literal.polarity())
}

fn solve_with(config: Config, atoms: usize, clauses: &[Vec<i32>]) -> (Report, Vec<bool>) {
    let mut ctx = Context::from_config(config, atoms).unwrap();
    assert!(ctx.add_clauses(clauses.iter()).is_ok());
    let report = ctx.solve().unwrap();
    (report, ctx.model())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn solves_match_enumeration((atoms, clauses) in formula()) {
        let (report, model) = solve_with(Config::default(), atoms, &clauses);

        match models(atoms, &clauses).is_empty() {
            true => prop_assert_eq!(report, Report::Unsatisfiable),
            false => {
                prop_assert_eq!(report, Report::Satisfiable);
                for clause in &clauses {
                    prop_assert!(clause.satisfied_by(&model), "{:?} is false on {:?}", clause, model);
                }
            }
        }
    }

    #[test]
    fn restarts_and_reductions_preserve_verdicts((atoms, clauses) in formula(), quality in 0_usize..8) {
        let (expected, _) = solve_with(Config::default(), atoms, &clauses);

        let mut eager = Config::default();
        prop_assert!(eager.restart_margin.set(0).is_ok());
        prop_assert!(eager.lemma_budget.set(0).is_ok());
        prop_assert!(eager.reduction_quality.set(quality).is_ok());
        let (report, model) = solve_with(eager, atoms, &clauses);
        prop_assert_eq!(report, expected);
        if report == Report::Satisfiable {
            prop_assert!(clauses.iter().all(|clause| clause.satisfied_by(&model)));
        }

        let mut patient = Config::default();
        prop_assert!(patient.restart.set(false).is_ok());
        let (report, _) = solve_with(patient, atoms, &clauses);
        prop_assert_eq!(report, expected);
    }

    #[test]
    fn fresh_solves_agree((atoms, clauses) in formula()) {
        let (first, _) = solve_with(Config::default(), atoms, &clauses);
        let (second, _) = solve_with(Config::default(), atoms, &clauses);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn statuses_match_enumeration((atoms, clauses, dead, assignment) in formula_and_query()) {
        let mut ctx = Context::from_config(Config::default(), atoms).unwrap();
        prop_assert!(ctx.add_clauses(clauses.iter()).is_ok());

        let status = ctx.check_assignment(&dead, &assignment).unwrap();

        let extensions = models(atoms, &clauses)
            .into_iter()
            .filter(|model| extends(model, &dead, &assignment))
            .count();

        match extensions {
            0 => prop_assert_ne!(status, Status::Valid),
            _ => prop_assert_eq!(status, Status::Valid),
        }

        let contradictory = assignment.iter().any(|literal| {
            assignment.contains(&literal.negate())
                || (literal.polarity() && dead.contains(&literal.atom()))
        });
        if contradictory {
            prop_assert_eq!(status, Status::Invalid);
        }
    }

    #[test]
    fn implied_literals_hold_on_extensions((atoms, clauses, dead, assignment) in formula_and_query()) {
        let mut ctx = Context::from_config(Config::default(), atoms).unwrap();
        prop_assert!(ctx.add_clauses(clauses.iter()).is_ok());

        let implied = ctx.propagate_only(&dead, &assignment).unwrap();

        for model in models(atoms, &clauses).iter().filter(|model| extends(model, &dead, &assignment)) {
            for literal in &implied {
                prop_assert_eq!(model[literal.atom() as usize], literal.polarity());
            }
        }

        for literal in &implied {
            prop_assert!(!assignment.contains(literal));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn wider_solves_match_enumeration((atoms, clauses) in formula_within(15, 80)) {
        let (report, model) = solve_with(Config::default(), atoms, &clauses);

        match models(atoms, &clauses).is_empty() {
            true => prop_assert_eq!(report, Report::Unsatisfiable),
            false => {
                prop_assert_eq!(report, Report::Satisfiable);
                prop_assert!(clauses.iter().all(|clause| clause.satisfied_by(&model)));
            }
        }
    }
}

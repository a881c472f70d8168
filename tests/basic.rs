use stoat_sat::{builder::ClauseOk, config::Config, context::Context, reports::Report};

/// Clauses stating `pigeons` pigeons sit in `holes` holes, with at most one pigeon to each hole.
fn pigeonhole(pigeons: i32, holes: i32) -> Vec<Vec<i32>> {
    let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;
    let mut clauses = Vec::default();

    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
    }

    for hole in 0..holes {
        for p in 0..pigeons {
            for q in (p + 1)..pigeons {
                clauses.push(vec![-atom(p, hole), -atom(q, hole)]);
            }
        }
    }

    clauses
}

mod scenarios {
    use super::*;

    #[test]
    fn satisfiable_pair() {
        let mut ctx = Context::from_config(Config::default(), 2).unwrap();

        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1, 2]).is_ok());
        assert!(ctx.add_clause(vec![1, -2]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), vec![false, true, true]);
        assert_eq!(ctx.valuation(), vec![1, 2]);
    }

    #[test]
    fn contradictory_units() {
        let mut ctx = Context::from_config(Config::default(), 1).unwrap();

        assert_eq!(ctx.add_clause(1), Ok(ClauseOk::Added));
        assert_eq!(ctx.add_clause(-1), Ok(ClauseOk::Unsatisfiable));

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.total_conflicts, 0);
    }

    #[test]
    fn every_binary_clause() {
        let mut ctx = Context::from_config(Config::default(), 2).unwrap();

        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1, -2]).is_ok());
        assert!(ctx.add_clause(vec![1, -2]).is_ok());
        assert!(ctx.add_clause(vec![-1, 2]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }
}

mod construction {
    use stoat_sat::types::err::{self};

    use super::*;

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default(), 2).unwrap();

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![1, 2]));
        assert!(ctx.add_clause(-1).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(1), Some(false));
        assert_eq!(ctx.value_of(2), Some(true));
    }

    #[test]
    fn repeated_units() {
        let mut ctx = Context::from_config(Config::default(), 1).unwrap();

        assert_eq!(ctx.add_clause(1), Ok(ClauseOk::Added));
        assert_eq!(ctx.add_clause(vec![1, 1]), Ok(ClauseOk::Added));

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(1), Some(true));
    }

    #[test]
    fn tautology_skip() {
        let mut ctx = Context::from_config(Config::default(), 2).unwrap();

        assert_eq!(ctx.add_clause(vec![1, -2, -1]), Ok(ClauseOk::Tautology));
        assert_eq!(ctx.clause_db.cell_count(), 1);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default(), 0).unwrap();
        assert_eq!(ctx.atom_count(), 1);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model().len(), 2);
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default(), 3).unwrap();

        assert!(ctx.add_clause(vec![1, 2, 3]).is_ok());
        assert_eq!(ctx.add_clause(Vec::<i32>::new()), Ok(ClauseOk::Unsatisfiable));
        assert_eq!(ctx.add_clause(vec![1, 2]), Ok(ClauseOk::Unsatisfiable));

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn undeclared_atoms() {
        let mut ctx = Context::from_config(Config::default(), 2).unwrap();

        assert_eq!(
            ctx.add_clause(vec![1, -3]),
            Err(err::ErrorKind::Build(err::BuildError::AtomOutOfRange {
                literal: -3,
                atom_count: 2
            }))
        );
    }

    #[test]
    fn too_many_atoms() {
        assert!(Context::from_config(Config::default(), usize::MAX).is_err());
    }
}

mod search {
    use stoat_sat::structures::clause::Clause;

    use super::*;

    #[test]
    fn small_chain() {
        let mut ctx = Context::from_config(Config::default(), 5).unwrap();

        assert!(ctx.add_clause(vec![-1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-2, 3]).is_ok());
        assert!(ctx.add_clause(vec![-3, 4]).is_ok());
        assert!(ctx.add_clause(vec![-4, 5]).is_ok());
        assert!(ctx.add_clause(vec![1]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.valuation(), vec![1, 2, 3, 4, 5]);
        assert_eq!(ctx.counters.total_decisions, 0);
    }

    #[test]
    fn pigeons_fit() {
        let clauses = pigeonhole(4, 4);
        let mut ctx = Context::from_config(Config::default(), 16).unwrap();
        assert!(ctx.add_clauses(clauses.clone()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let model = ctx.model();
        assert!(clauses.iter().all(|clause| clause.satisfied_by(&model)));
    }

    #[test]
    fn pigeons_do_not_fit() {
        let mut ctx = Context::from_config(Config::default(), 30).unwrap();
        assert!(ctx.add_clauses(pigeonhole(6, 5)).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.total_conflicts > 0);
        assert!(ctx.counters.additions > 0);
    }

    #[test]
    fn eager_restarts_and_reductions() {
        let mut config = Config::default();
        assert!(config.restart_margin.set(0).is_ok());
        assert!(config.lemma_budget.set(0).is_ok());
        assert!(config.reduction_quality.set(1).is_ok());

        let mut ctx = Context::from_config(config, 20).unwrap();
        assert!(ctx.add_clauses(pigeonhole(5, 4)).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.restarts > 0);
        assert!(ctx.counters.reductions > 0);
    }

    #[test]
    fn without_restarts() {
        let mut config = Config::default();
        assert!(config.restart.set(false).is_ok());

        let mut ctx = Context::from_config(config, 20).unwrap();
        assert!(ctx.add_clauses(pigeonhole(5, 4)).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.restarts, 0);
        assert_eq!(ctx.counters.reductions, 0);
    }

    #[test]
    fn no_clauses_after_a_solve() {
        let mut ctx = Context::from_config(Config::default(), 2).unwrap();
        assert!(ctx.add_clause(vec![1, 2]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.add_clause(vec![-1]).is_err());
    }
}

mod dimacs {
    use super::*;

    #[test]
    fn read_and_solve() {
        let dimacs = "
c A small formula
p cnf 3 4
 1  2  0
-1  3  0
-2 -3
 0
-3 0
";

        let (mut ctx, query) = Context::read_dimacs(Config::default(), dimacs.as_bytes()).unwrap();
        assert!(query.dead.is_empty());
        assert!(query.assignment.is_empty());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.valuation(), vec![-1, 2, -3]);
    }

    #[test]
    fn read_contradiction() {
        let dimacs = "p cnf 1 2\n1 0\n-1 0\n";

        let (mut ctx, _) = Context::read_dimacs(Config::default(), dimacs.as_bytes()).unwrap();
        assert_eq!(ctx.report(), Report::Unsatisfiable);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }
}

use stoat_sat::{
    config::Config,
    context::{Context, ContextState},
    reports::Report,
    types::err::{self},
};

fn pigeonhole(pigeons: i32, holes: i32) -> Vec<Vec<i32>> {
    let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;
    let mut clauses: Vec<Vec<i32>> = (0..pigeons)
        .map(|pigeon| (0..holes).map(|hole| atom(pigeon, hole)).collect())
        .collect();

    for hole in 0..holes {
        for p in 0..pigeons {
            for q in (p + 1)..pigeons {
                clauses.push(vec![-atom(p, hole), -atom(q, hole)]);
            }
        }
    }

    clauses
}

mod memory {
    use super::*;

    #[test]
    fn exhausted_while_building() {
        let mut config = Config::default();
        assert!(config.arena_capacity.set(10).is_ok());

        let mut ctx = Context::from_config(config, 3).unwrap();
        assert!(ctx.add_clause(vec![1, 2, 3]).is_ok());

        assert_eq!(
            ctx.add_clause(vec![1, 2]),
            Err(err::ErrorKind::ClauseDB(err::ClauseDBError::OutOfMemory {
                required: 12,
                capacity: 10
            }))
        );
    }

    #[test]
    fn exhausted_while_learning() {
        let clauses = pigeonhole(4, 3);

        // The sentinel cell, and then two links and a terminator for each clause.
        let cells = 1 + clauses.iter().map(|clause| clause.len() + 3).sum::<usize>();

        let mut config = Config::default();
        assert!(config.arena_capacity.set(cells).is_ok());

        let mut ctx = Context::from_config(config, 12).unwrap();
        assert!(ctx.add_clauses(clauses).is_ok());

        assert!(matches!(
            ctx.solve(),
            Err(err::ErrorKind::ClauseDB(err::ClauseDBError::OutOfMemory { .. }))
        ));
        assert_eq!(ctx.clause_db.cell_count(), cells);
        assert_eq!(ctx.state, ContextState::Exhausted);
        assert_eq!(ctx.report(), Report::Unknown);

        assert_eq!(
            ctx.solve(),
            Err(err::ErrorKind::ClauseDB(err::ClauseDBError::Exhausted))
        );
        assert_eq!(
            ctx.check_assignment(&[], &[1]),
            Err(err::ErrorKind::Query(err::QueryError::SearchStarted))
        );
    }
}

mod interruption {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn terminate_immediately() {
        let mut ctx = Context::from_config(Config::default(), 30).unwrap();
        assert!(ctx.add_clauses(pigeonhole(6, 5)).is_ok());

        ctx.set_callback_terminate(Box::new(|| true));

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(ctx.state, ContextState::Solving);
        assert_eq!(ctx.counters.total_decisions, 0);
    }

    #[test]
    fn terminate_and_resume() {
        let mut ctx = Context::from_config(Config::default(), 20).unwrap();
        assert!(ctx.add_clauses(pigeonhole(5, 4)).is_ok());

        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        ctx.set_callback_terminate(Box::new(move || {
            counter.set(counter.get() + 1);
            counter.get() == 3
        }));

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(calls.get(), 3);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(calls.get() > 3);
    }

    #[test]
    fn conflict_limit() {
        let mut config = Config::default();
        assert!(config.conflict_limit.set(Some(1)).is_ok());

        let mut ctx = Context::from_config(config, 30).unwrap();
        assert!(ctx.add_clauses(pigeonhole(6, 5)).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert!(ctx.counters.total_conflicts >= 1);

        assert!(ctx.config.conflict_limit.set(None).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn interrupted_query() {
        let mut ctx = Context::from_config(Config::default(), 3).unwrap();
        assert!(ctx.add_clause(vec![1, 2, 3]).is_ok());

        ctx.set_callback_terminate(Box::new(|| true));

        assert_eq!(
            ctx.check_assignment(&[1], &[]),
            Err(err::ErrorKind::Query(err::QueryError::Interrupted))
        );
    }
}

use std::{fs::File, io::BufReader, process::exit};

use clap::Parser;
use stoat_sat::{
    config::Mode,
    context::{Context, ContextState},
    reports::{Report, Response},
    types::err::{self},
};

mod args;
mod misc;

use args::Args;
use misc::*;

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let args = Args::parse();
    init_logging(args.log_level);

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            exit(EXIT_ERROR);
        }
    };

    let file = match File::open(&args.file) {
        Ok(file) => file,
        Err(_) => {
            println!("c FILE NOT FOUND");
            exit(EXIT_ERROR);
        }
    };

    println!("c Reading DIMACS file from {:?}", args.file);

    let (mut the_context, query) = match Context::read_dimacs(config, BufReader::new(file)) {
        Ok(read) => read,
        Err(e) => {
            println!("c Failed to read the formula: {e}");
            exit(EXIT_ERROR);
        }
    };

    if the_context.state == ContextState::Unsatisfiable {
        println!("{}", report_line(Report::Unsatisfiable));
        exit(report_code(Report::Unsatisfiable));
    }

    let response = the_context.respond(args.mode(), &query);

    if args.stats {
        println!("{}", the_context.counters);
    }

    let code = match response {
        Ok(Response::Solve(report)) => {
            println!("{}", report_line(report));
            if report == Report::Satisfiable && args.model {
                println!("{}", model_line(&the_context));
            }
            report_code(report)
        }

        Ok(Response::Status(status)) => {
            println!("{}", status_line(status));
            status_code(status)
        }

        Ok(Response::Propagate { implied, status }) => {
            println!("{}", literal_line(&implied));
            println!("{}", status_line(status));
            status_code(status)
        }

        Err(err::ErrorKind::Query(err::QueryError::Interrupted)) => {
            println!("{}", report_line(Report::Unknown));
            EXIT_UNKNOWN
        }

        Err(err::ErrorKind::ClauseDB(err::ClauseDBError::OutOfMemory { .. })) => {
            println!("c OUT OF MEMORY");
            EXIT_ERROR
        }

        Err(e) => {
            match args.mode() {
                Mode::Solve => println!("c Solve error: {e}"),
                Mode::Status | Mode::Propagate => println!("c Query error: {e}"),
            }
            EXIT_ERROR
        }
    };

    exit(code);
}

use stoat_sat::{
    context::Context,
    reports::{Report, Status},
    structures::literal::CLiteral,
};

pub const EXIT_ERROR: i32 = 1;
pub const EXIT_UNKNOWN: i32 = 0;

pub fn report_code(report: Report) -> i32 {
    match report {
        Report::Satisfiable => 10,
        Report::Unsatisfiable => 20,
        Report::Unknown => EXIT_UNKNOWN,
    }
}

pub fn status_code(status: Status) -> i32 {
    match status {
        Status::Valid => 100,
        Status::Incomplete => 150,
        Status::Invalid => 200,
    }
}

pub fn report_line(report: Report) -> &'static str {
    match report {
        Report::Satisfiable => "s SATISFIABLE",
        Report::Unsatisfiable => "s UNSATISFIABLE",
        Report::Unknown => "s UNKNOWN",
    }
}

pub fn status_line(status: Status) -> &'static str {
    match status {
        Status::Valid => "s BUILDABLE",
        Status::Incomplete => "s INCOMPLETE",
        Status::Invalid => "s INVALID",
    }
}

/// A `v` line of literals.
pub fn literal_line(literals: &[CLiteral]) -> String {
    let mut line = String::from("v");
    for literal in literals {
        line.push(' ');
        line.push_str(&literal.to_string());
    }
    line
}

/// The model of the context, as a `v` line terminated by `0`.
pub fn model_line(context: &Context) -> String {
    let mut line = literal_line(&context.valuation());
    line.push_str(" 0");
    line
}

#[cfg(feature = "log")]
pub fn init_logging(level: log::LevelFilter) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                println!("c Failed to start logging: {e}");
            }
        }
        Err(e) => println!("c Failed to configure logging: {e}"),
    }
}

#[cfg(not(feature = "log"))]
pub fn init_logging(level: log::LevelFilter) {
    if level > log::LevelFilter::Warn {
        println!("c Logs require the 'log' feature");
    }
}

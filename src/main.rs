use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use vitality_score::VitalityEngine;
use vitality_score::input::{InputError, load_history};
use vitality_score::model::{AgeGroup, ScoringProfile};
use vitality_score::pipeline::stage7_report::{Stage7Input, write_reports};
use vitality_score::schema::loader::render_schema_json;
use vitality_score::schema::{
    BenchmarkSchema, SchemaError, SchemaSpec, builtin_schema, load_schema_json,
};
use vitality_score::tracing::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "vitality",
    version,
    about = "Age-aware vitality scoring from daily health history"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a daily history CSV and write reports.
    Run(RunArgs),
    /// Validate a benchmark schema (built-in unless --schema is given).
    CheckSchema(SchemaArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Daily history CSV (`date,sleep_hours,steps,hrv_ms,resting_hr,...`).
    #[arg(long)]
    input: PathBuf,
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=130))]
    age: i32,
    #[arg(long)]
    out: PathBuf,
    /// Alternate benchmark schema as JSON.
    #[arg(long)]
    schema: Option<PathBuf>,
    #[arg(long, default_value_t = 30)]
    window_days: usize,
    #[arg(long, default_value_t = 7)]
    lookback_days: u64,
    /// Withhold the score when fewer than two pillars have data.
    #[arg(long)]
    gate: bool,
}

#[derive(Debug, Clone, Args)]
struct SchemaArgs {
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Print the schema as JSON after validating it.
    #[arg(long)]
    print: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("schema rejected: {0}")]
    Schema(#[from] SchemaError),
    #[error("not enough data: fewer than {0} pillars have measurements")]
    InsufficientData(usize),
    #[error("failed to write output to {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    fn exit_code(&self) -> u8 {
        match self {
            AppError::Output { .. } => 1,
            AppError::Input(_) => 2,
            AppError::Schema(_) => 3,
            AppError::InsufficientData(_) => 4,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn dispatch(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run(args) => run(&args),
        Command::CheckSchema(args) => check_schema(&args),
    }
}

fn resolve_schema_spec(path: Option<&Path>) -> Result<SchemaSpec, AppError> {
    match path {
        Some(p) => Ok(load_schema_json(p)?),
        None => Ok(builtin_schema()),
    }
}

fn run(args: &RunArgs) -> Result<(), AppError> {
    // Validation happens before any history is read; a bad schema never scores.
    let schema = BenchmarkSchema::from_spec(resolve_schema_spec(args.schema.as_deref())?)?;
    let profile = ScoringProfile::default_v1().with_window(args.window_days, args.lookback_days);
    let engine = VitalityEngine::new(schema, profile);

    let history = load_history(&args.input)?;
    if !history.row_errors.is_empty() {
        tracing::warn!(
            skipped = history.row_errors.len(),
            read = history.rows_read,
            "some history rows were skipped"
        );
    }

    let window = engine.build_window(args.age, &history.records);
    tracing::info!(
        age = args.age,
        group = AgeGroup::from_age(args.age).label(),
        window = window.audit.window_len,
        "scoring window ready"
    );

    let scored = if args.gate {
        engine.score_if_possible(&window.raw)
    } else {
        Some(engine.score_with_breakdown(&window.raw))
    };

    let input = Stage7Input {
        window: &window.audit,
        scored: scored.as_ref().map(|(s, b)| (s, b)),
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out).map_err(|source| AppError::Output {
        path: args.out.clone(),
        source,
    })?;

    match &scored {
        Some((snapshot, _)) => {
            println!("vitality: {}/100", snapshot.total_score);
            Ok(())
        }
        None => Err(AppError::InsufficientData(engine.profile().min_pillars)),
    }
}

fn check_schema(args: &SchemaArgs) -> Result<(), AppError> {
    let spec = resolve_schema_spec(args.schema.as_deref())?;
    let printed = if args.print {
        Some(render_schema_json(&spec).map_err(|e| AppError::Output {
            path: PathBuf::from("<stdout>"),
            source: std::io::Error::other(e),
        })?)
    } else {
        None
    };
    let schema = BenchmarkSchema::from_spec(spec)?;
    println!(
        "schema ok: {} pillars, {} submetrics, {} age groups",
        schema.pillars().len(),
        schema.submetric_count(),
        AgeGroup::COUNT
    );
    if let Some(json) = printed {
        println!("{json}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

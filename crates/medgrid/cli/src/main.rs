//! Demo driver for the medgrid pipeline.
//!
//! A thin collaborator shell: generates synthetic reports, feeds them through
//! one `PipelineSession`, and prints what the core produced. No pipeline
//! logic lives here.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use medgrid_ingest::for_kind;
use medgrid_session::{CycleRecord, PipelineSession, SessionConfig};
use medgrid_types::SourceKind;

#[derive(Parser)]
#[command(name = "medgrid", about = "Medgrid decision-pipeline demo driver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run decision cycles against the simulated boundaries
    Run {
        /// Number of cycles to run
        #[arg(short, long, default_value_t = 5)]
        cycles: u32,

        /// Report source to generate
        #[arg(short, long, value_enum, default_value = "mixed")]
        source: SourceArg,

        /// Default subject identifier
        #[arg(long, default_value = "A")]
        subject: String,

        /// Print full cycle records as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// List available report sources
    Sources,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    Wearable,
    Note,
    Mobility,
    Network,
    /// Round-robin over all four sources
    Mixed,
}

const ROTATION: [SourceKind; 4] = [
    SourceKind::Wearable,
    SourceKind::Note,
    SourceKind::MobilityApp,
    SourceKind::Network,
];

impl SourceArg {
    fn kind_for_cycle(self, cycle: usize) -> SourceKind {
        match self {
            Self::Wearable => SourceKind::Wearable,
            Self::Note => SourceKind::Note,
            Self::Mobility => SourceKind::MobilityApp,
            Self::Network => SourceKind::Network,
            Self::Mixed => ROTATION[cycle % ROTATION.len()],
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            cycles,
            source,
            subject,
            json,
        } => run(cycles, source, &subject, json),
        Commands::Sources => {
            for kind in ROTATION {
                println!("{kind}");
            }
            Ok(())
        }
    }
}

fn run(cycles: u32, source: SourceArg, subject: &str, json: bool) -> Result<()> {
    let mut session = PipelineSession::new(SessionConfig {
        default_subject: subject.to_string(),
        ..SessionConfig::default()
    });

    for i in 0..cycles {
        let kind = source.kind_for_cycle(i as usize);
        let record = session.run_cycle(for_kind(kind, subject))?;
        if json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            print_summary(&record);
        }
    }

    let summary = session.warm_summary();
    println!(
        "warm summary: count={} avg_severity={} emergency_rate={}",
        summary.count, summary.avg_severity, summary.emergency_rate
    );
    Ok(())
}

fn print_summary(record: &CycleRecord) {
    println!(
        "cycle {:>3}  {:<12} {:<18} slice={:<5} mode={:<10} ris={:<3} | latency={:>6.2}ms loss={:>5.2}% | mission={:>3} cost={:>3} stability={:>3}",
        record.cycle,
        record.event.source_kind.to_string(),
        record.intent.context.to_string(),
        record.decision.slice_id.to_string(),
        record.decision.ai_mode.to_string(),
        if record.decision.ris_active { "on" } else { "off" },
        record.telemetry.latency_ms,
        record.telemetry.loss_pct,
        record.outcome.mission_success,
        record.outcome.operational_cost,
        record.outcome.stability,
    );
}

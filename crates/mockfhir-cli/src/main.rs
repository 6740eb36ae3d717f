mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use time::Date;
use time::macros::format_description;

use cli::{Cli, Commands, FixtureSet, GenerateArgs};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::RebindAppointments(args) => {
            let rebound = mockfhir_synth::output::rebind_appointments_file(&args.data_dir)
                .context("rebinding appointments")?;
            println!("Rebound {rebound} appointments in {}", args.data_dir.display());
            Ok(())
        }
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let dir = &args.data.data_dir;

    match args.set {
        FixtureSet::All => {
            let counts = mockfhir_synth::write_all(dir, as_of).context("generating fixtures")?;
            println!(
                "Generated {} patients, {} organizations, {} coverages",
                counts.patients, counts.organizations, counts.coverages
            );
            println!(
                "Generated {} conditions, {} encounters, {} procedures, {} observations",
                counts.conditions, counts.encounters, counts.procedures, counts.observations
            );
            println!(
                "Generated {} practitioners, {} roles, {} provenances",
                counts.practitioners, counts.practitioner_roles, counts.provenances
            );
            println!(
                "Generated {} consents, {} binaries, {} document references",
                counts.consents, counts.binaries, counts.document_references
            );
            if counts.appointments_rebound > 0 {
                println!("Rebound {} appointments", counts.appointments_rebound);
            }
        }
        FixtureSet::Core => {
            let counts = mockfhir_synth::output::write_core(dir, as_of)?;
            println!(
                "Generated {} patients, {} organizations, {} coverages",
                counts.patients, counts.organizations, counts.coverages
            );
        }
        FixtureSet::Conditions => {
            let counts = mockfhir_synth::output::write_conditions(dir, as_of)?;
            println!("Generated {} conditions", counts.conditions);
        }
        FixtureSet::Clinical => {
            let counts = mockfhir_synth::output::write_clinical(dir, as_of)?;
            println!(
                "Generated {} encounters, {} procedures, {} observations, {} provenances",
                counts.encounters, counts.procedures, counts.observations, counts.provenances
            );
        }
        FixtureSet::Documents => {
            let counts = mockfhir_synth::output::write_documents(dir, as_of)?;
            println!(
                "Generated {} consents, {} binaries, {} document references",
                counts.consents, counts.binaries, counts.document_references
            );
        }
    }

    println!("Output directory: {}", dir.display());
    Ok(())
}

fn resolve_as_of(arg: Option<&str>) -> Result<Date> {
    match arg {
        Some(raw) => Date::parse(raw, format_description!("[year]-[month]-[day]"))
            .with_context(|| format!("invalid --as-of date '{raw}', expected YYYY-MM-DD")),
        None => Ok(time::OffsetDateTime::now_utc().date()),
    }
}

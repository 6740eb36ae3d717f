use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mockfhir", version, about = "Synthetic FHIR fixture generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate fixture files from the seed identifiers
    Generate(GenerateArgs),
    /// Rewrite appointments.json references against the generated patients
    RebindAppointments(DataDirArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Which fixture set to generate
    #[arg(value_enum, default_value = "all")]
    pub set: FixtureSet,

    #[command(flatten)]
    pub data: DataDirArgs,

    /// Reference date for relative timestamps (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub as_of: Option<String>,
}

#[derive(Args)]
pub struct DataDirArgs {
    /// Fixture output directory
    #[arg(long, env = "MOCKFHIR_DATA_DIR", default_value = "synthetic-data")]
    pub data_dir: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureSet {
    /// Everything, in dependency order
    All,
    /// Patients, organizations, and coverage
    Core,
    /// The conditions bundle
    Conditions,
    /// Practitioners, encounters, procedures, observations, provenance, EOB
    Clinical,
    /// Consents, binaries, and document references
    Documents,
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "xtal - A command-line interface for deriving renderable 3D scenes from parsed crystal structure records.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary of a structure record: formula, symmetry, lattice, counts.
    Info(InfoArgs),
    /// Derive the renderable scene for a structure and write it as JSON.
    Scene(SceneArgs),
    /// Print the per-element color and radius legend for a structure.
    Legend(LegendArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input structure record (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Export the atom coordinate table as CSV to the given path.
    #[arg(long, value_name = "PATH")]
    pub atoms_csv: Option<PathBuf>,

    /// Export the bond table as CSV to the given path.
    #[arg(long, value_name = "PATH")]
    pub bonds_csv: Option<PathBuf>,
}

/// Arguments for the `scene` subcommand.
#[derive(Args, Debug)]
pub struct SceneArgs {
    /// Path to the input structure record (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the derived scene JSON. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a display configuration file in TOML format.
    /// Command-line flags override values from the file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Hide all atom spheres.
    #[arg(long)]
    pub no_atoms: bool,

    /// Hide all bond segments.
    #[arg(long)]
    pub no_bonds: bool,

    /// Hide the unit-cell wireframe.
    #[arg(long)]
    pub no_cell: bool,

    /// Hide one element's atoms (and the bonds touching them).
    /// Can be used multiple times. Example: --hide Fe --hide O
    #[arg(long, value_name = "ELEMENT")]
    pub hide: Vec<String>,
}

/// Arguments for the `legend` subcommand.
#[derive(Args, Debug)]
pub struct LegendArgs {
    /// Path to the input structure record (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

pub mod args;
pub mod commands;

pub use args::ConvertArgs;
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "argoform")]
#[command(version = crate::VERSION)]
#[command(about = "Convert data pipelines into Argo Workflows manifests")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: register pipelines in argoform.toml, convert one to a manifest, then hand the manifest to Argo."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Convert a pipeline to an Argo Workflow, and save the manifest",
        long_about = "Convert builds a workflow document for the requested pipeline, overlays any --params overrides, and writes the YAML manifest to the output sink.",
        after_help = "Example:\n    argoform convert docker/whalesay:latest -p dp -d 'dp:,ds:dp' -o workflow.yml"
    )]
    Convert(ConvertArgs),
}

pub fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Convert(convert_args) => commands::convert(convert_args),
    }
}

use clap::Parser;

fn main() {
    let args = argoform::cli::Args::parse();

    if let Err(err) = argoform::logging::init() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    if let Err(err) = argoform::cli::run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

use crate::{
    cli::args::{ConvertArgs, DEFAULT_IMAGE, DEFAULT_PACKAGE_NAME, DEFAULT_RUNNER},
    core::{
        build_manifest, merge_mapping, parse_dependencies, parse_params, ConfigLoader,
        ManifestRequest, PipelineRegistry, DEFAULT_PIPELINE,
    },
    Result,
};
use anyhow::Context;
use serde_yaml::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Fully resolved inputs for one convert run: built-in defaults, then config
/// file values, then `ARGOFORM_*` environment variables, then explicit CLI
/// flags, each layer overriding the previous one.
struct ConvertSettings {
    image: String,
    pipeline: String,
    dependencies: String,
    params: String,
    package_name: String,
    runner: String,
    output: PathBuf,
    registry: PipelineRegistry,
}

impl ConvertSettings {
    fn resolve(args: ConvertArgs) -> Result<ConvertSettings> {
        let config = match &args.config {
            Some(path) => ConfigLoader::load_from_path(path)?,
            None => ConfigLoader::load_from_working_dir()?,
        };
        let file = config.convert;

        Ok(ConvertSettings {
            image: args
                .image
                .or(file.image)
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            pipeline: args
                .pipeline
                .or(file.pipeline)
                .unwrap_or_else(|| DEFAULT_PIPELINE.to_string()),
            dependencies: args.dependencies.or(file.dependencies).unwrap_or_default(),
            params: args.params.or(file.params).unwrap_or_default(),
            package_name: args
                .package_name
                .or(file.package_name)
                .unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string()),
            runner: args
                .runner
                .or(file.runner)
                .unwrap_or_else(|| DEFAULT_RUNNER.to_string()),
            output: args.output,
            registry: PipelineRegistry::new(file.pipelines),
        })
    }
}

/// Convert a pipeline to an Argo Workflow manifest and write it to the sink.
///
/// Parsing runs before construction and construction before serialization, so
/// every failure surfaces before a single byte reaches the sink.
pub fn convert(args: ConvertArgs) -> Result<()> {
    let settings = ConvertSettings::resolve(args)?;

    let dependencies = parse_dependencies(&settings.dependencies)?;
    let params = parse_params(&settings.params)?;

    tracing::debug!(
        pipeline = %settings.pipeline,
        tasks = dependencies.len(),
        "building workflow manifest"
    );

    let request = ManifestRequest {
        package_name: &settings.package_name,
        pipeline: &settings.pipeline,
        image: &settings.image,
        runner: &settings.runner,
        dependencies: &dependencies,
    };
    let mut manifest = build_manifest(&request, &settings.registry)?;

    if let Value::Mapping(root) = &mut manifest {
        merge_mapping(root, &params);
    }

    let rendered =
        serde_yaml::to_string(&manifest).context("failed to serialize workflow manifest")?;
    write_to_sink(&settings.output, &rendered)
}

fn write_to_sink(output: &Path, rendered: &str) -> Result<()> {
    if output == Path::new("-") {
        io::stdout()
            .write_all(rendered.as_bytes())
            .context("failed to write manifest to stdout")?;
    } else {
        fs::write(output, rendered)
            .with_context(|| format!("failed to write manifest to {}", output.display()))?;
    }
    Ok(())
}

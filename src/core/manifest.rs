use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::core::error::ConvertError;
use crate::core::registry::PipelineRegistry;

pub const API_VERSION: &str = "argoproj.io/v1alpha1";
pub const KIND: &str = "Workflow";

/// Name of the reusable template that runs one pipeline in the container.
pub const RUN_TEMPLATE: &str = "pipeline-run";
/// Name of the DAG template emitted when dependencies are given.
pub const DAG_TEMPLATE: &str = "dag";

const PIPELINE_PARAMETER: &str = "pipeline";

/// Inputs for one manifest construction pass.
#[derive(Debug)]
pub struct ManifestRequest<'a> {
    /// Host project identifier used for the `generateName` prefix.
    pub package_name: &'a str,
    /// Pipeline requested on the command line.
    pub pipeline: &'a str,
    /// Container image every task runs in.
    pub image: &'a str,
    /// Host-framework CLI invoked inside the container (`<runner> run ...`).
    pub runner: &'a str,
    /// Task name -> dependency expression; empty means a single-task workflow.
    pub dependencies: &'a IndexMap<String, Option<String>>,
}

/// Build the workflow document for `request`.
///
/// Pure construction over the generic document tree; the registry check runs
/// before anything is assembled so an unknown pipeline produces no output at
/// all. With dependencies present the entry point is the DAG template and one
/// task node is emitted per mapping key, in mapping order; without them the
/// single run template is the entry point. The top-level `pipeline` argument
/// always carries the originally requested name for traceability.
pub fn build_manifest(
    request: &ManifestRequest<'_>,
    registry: &PipelineRegistry,
) -> Result<Value, ConvertError> {
    registry.ensure_registered(request.pipeline)?;

    let mut templates = vec![run_template(request.image, request.runner)];
    let entrypoint = if request.dependencies.is_empty() {
        RUN_TEMPLATE
    } else {
        templates.push(dag_template(request.dependencies));
        DAG_TEMPLATE
    };

    let mut metadata = Mapping::new();
    metadata.insert(
        Value::from("generateName"),
        Value::from(generate_name(request.package_name, request.pipeline)),
    );

    let mut spec = Mapping::new();
    spec.insert(Value::from("entrypoint"), Value::from(entrypoint));
    spec.insert(Value::from("arguments"), pipeline_arguments(request.pipeline));
    spec.insert(Value::from("templates"), Value::Sequence(templates));

    let mut root = Mapping::new();
    root.insert(Value::from("apiVersion"), Value::from(API_VERSION));
    root.insert(Value::from("kind"), Value::from(KIND));
    root.insert(Value::from("metadata"), Value::Mapping(metadata));
    root.insert(Value::from("spec"), Value::Mapping(spec));
    Ok(Value::Mapping(root))
}

/// `generateName` prefix: package plus pipeline, underscores hyphenated to
/// satisfy Kubernetes object-name rules.
fn generate_name(package_name: &str, pipeline: &str) -> String {
    format!("{package_name}-{pipeline}-").replace('_', "-")
}

fn parameter(name: &str, value: Option<&str>) -> Value {
    let mut parameter = Mapping::new();
    parameter.insert(Value::from("name"), Value::from(name));
    if let Some(value) = value {
        parameter.insert(Value::from("value"), Value::from(value));
    }
    Value::Mapping(parameter)
}

fn pipeline_arguments(value: &str) -> Value {
    let mut arguments = Mapping::new();
    arguments.insert(
        Value::from("parameters"),
        Value::Sequence(vec![parameter(PIPELINE_PARAMETER, Some(value))]),
    );
    Value::Mapping(arguments)
}

fn run_template(image: &str, runner: &str) -> Value {
    let mut inputs = Mapping::new();
    inputs.insert(
        Value::from("parameters"),
        Value::Sequence(vec![parameter(PIPELINE_PARAMETER, None)]),
    );

    let mut container = Mapping::new();
    container.insert(Value::from("image"), Value::from(image));
    container.insert(
        Value::from("command"),
        Value::Sequence(vec![Value::from("bash"), Value::from("-c")]),
    );
    container.insert(
        Value::from("args"),
        Value::Sequence(vec![Value::from(format!(
            "{runner} run --pipeline {{{{inputs.parameters.pipeline}}}}"
        ))]),
    );

    let mut template = Mapping::new();
    template.insert(Value::from("name"), Value::from(RUN_TEMPLATE));
    template.insert(Value::from("inputs"), Value::Mapping(inputs));
    template.insert(Value::from("container"), Value::Mapping(container));
    Value::Mapping(template)
}

fn dag_template(dependencies: &IndexMap<String, Option<String>>) -> Value {
    let tasks = dependencies
        .iter()
        .map(|(name, depends)| {
            let mut task = Mapping::new();
            task.insert(Value::from("name"), Value::from(name.as_str()));
            task.insert(Value::from("template"), Value::from(RUN_TEMPLATE));
            task.insert(Value::from("arguments"), pipeline_arguments(name));
            // Absence means "no dependency"; never emit an empty field.
            if let Some(depends) = depends {
                task.insert(Value::from("depends"), Value::from(depends.as_str()));
            }
            Value::Mapping(task)
        })
        .collect();

    let mut dag = Mapping::new();
    dag.insert(Value::from("tasks"), Value::Sequence(tasks));

    let mut template = Mapping::new();
    template.insert(Value::from("name"), Value::from(DAG_TEMPLATE));
    template.insert(Value::from("dag"), Value::Mapping(dag));
    Value::Mapping(template)
}

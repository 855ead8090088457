use argoform::core::{
    build_manifest, parse_dependencies, ConvertError, ManifestRequest, PipelineRegistry,
    DAG_TEMPLATE, RUN_TEMPLATE,
};
use indexmap::IndexMap;
use serde_yaml::Value;

fn registry() -> PipelineRegistry {
    PipelineRegistry::new(["dp", "ds"])
}

fn request<'a>(
    pipeline: &'a str,
    dependencies: &'a IndexMap<String, Option<String>>,
) -> ManifestRequest<'a> {
    ManifestRequest {
        package_name: "test_package",
        pipeline,
        image: "docker/whalesay:latest",
        runner: "pipeline",
        dependencies,
    }
}

#[test]
fn default_pipeline_is_convertible_without_registration() {
    let dependencies = IndexMap::new();
    let manifest = build_manifest(&request("__default__", &dependencies), &registry()).unwrap();
    assert_eq!(
        manifest["metadata"]["generateName"].as_str(),
        Some("test-package---default---")
    );
    assert_eq!(manifest["spec"]["entrypoint"].as_str(), Some(RUN_TEMPLATE));
}

#[test]
fn unknown_pipeline_fails_with_its_exact_name() {
    let dependencies = IndexMap::new();
    let err = build_manifest(&request("de", &dependencies), &registry()).unwrap_err();
    assert_eq!(err, ConvertError::UnknownPipeline("de".to_string()));
    assert!(err.to_string().contains("Failed to find the pipeline named 'de'."));
}

#[test]
fn single_task_manifest_shape() {
    let dependencies = IndexMap::new();
    let manifest = build_manifest(&request("dp", &dependencies), &registry()).unwrap();

    assert_eq!(manifest["apiVersion"].as_str(), Some("argoproj.io/v1alpha1"));
    assert_eq!(manifest["kind"].as_str(), Some("Workflow"));
    assert_eq!(
        manifest["metadata"]["generateName"].as_str(),
        Some("test-package-dp-")
    );
    assert_eq!(manifest["spec"]["entrypoint"].as_str(), Some(RUN_TEMPLATE));

    let templates = manifest["spec"]["templates"].as_sequence().unwrap();
    assert_eq!(templates.len(), 1);
    let container = &templates[0]["container"];
    assert_eq!(container["image"].as_str(), Some("docker/whalesay:latest"));
    assert_eq!(
        container["args"][0].as_str(),
        Some("pipeline run --pipeline {{inputs.parameters.pipeline}}")
    );
}

#[test]
fn dag_manifest_emits_one_task_per_dependency_key_in_order() {
    let dependencies = parse_dependencies("dp:,ds:dp").unwrap();
    let manifest = build_manifest(&request("dp", &dependencies), &registry()).unwrap();

    assert_eq!(manifest["spec"]["entrypoint"].as_str(), Some(DAG_TEMPLATE));
    let templates = manifest["spec"]["templates"].as_sequence().unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[1]["name"].as_str(), Some(DAG_TEMPLATE));

    let tasks = templates[1]["dag"]["tasks"].as_sequence().unwrap();
    let names: Vec<&str> = tasks
        .iter()
        .map(|task| task["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["dp", "ds"]);

    // Absent depends field for dp, literal expression for ds.
    assert!(tasks[0].get("depends").is_none());
    assert_eq!(tasks[1]["depends"].as_str(), Some("dp"));

    for task in tasks {
        assert_eq!(task["template"].as_str(), Some(RUN_TEMPLATE));
        let parameters = task["arguments"]["parameters"].as_sequence().unwrap();
        assert_eq!(parameters[0]["name"].as_str(), Some("pipeline"));
        assert_eq!(parameters[0]["value"].as_str(), task["name"].as_str());
    }
}

#[test]
fn top_level_argument_tracks_requested_pipeline_even_under_dag() {
    let dependencies = parse_dependencies("dp:,ds:dp").unwrap();
    let manifest = build_manifest(&request("ds", &dependencies), &registry()).unwrap();
    let parameters = manifest["spec"]["arguments"]["parameters"]
        .as_sequence()
        .unwrap();
    assert_eq!(parameters[0]["value"].as_str(), Some("ds"));
}

#[test]
fn manifest_round_trips_through_yaml() {
    let dependencies = parse_dependencies("dp:,ds:dp").unwrap();
    let manifest = build_manifest(&request("dp", &dependencies), &registry()).unwrap();
    let rendered = serde_yaml::to_string(&manifest).unwrap();
    let reparsed: Value = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(reparsed, manifest);
    assert!(rendered.contains("generateName: test-package-dp-"));
    assert!(rendered.contains("entrypoint: dag"));
}

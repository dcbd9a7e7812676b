use crate::support::open_project_or_exit;
use esxkit_model::{
    FloorPlanIndex, ProjectDocuments, RadioIndex, TagKeyIndex, build_access_point_records,
};

pub fn run(project: String) {
    let input = open_project_or_exit(&project);

    // Loader diagnostics go to stderr so stdout stays valid JSON.
    let mut sink = |message: &str| eprintln!("{message}");
    let docs = ProjectDocuments::load(input.dir(), &mut sink);

    let Some(access_points) = docs.access_points.as_ref() else {
        eprintln!("error: {} contains no access points document", input.name());
        std::process::exit(2);
    };

    let floor_plans = docs
        .floor_plans
        .as_ref()
        .map(FloorPlanIndex::build)
        .unwrap_or_default();
    let radios = docs
        .simulated_radios
        .as_ref()
        .map(RadioIndex::build)
        .unwrap_or_default();
    let tag_keys = docs
        .tag_keys
        .as_ref()
        .map(TagKeyIndex::build)
        .unwrap_or_default();

    let outcome = build_access_point_records(access_points, &floor_plans, &radios, &tag_keys);
    for dangling in &outcome.dangling {
        eprintln!("warning: '{}' has a dangling reference", dangling.record_name);
    }

    // The record map carries no order; sort by name for stable output.
    let mut records: Vec<_> = outcome.records.into_values().collect();
    records.sort_by(|a, b| a.name.cmp(&b.name));

    println!(
        "{}",
        serde_json::to_string_pretty(&records).expect("json serialization")
    );
}

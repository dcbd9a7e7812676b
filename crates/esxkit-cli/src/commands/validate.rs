use crate::support::{open_project_or_exit, resolve_profile_or_exit};
use esxkit_model::ProjectDocuments;
use esxkit_profile::parse_project_metadata;
use esxkit_validate::run_validation;
use serde_json::json;

pub fn run(project: String, profile: String, profile_file: Option<String>, json_output: bool) {
    let input = open_project_or_exit(&project);
    let profile = resolve_profile_or_exit(&profile, profile_file.as_deref());

    let mut lines: Vec<String> = Vec::new();
    let mut sink = |message: &str| {
        if json_output {
            lines.push(message.to_string());
        } else {
            println!("{message}");
        }
    };

    let metadata = parse_project_metadata(input.name(), profile.filename_pattern.as_deref());
    for (label, value) in [
        ("Site ID", &metadata.site_id),
        ("Site location", &metadata.site_location),
        ("Project phase", &metadata.project_phase),
        ("Project version", &metadata.project_version),
    ] {
        if let Some(value) = value {
            sink(&format!("{label}: {value}"));
        }
    }

    let docs = ProjectDocuments::load(input.dir(), &mut sink);
    let run = run_validation(input.name(), &docs, &profile, &mut sink);
    drop(sink);

    if json_output {
        let payload = json!({
            "project": input.name(),
            "profile": profile.name,
            "passed": run.report.passed(),
            "total_access_points": run.report.total_access_points,
            "outcomes": &run.report.outcomes,
            "messages": lines,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    }

    if !run.report.passed() {
        std::process::exit(1);
    }
}

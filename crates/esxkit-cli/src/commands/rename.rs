use crate::support::{RENAMED_PROJECT_APPENDIX, open_project_or_exit};
use esxkit_model::{
    FloorPlanIndex, ProjectDocuments, RenameOrder, load, rename_access_points, repack_project,
};
use std::fs;
use std::path::PathBuf;

pub fn run(project: String, order: String, output: Option<String>) {
    let Some(order) = RenameOrder::parse(&order) else {
        eprintln!(
            "error: unknown rename order '{order}' (expected one of: {})",
            RenameOrder::ALL
                .map(RenameOrder::name)
                .join(", ")
        );
        std::process::exit(2);
    };

    let input = open_project_or_exit(&project);
    let mut sink = |message: &str| println!("{message}");
    let docs = ProjectDocuments::load(input.dir(), &mut sink);

    let Some(mut access_points) = docs.access_points else {
        eprintln!("error: {} contains no access points document", input.name());
        std::process::exit(2);
    };
    let floor_plans = docs
        .floor_plans
        .as_ref()
        .map(FloorPlanIndex::build)
        .unwrap_or_default();

    let renamed = rename_access_points(&mut access_points, order, &floor_plans, &mut sink);

    let rendered =
        serde_json::to_string_pretty(&access_points).expect("document serialization");
    let document_path = input.dir().join(load::ACCESS_POINTS_FILE);
    if let Err(err) = fs::write(&document_path, rendered) {
        eprintln!("error: failed to write {}: {err}", document_path.display());
        std::process::exit(2);
    }

    match input.bundle_path() {
        Some(bundle) => {
            let target = output.map(PathBuf::from).unwrap_or_else(|| {
                let stem = bundle.file_stem().unwrap_or_default().to_string_lossy();
                bundle.with_file_name(format!("{stem}{RENAMED_PROJECT_APPENDIX}.esx"))
            });
            if let Err(err) = repack_project(input.dir(), &target) {
                eprintln!("error: failed to repack {}: {err}", target.display());
                std::process::exit(2);
            }
            println!("\n{renamed} APs renamed, re-bundled into {}", target.display());
        }
        None => {
            println!("\n{renamed} APs renamed in {}", document_path.display());
        }
    }
}

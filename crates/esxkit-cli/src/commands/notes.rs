use crate::support::open_project_or_exit;
use esxkit_model::{
    FloorPlanIndex, NoteIndex, PictureNotesDoc, ProjectDocuments, flatten_picture_notes,
};

pub fn run(project: String) {
    let input = open_project_or_exit(&project);

    let mut sink = |message: &str| eprintln!("{message}");
    let docs = ProjectDocuments::load(input.dir(), &mut sink);

    let floor_plans = docs
        .floor_plans
        .as_ref()
        .map(FloorPlanIndex::build)
        .unwrap_or_default();
    let notes = docs.notes.as_ref().map(NoteIndex::build).unwrap_or_default();
    let picture_notes = docs.picture_notes.clone().unwrap_or_else(PictureNotesDoc::default);

    let rows = flatten_picture_notes(&picture_notes, &notes, &floor_plans);
    println!(
        "{}",
        serde_json::to_string_pretty(&rows).expect("json serialization")
    );
}

use crate::model::Project;

/// Case-insensitive substring filter over project name and path.
/// An empty query matches everything.
pub fn filter_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|project| {
            project.name.to_lowercase().contains(&needle)
                || project
                    .path
                    .to_string_lossy()
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

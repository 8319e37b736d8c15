//! DOM contract with the host page.
//!
//! The host provides the empty `#vessel-contents` container and the viewer
//! renders everything inside it, so every inner id appears in exactly one
//! `view!` attribute and the container id in none.

use std::fs;
use std::path::Path;

const RENDERED_IDS: &[&str] = &["CONTENTS_LIST_ID", "CURRENT_PAGE_ID", "PREV_PAGE_ID", "NEXT_PAGE_ID"];
const HOST_IDS: &[&str] = &["PANEL_ID"];

fn component_sources() -> Vec<String> {
    let Ok(entries) = fs::read_dir(Path::new("src/components")) else {
        return Vec::new();
    };
    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            let name = path.to_string_lossy();
            name.ends_with(".rs") && !name.ends_with("_test.rs")
        })
        .filter_map(|path| fs::read_to_string(path).ok())
        .collect()
}

fn id_attribute_count(sources: &[String], constant: &str) -> usize {
    let attribute = format!("id={constant}");
    sources
        .iter()
        .flat_map(|source| source.lines())
        .filter(|line| line.trim() == attribute || line.contains(&format!("{attribute} ")) || line.contains(&format!("{attribute}>")))
        .count()
}

#[test]
fn components_are_scanned() {
    assert!(component_sources().len() >= 2, "src/components not found");
}

#[test]
fn each_rendered_id_appears_once() {
    let sources = component_sources();
    for constant in RENDERED_IDS {
        assert_eq!(id_attribute_count(&sources, constant), 1, "id={constant}");
    }
}

#[test]
fn host_container_id_is_never_rendered() {
    let sources = component_sources();
    for constant in HOST_IDS {
        assert_eq!(id_attribute_count(&sources, constant), 0, "id={constant}");
    }
}

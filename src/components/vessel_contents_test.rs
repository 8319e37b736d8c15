use super::*;
use crate::state::viewer::{ContentsPage, VesselRef};

#[test]
fn panel_title_names_selected_vessel() {
    let mut state = ViewerState::default();
    assert_eq!(panel_title(&state), "Vessel contents");
    state.select_vessel(VesselRef::from("V7"));
    assert_eq!(panel_title(&state), "Contents of V7");
}

#[test]
fn visible_rows_is_empty_before_first_render() {
    assert!(visible_rows(&ViewerState::default()).is_empty());
}

#[test]
fn visible_rows_survive_hiding() {
    let row = ContentRow {
        item_name: "Tiles".to_owned(),
        quantity: "80".to_owned(),
    };
    let mut state = ViewerState {
        rendered: Some(ContentsPage {
            rows: vec![row.clone()],
            page: 1,
            prev_disabled: true,
            next_disabled: true,
        }),
        visible: true,
        ..ViewerState::default()
    };
    state.hide();
    assert_eq!(visible_rows(&state), vec![row]);
}

use super::*;
use serde_json::json;

#[test]
fn content_item_decodes_spreadsheet_column_names() {
    let item: ContentItem = serde_json::from_value(json!({
        "Item Name": "Steel coil",
        "Quantity": 12,
        "Vessel ID": "V1"
    }))
    .unwrap();
    assert_eq!(item.item_name_text(), "Steel coil");
    assert_eq!(item.quantity_text(), "12");
}

#[test]
fn content_list_decodes_from_json_array() {
    let items: Vec<ContentItem> = serde_json::from_str(
        r#"[{"Item Name":"Rice","Quantity":"40 bags"},{"Item Name":"Tea","Quantity":3.5}]"#,
    )
    .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].quantity_text(), "40 bags");
    assert_eq!(items[1].quantity_text(), "3.5");
}

#[test]
fn empty_array_decodes_to_empty_list() {
    let items: Vec<ContentItem> = serde_json::from_str("[]").unwrap();
    assert!(items.is_empty());
}

#[test]
fn missing_fields_render_as_empty_cells() {
    let item: ContentItem = serde_json::from_str("{}").unwrap();
    assert_eq!(item.item_name_text(), "");
    assert_eq!(item.quantity_text(), "");
}

#[test]
fn cell_text_renders_values_verbatim() {
    assert_eq!(cell_text(Some(&json!("Crates"))), "Crates");
    assert_eq!(cell_text(Some(&json!(7))), "7");
    assert_eq!(cell_text(Some(&json!(-2))), "-2");
    assert_eq!(cell_text(Some(&json!(u64::MAX))), u64::MAX.to_string());
    assert_eq!(cell_text(Some(&json!(5.0))), "5");
    assert_eq!(cell_text(Some(&json!(0.25))), "0.25");
    assert_eq!(cell_text(Some(&json!(true))), "true");
    assert_eq!(cell_text(Some(&Value::Null)), "null");
    assert_eq!(cell_text(None), "");
}

#[test]
fn cell_text_renders_nested_values_as_compact_json() {
    assert_eq!(cell_text(Some(&json!([1, 2]))), "[1,2]");
    assert_eq!(cell_text(Some(&json!({"a": 1}))), r#"{"a":1}"#);
}

#[test]
fn explicit_null_field_renders_literal_null() {
    let item: ContentItem = serde_json::from_str(r#"{"Item Name":"Rice","Quantity":null}"#).unwrap();
    assert_eq!(item.quantity, Some(Value::Null));
    assert_eq!(item.item_name_text(), "Rice");
    assert_eq!(item.quantity_text(), "null");
}

#[test]
fn missing_field_stays_absent_next_to_null_field() {
    let item: ContentItem = serde_json::from_str(r#"{"Item Name":null}"#).unwrap();
    assert_eq!(item.item_name_text(), "null");
    assert_eq!(item.quantity, None);
    assert_eq!(item.quantity_text(), "");
}

#[test]
fn float_text_matches_browser_number_formatting() {
    assert_eq!(float_text(1e21), "1e+21");
    assert_eq!(float_text(2.5e22), "2.5e+22");
    assert_eq!(float_text(1.5e-7), "1.5e-7");
    assert_eq!(float_text(-0.0), "0");
    assert_eq!(float_text(1e20), "100000000000000000000");
    assert_eq!(float_text(0.000_001), "0.000001");
    assert_eq!(float_text(-12.75), "-12.75");
}

#[test]
fn large_and_negative_zero_quantities_render_like_browser() {
    assert_eq!(cell_text(Some(&json!(1e21))), "1e+21");
    assert_eq!(cell_text(Some(&json!(-0.0))), "0");
}

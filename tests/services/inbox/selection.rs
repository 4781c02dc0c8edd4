use messaging_client::application::inbox::{aggregate, select_after_refresh};

use super::helpers::VIEWER;
use crate::common::fixtures::{record, sample_snapshot};

#[test]
fn previous_selection_survives_a_refresh() {
    let conversations = aggregate(&sample_snapshot(), VIEWER);

    let selected = select_after_refresh(Some("12"), &conversations);

    assert_eq!(
        selected.map(|conversation| conversation.counterpart_id.as_str()),
        Some("12")
    );
}

#[test]
fn selection_follows_the_counterpart_even_when_its_position_changes() {
    let conversations = aggregate(&sample_snapshot(), VIEWER);
    assert_eq!(conversations[1].counterpart_id, "12");

    // A newer message from "12" moves that thread to the front.
    let mut records = sample_snapshot();
    records.push(record(4, "12", "7", "2024-01-01T12:00:00Z", false));
    let refreshed = aggregate(&records, VIEWER);
    assert_eq!(refreshed[0].counterpart_id, "12");

    let selected = select_after_refresh(Some("12"), &refreshed);

    assert_eq!(
        selected.map(|conversation| conversation.counterpart_id.as_str()),
        Some("12")
    );
    assert_eq!(selected.map(|conversation| conversation.last_message.id), Some(4));
}

#[test]
fn vanished_counterpart_yields_no_selection() {
    let records = vec![record(2, "9", "7", "2024-01-01T10:05:00Z", false)];
    let conversations = aggregate(&records, VIEWER);

    assert!(select_after_refresh(Some("12"), &conversations).is_none());
}

#[test]
fn no_previous_selection_defaults_to_the_most_recent_thread() {
    let conversations = aggregate(&sample_snapshot(), VIEWER);

    let selected = select_after_refresh(None, &conversations);

    assert_eq!(
        selected.map(|conversation| conversation.counterpart_id.as_str()),
        Some("9")
    );
}

#[test]
fn empty_list_yields_no_selection() {
    assert!(select_after_refresh(None, &[]).is_none());
    assert!(select_after_refresh(Some("9"), &[]).is_none());
}

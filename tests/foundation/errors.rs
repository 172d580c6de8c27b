//! Integration tests for the error taxonomy.

use limeforge_foundation::{EntityKey, Error, ErrorKind};

#[test]
fn every_pipeline_failure_has_a_distinct_kind() {
    assert!(matches!(
        Error::unknown_class("Widget").kind,
        ErrorKind::UnknownClass(_)
    ));
    assert!(matches!(
        Error::unknown_kind("Widget").kind,
        ErrorKind::UnknownKind(_)
    ));
    assert!(matches!(
        Error::entity_not_found(EntityKey::new(1)).kind,
        ErrorKind::EntityNotFound(_)
    ));
    assert!(matches!(
        Error::missing_reference("World", "constructor").kind,
        ErrorKind::MissingReference { .. }
    ));
    assert!(matches!(
        Error::unhandled_kind("Event", "RenamePass").kind,
        ErrorKind::UnhandledKind { .. }
    ));
    assert!(matches!(
        Error::unsupported_body_kind("blocks").kind,
        ErrorKind::UnsupportedBodyKind(_)
    ));
}

#[test]
fn messages_carry_the_offending_names() {
    let err = Error::missing_reference("Project", "starting_world");
    let msg = format!("{err}");
    assert!(msg.contains("Project"));
    assert!(msg.contains("starting_world"));

    let err = Error::unsupported_body_kind("blocks");
    assert!(format!("{err}").contains("blocks"));
}

use std::sync::Arc;

use super::common::*;

use crate::assembly::repository::{BuildId, RepositoryError};
use crate::assembly::service::{BuildServiceError, BuildSessionService};
use crate::assembly::store::{BuildError, BuildSettings};
use crate::assembly::zone::Zone;

#[test]
fn create_stores_an_empty_build() {
    let (service, repository) = build_service();
    let record = service.create().expect("build created");

    assert!(record.id.0.starts_with("build-"));
    assert!(record.store.placed_parts().is_empty());
    assert!(repository.stored(&record.id).is_some());
}

#[test]
fn build_ids_are_unique() {
    let (service, _) = build_service();
    let first = service.create().expect("first build");
    let second = service.create().expect("second build");
    assert_ne!(first.id, second.id);
}

#[test]
fn placements_are_persisted() {
    let (service, repository) = build_service();
    let record = service.create().expect("build created");

    let updated = service
        .place(&record.id, &pid("cpu-1"), Zone::CPU)
        .expect("cpu fits");
    assert!(updated.store.placed_parts().is_occupied(Zone::CPU));

    let stored = repository.stored(&record.id).expect("record kept");
    assert!(stored.placed_parts().is_occupied(Zone::CPU));
}

#[test]
fn rejections_are_returned_and_remembered() {
    let (service, repository) = build_service();
    let record = service.create().expect("build created");

    let error = service
        .place(&record.id, &pid("cooler-1"), Zone::COOLER)
        .expect_err("cooler needs a cpu");
    assert!(matches!(
        error,
        BuildServiceError::Build(BuildError::Rejected(_))
    ));

    let stored = repository.stored(&record.id).expect("record kept");
    assert_eq!(
        stored.validation_error(),
        Some("Install CPU first before mounting cooler")
    );
    assert!(stored.placed_parts().is_empty());
}

#[test]
fn cpu_removal_is_blocked_by_cooler() {
    let (service, _) = build_service();
    let id = service.create().expect("build created").id;
    service
        .place(&id, &pid("cpu-1"), Zone::CPU)
        .expect("cpu fits");
    service
        .place(&id, &pid("cooler-1"), Zone::COOLER)
        .expect("cooler fits");

    let error = service.remove(&id, Zone::CPU).expect_err("cooler attached");
    assert!(matches!(
        error,
        BuildServiceError::Build(BuildError::CoolerAttached)
    ));

    service.remove(&id, Zone::COOLER).expect("cooler removed");
    let record = service.remove(&id, Zone::CPU).expect("cpu removed");
    assert!(record.store.placed_parts().is_empty());
}

#[test]
fn random_then_reset() {
    let (service, _) = build_service();
    let id = service.create().expect("build created").id;

    let random = service.random_build(&id).expect("random build");
    assert!(random.store.is_system_ready());

    let reset = service.reset(&id).expect("reset");
    assert!(reset.store.placed_parts().is_empty());
}

#[test]
fn selection_round_trip() {
    let (service, _) = build_service();
    let id = service.create().expect("build created").id;

    let selected = service.select_part(&id, &pid("m2-2")).expect("selected");
    assert_eq!(selected.store.selected_part(), Some(&pid("m2-2")));

    let placed = service.place_selected(&id, Zone::M2_2).expect("placed");
    assert!(placed.store.placed_parts().is_occupied(Zone::M2_2));
    assert_eq!(placed.store.selected_part(), None);

    service.select_part(&id, &pid("hdd-1")).expect("selected");
    let cleared = service.clear_selection(&id).expect("cleared");
    assert_eq!(cleared.store.selected_part(), None);
}

#[test]
fn unknown_builds_are_not_found() {
    let (service, _) = build_service();
    let missing = BuildId("build-missing".to_string());

    assert!(matches!(
        service.get(&missing),
        Err(BuildServiceError::Repository(RepositoryError::NotFound))
    ));
    assert!(matches!(
        service.reset(&missing),
        Err(BuildServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn repository_outages_propagate() {
    let service = BuildSessionService::new(
        Arc::new(UnavailableRepository),
        catalog(),
        BuildSettings::default(),
    );
    assert!(matches!(
        service.create(),
        Err(BuildServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[test]
fn sessions_inherit_service_settings() {
    let settings = BuildSettings {
        error_display_ms: 250,
        random_build_min_psu_watts: 1_000,
    };
    let service =
        BuildSessionService::new(Arc::new(MemoryRepository::default()), catalog(), settings);
    let id = service.create().expect("build created").id;

    let record = service.random_build(&id).expect("random build");
    assert_eq!(record.store.settings(), settings);
    assert_eq!(
        record
            .store
            .placed_parts()
            .get(Zone::PSU)
            .map(|psu| psu.id.as_str()),
        Some("psu-3")
    );
}

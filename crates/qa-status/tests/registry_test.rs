use qa_core::{Detector, EventSpecie, QaBit, QaError, Task, TaskIndex};
use qa_status::{QaStatus, RawTarget, Stage};

fn raw(detector: i32, task: i32, index: Option<i32>, specie: u32, bit: i32) -> RawTarget {
    RawTarget {
        detector,
        task,
        index,
        specie,
        bit,
    }
}

#[test]
fn fresh_registry_is_empty() {
    let status = QaStatus::new();
    assert!(!status.check_fatal());
    for &det in Detector::ALL {
        for &specie in EventSpecie::ALL {
            assert!(!status.is_set_any(det, specie));
            assert!(status.status(det, specie).is_empty());
        }
    }
    assert_eq!(status.event_species().count(), 0);
}

#[test]
fn set_then_unset_every_valid_combination() {
    let mut status = QaStatus::new();
    for &det in Detector::ALL {
        for stage in Stage::ALL {
            for &specie in EventSpecie::ALL {
                for &bit in QaBit::ALL {
                    status.set(det, stage, specie, bit);
                    assert!(status.is_set(det, stage, specie, bit));
                    status.unset(det, stage, specie, bit);
                    assert!(!status.is_set(det, stage, specie, bit));
                }
            }
        }
    }
    assert_eq!(status, QaStatus::new());
}

#[test]
fn species_are_tracked_independently() {
    let mut status = QaStatus::new();
    status.set(Detector::Tpc, TaskIndex::RecPoints, EventSpecie::Cosmic, QaBit::Error);
    assert!(status.is_set(Detector::Tpc, TaskIndex::RecPoints, EventSpecie::Cosmic, QaBit::Error));
    assert!(!status.is_set(Detector::Tpc, TaskIndex::RecPoints, EventSpecie::Default, QaBit::Error));
    assert!(!status.is_set_any(Detector::Tpc, EventSpecie::Default));
    assert!(!status.is_set_any(Detector::Its, EventSpecie::Cosmic));
}

#[test]
fn task_level_and_index_stages_are_separate() {
    let mut status = QaStatus::new();
    status.set(Detector::Its, Task::Rec, EventSpecie::Default, QaBit::Warning);
    assert!(status.is_set(Detector::Its, Task::Rec, EventSpecie::Default, QaBit::Warning));
    assert!(!status.is_set(Detector::Its, TaskIndex::RecPoints, EventSpecie::Default, QaBit::Warning));
}

#[test]
fn is_set_any_in_task_covers_all_indices_of_the_task() {
    let mut status = QaStatus::new();
    status.set(Detector::Phos, TaskIndex::Digits, EventSpecie::Default, QaBit::Info);

    assert!(status.is_set_any_in_task(Detector::Phos, Task::Sim, EventSpecie::Default));
    assert!(!status.is_set_any_in_task(Detector::Phos, Task::Rec, EventSpecie::Default));
    assert!(!status.is_set_any_in_task(Detector::Phos, Task::Sim, EventSpecie::Calib));
    assert!(status.is_set_any(Detector::Phos, EventSpecie::Default));
}

#[test]
fn check_fatal_sees_fatal_anywhere() {
    for &det in Detector::ALL {
        for stage in Stage::ALL {
            let mut status = QaStatus::new();
            status.set(det, stage, EventSpecie::Calib, QaBit::Error);
            assert!(!status.check_fatal());
            status.set(det, stage, EventSpecie::Calib, QaBit::Fatal);
            assert!(status.check_fatal(), "{det} {stage}");
        }
    }
}

#[test]
fn set_raw_applies_valid_targets() {
    let mut status = QaStatus::new();
    status.set_raw(raw(7, 2, Some(5), 8, 2)).unwrap();
    assert!(status.is_set(Detector::Muon, TaskIndex::TrackSegments, EventSpecie::Cosmic, QaBit::Error));
    assert!(status.is_set_raw(raw(7, 2, Some(5), 8, 2)));

    status.unset_raw(raw(7, 2, Some(5), 8, 2)).unwrap();
    assert!(!status.is_set_raw(raw(7, 2, Some(5), 8, 2)));
}

#[test]
fn out_of_range_raw_requests_leave_table_unchanged() {
    let mut status = QaStatus::new();
    status.set(Detector::Zdc, Task::Esd, EventSpecie::Default, QaBit::Info);
    let before = status.clone();

    let cases = [
        (raw(17, 0, None, 1, 0), "detector_out_of_range"),
        (raw(-1, 0, None, 1, 0), "detector_out_of_range"),
        (raw(0, 5, None, 1, 0), "task_out_of_range"),
        (raw(0, 1, Some(8), 1, 0), "task_index_out_of_range"),
        (raw(0, 0, Some(1), 1, 0), "task_mismatch"),
        (raw(0, 0, None, 3, 0), "event_specie_out_of_range"),
        (raw(0, 0, None, 64, 0), "event_specie_out_of_range"),
        (raw(0, 0, None, 1, 4), "bit_out_of_range"),
        (raw(0, 0, None, 1, -1), "bit_out_of_range"),
    ];
    for (target, code) in cases {
        let err = status.set_raw(target).unwrap_err();
        assert_eq!(err.error_code(), code, "{target:?}");
        assert_eq!(status.unset_raw(target).unwrap_err().error_code(), code);
        assert!(!status.is_set_raw(target));
        assert_eq!(status, before);
    }
}

#[test]
fn raw_task_mismatch_reports_both_tasks() {
    let err = raw(0, 3, Some(0), 1, 0).resolve().unwrap_err();
    assert!(matches!(err, QaError::TaskMismatch { ref expected, ref given, .. }
        if expected == "RAW" && given == "ESD"));
}

#[test]
fn scope_binds_detector_and_stage() {
    let mut status = QaStatus::new();
    {
        let mut scope = status.scope(Detector::Emcal, TaskIndex::Hits);
        scope
            .set(QaBit::Info, EventSpecie::Default)
            .set(QaBit::Warning, EventSpecie::Default)
            .set(QaBit::Fatal, EventSpecie::LowMultiplicity)
            .unset(QaBit::Info, EventSpecie::Default);
        assert_eq!(scope.detector(), Detector::Emcal);
        assert_eq!(scope.stage(), Stage::from(TaskIndex::Hits));
        assert!(scope.is_set(QaBit::Warning, EventSpecie::Default));
        assert_eq!(scope.raised(EventSpecie::Default), vec![QaBit::Warning]);
    }
    assert!(status.is_set(Detector::Emcal, TaskIndex::Hits, EventSpecie::LowMultiplicity, QaBit::Fatal));
    assert!(status.check_fatal());
}

#[test]
fn reset_detector_clears_only_that_detector() {
    let mut status = QaStatus::new();
    status.set(Detector::Fmd, Task::Raw, EventSpecie::Default, QaBit::Fatal);
    status.set(Detector::Fmd, Task::Ana, EventSpecie::Calib, QaBit::Info);
    status.set(Detector::Pmd, Task::Raw, EventSpecie::Default, QaBit::Error);
    status.mark_event_specie(EventSpecie::Calib);

    status.reset_detector(Detector::Fmd);
    assert!(!status.is_set_any(Detector::Fmd, EventSpecie::Default));
    assert!(!status.is_set_any(Detector::Fmd, EventSpecie::Calib));
    assert!(status.is_set_any(Detector::Pmd, EventSpecie::Default));
    assert!(status.is_event_specie_set(EventSpecie::Calib));

    status.reset();
    assert_eq!(status, QaStatus::new());
}

#[test]
fn event_species_are_recorded() {
    let mut status = QaStatus::new();
    status.mark_event_specie(EventSpecie::Cosmic);
    status.mark_event_specie(EventSpecie::Default);
    status.mark_event_specie(EventSpecie::Cosmic);
    assert!(status.is_event_specie_set(EventSpecie::Cosmic));
    assert!(!status.is_event_specie_set(EventSpecie::Calib));
    assert_eq!(
        status.event_species().collect::<Vec<_>>(),
        vec![EventSpecie::Default, EventSpecie::Cosmic]
    );
}

#[test]
fn registry_serializes_for_external_persistence() {
    let mut status = QaStatus::new();
    status.set(Detector::Hlt, TaskIndex::Esds, EventSpecie::HighMultiplicity, QaBit::Warning);
    status.mark_event_specie(EventSpecie::HighMultiplicity);

    let json = serde_json::to_string(&status).unwrap();
    let restored: QaStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, status);
}

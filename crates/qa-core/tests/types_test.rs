use qa_core::types::*;
use qa_core::QaError;

#[test]
fn detector_table_has_seventeen_entries_in_fixed_order() {
    assert_eq!(Detector::COUNT, 17);
    assert_eq!(Detector::ALL[0], Detector::Its);
    assert_eq!(Detector::ALL[16], Detector::Corr);
    for (i, det) in Detector::ALL.iter().enumerate() {
        assert_eq!(det.index(), i);
    }
}

#[test]
fn detector_names_resolve_both_ways() {
    assert_eq!(Detector::Global.name(), "Global");
    assert_eq!(Detector::from_name("MUON").unwrap(), Detector::Muon);
    assert_eq!(Detector::from_name("vzero").unwrap(), Detector::Vzero);
    assert_eq!("T0".parse::<Detector>().unwrap(), Detector::T0);
    for &det in Detector::ALL {
        assert_eq!(Detector::from_name(det.name()).unwrap(), det);
    }
}

#[test]
fn unknown_detector_name_is_rejected() {
    let err = Detector::from_name("CALO").unwrap_err();
    assert_eq!(
        err,
        QaError::UnknownName {
            kind: "detector",
            name: "CALO".into()
        }
    );
}

#[test]
fn raw_detector_out_of_range_is_rejected() {
    assert_eq!(Detector::try_from(0).unwrap(), Detector::Its);
    assert_eq!(Detector::try_from(16).unwrap(), Detector::Corr);
    assert!(matches!(
        Detector::try_from(-1),
        Err(QaError::DetectorOutOfRange { value: -1, max: 17 })
    ));
    assert!(matches!(
        Detector::try_from(17),
        Err(QaError::DetectorOutOfRange { value: 17, .. })
    ));
}

#[test]
fn every_task_index_belongs_to_exactly_one_task() {
    for &index in TaskIndex::ALL {
        let owners: Vec<Task> = Task::ALL
            .iter()
            .copied()
            .filter(|t| t.indices().contains(&index))
            .collect();
        assert_eq!(owners, vec![index.task()], "{index}");
    }
    assert!(Task::Ana.indices().is_empty());
}

#[test]
fn task_index_position_follows_declaration_order() {
    assert_eq!(TaskIndex::Hits.position(), 0);
    assert_eq!(TaskIndex::SDigits.position(), 1);
    assert_eq!(TaskIndex::Digits.position(), 2);
    assert_eq!(TaskIndex::RecParticles.position(), 2);
    assert_eq!(TaskIndex::Esds.position(), 0);
}

#[test]
fn ensure_task_rejects_foreign_index() {
    assert!(TaskIndex::Digits.ensure_task(Task::Sim).is_ok());
    let err = TaskIndex::Digits.ensure_task(Task::Rec).unwrap_err();
    assert_eq!(err.error_code(), "task_mismatch");
    let msg = err.to_string();
    assert!(msg.contains("Digits"));
    assert!(msg.contains("SIM"));
    assert!(msg.contains("REC"));
}

#[test]
fn task_names_match_pipeline_labels() {
    let names: Vec<&str> = Task::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["RAW", "SIM", "REC", "ESD", "ANA"]);
    assert_eq!(TaskIndex::from_name("esds").unwrap(), TaskIndex::Esds);
    assert_eq!(TaskIndex::Esds.to_string(), "ESDs");
}

#[test]
fn event_specie_bits_are_powers_of_two() {
    assert_eq!(EventSpecie::Default.bits(), 1);
    assert_eq!(EventSpecie::LowMultiplicity.bits(), 2);
    assert_eq!(EventSpecie::HighMultiplicity.bits(), 4);
    assert_eq!(EventSpecie::Cosmic.bits(), 8);
    assert_eq!(EventSpecie::Calib.bits(), 16);
    for &specie in EventSpecie::ALL {
        assert_eq!(EventSpecie::from_bits(specie.bits()).unwrap(), specie);
    }
}

#[test]
fn event_specie_from_bits_rejects_masks_and_unknown_bits() {
    for bits in [0, 3, 12, 32, 1 << 31] {
        assert!(
            matches!(
                EventSpecie::from_bits(bits),
                Err(QaError::EventSpecieOutOfRange { .. })
            ),
            "bits {bits:#x}"
        );
    }
}

#[test]
fn event_specie_from_mask_picks_known_bits() {
    let species: Vec<EventSpecie> = EventSpecie::from_mask(0b1_0101 | 0x100).collect();
    assert_eq!(
        species,
        vec![EventSpecie::Default, EventSpecie::HighMultiplicity, EventSpecie::Calib]
    );
}

#[test]
fn qa_bits_are_ordered_by_severity() {
    assert!(QaBit::Info < QaBit::Warning);
    assert!(QaBit::Error < QaBit::Fatal);
    assert_eq!(QaBit::Fatal.nibble_mask(), 0b1000);
    assert!(matches!(QaBit::try_from(4), Err(QaError::BitOutOfRange { value: 4, max: 4 })));
}

#[test]
fn decode_nibble_lists_accumulated_bits() {
    let bits: Vec<QaBit> = QaBit::decode_nibble(0b1010).collect();
    assert_eq!(bits, vec![QaBit::Warning, QaBit::Fatal]);
    assert_eq!(QaBit::decode_nibble(0).count(), 0);
}

#[test]
fn enums_serialize_as_labels() {
    let value = toml::Value::try_from(Detector::Hmpid).unwrap();
    assert_eq!(value.as_str(), Some("HMPID"));
    let back: TaskIndex = toml::Value::String("RecPoints".into()).try_into().unwrap();
    assert_eq!(back, TaskIndex::RecPoints);
}

qa_enum! {
    /// A detector subsystem that reports QA status.
    Detector, kind = "detector" {
        Its => "ITS",
        Tpc => "TPC",
        Trd => "TRD",
        Tof => "TOF",
        Phos => "PHOS",
        Hmpid => "HMPID",
        Emcal => "EMCAL",
        Muon => "MUON",
        Fmd => "FMD",
        Zdc => "ZDC",
        Pmd => "PMD",
        T0 => "T0",
        Vzero => "VZERO",
        Acorde => "ACORDE",
        Hlt => "HLT",
        /// Cross-detector global QA.
        Global => "Global",
        /// Correlation QA across detectors.
        Corr => "CORR",
    }
}

try_from_index!(Detector, DetectorOutOfRange);

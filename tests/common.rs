#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftreport::models::{OrientationFlags, Record};
use std::path::{Path, PathBuf};

pub fn srp() -> Command {
    cargo_bin_cmd!("shiftreport")
}

/// Binary with `--config` pointing inside `dir`, so the user's own file is never read.
pub fn srp_in(dir: &Path) -> Command {
    let mut cmd = srp();
    cmd.arg("--config").arg(config_path(dir));
    cmd
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("shiftreport.conf")
}

pub fn out_path(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().to_string()
}

/// A fully filled record used across tests.
pub fn sample_record() -> Record {
    Record {
        nurse: "Alex RN".into(),
        date: "2025-03-14".into(),
        shift: "Night".into(),
        patient_name: "Jane Doe".into(),
        room: "12B".into(),
        diagnosis: "Community-acquired pneumonia".into(),
        code_status: "R1".into(),
        allergies: "Penicillin".into(),
        isolation: "Droplet".into(),
        history: "COPD, HTN".into(),
        fall_risk: true,
        bed_alarm: true,
        orientation: OrientationFlags {
            person: true,
            place: true,
            time: false,
            situation: true,
        },
        vitals: "BP 128/76, HR 88, SpO2 94% 2L".into(),
        pain: "3/10 chest wall".into(),
        mobility: "Assist x1 with walker".into(),
        wounds: "Sacral stage 1".into(),
        meds: "Ceftriaxone 2200".into(),
        io: "1200/900".into(),
        bowel_bladder: "Continent, BM today".into(),
        tasks: "Repeat CXR in AM".into(),
        prns: "Acetaminophen 1900".into(),
        appointments_today: "PT 1400".into(),
        appointments_upcoming: "Pulm clinic Friday".into(),
        transport_arranged: true,
        notes: "Daughter is primary contact".into(),
    }
}

use crate::models::field::{FieldId, FieldValue, OrientationFlag};
use serde::{Deserialize, Serialize};

/// Alert & oriented checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationFlags {
    pub person: bool,
    pub place: bool,
    pub time: bool,
    pub situation: bool,
}

impl OrientationFlags {
    pub fn get(&self, flag: OrientationFlag) -> bool {
        match flag {
            OrientationFlag::Person => self.person,
            OrientationFlag::Place => self.place,
            OrientationFlag::Time => self.time,
            OrientationFlag::Situation => self.situation,
        }
    }

    /// Copy with a single flag replaced.
    pub fn with(self, flag: OrientationFlag, value: bool) -> Self {
        let mut out = self;
        match flag {
            OrientationFlag::Person => out.person = value,
            OrientationFlag::Place => out.place = value,
            OrientationFlag::Time => out.time = value,
            OrientationFlag::Situation => out.situation = value,
        }
        out
    }

    /// Flags that are set, in enumeration order.
    pub fn oriented_to(&self) -> Vec<OrientationFlag> {
        OrientationFlag::ALL
            .iter()
            .copied()
            .filter(|f| self.get(*f))
            .collect()
    }
}

/// One shift handoff record (SBAR grouping).
///
/// Every field is always defined: strings default to `""`, booleans to
/// `false`, and `isolation` to `"None"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    // Situation
    pub nurse: String,
    pub date: String,
    pub shift: String,
    pub patient_name: String,
    pub room: String,
    pub diagnosis: String,
    pub code_status: String,
    pub allergies: String,
    pub isolation: String,
    // Background
    pub history: String,
    pub fall_risk: bool,
    pub bed_alarm: bool,
    // Assessment
    pub orientation: OrientationFlags,
    pub vitals: String,
    pub pain: String,
    pub mobility: String,
    pub wounds: String,
    pub meds: String,
    pub io: String,
    pub bowel_bladder: String,
    // Recommendation
    pub tasks: String,
    pub prns: String,
    pub appointments_today: String,
    pub appointments_upcoming: String,
    pub transport_arranged: bool,
    pub notes: String,
}

pub const DEFAULT_ISOLATION: &str = "None";

impl Default for Record {
    fn default() -> Self {
        Self {
            nurse: String::new(),
            date: String::new(),
            shift: String::new(),
            patient_name: String::new(),
            room: String::new(),
            diagnosis: String::new(),
            code_status: String::new(),
            allergies: String::new(),
            isolation: DEFAULT_ISOLATION.to_string(),
            history: String::new(),
            fall_risk: false,
            bed_alarm: false,
            orientation: OrientationFlags::default(),
            vitals: String::new(),
            pain: String::new(),
            mobility: String::new(),
            wounds: String::new(),
            meds: String::new(),
            io: String::new(),
            bowel_bladder: String::new(),
            tasks: String::new(),
            prns: String::new(),
            appointments_today: String::new(),
            appointments_upcoming: String::new(),
            transport_arranged: false,
            notes: String::new(),
        }
    }
}

impl Record {
    /// Text value of a string field; `None` for boolean fields.
    pub fn text(&self, field: FieldId) -> Option<&str> {
        self.text_slot(field).map(String::as_str)
    }

    /// Value of a boolean field; `None` for string fields.
    pub fn flag(&self, field: FieldId) -> Option<bool> {
        match field {
            FieldId::FallRisk => Some(self.fall_risk),
            FieldId::BedAlarm => Some(self.bed_alarm),
            FieldId::TransportArranged => Some(self.transport_arranged),
            _ => None,
        }
    }

    pub fn value(&self, field: FieldId) -> FieldValue {
        match self.flag(field) {
            Some(b) => FieldValue::Flag(b),
            None => FieldValue::Text(self.text(field).unwrap_or_default().to_string()),
        }
    }

    fn text_slot(&self, field: FieldId) -> Option<&String> {
        let slot = match field {
            FieldId::Nurse => &self.nurse,
            FieldId::Date => &self.date,
            FieldId::Shift => &self.shift,
            FieldId::PatientName => &self.patient_name,
            FieldId::Room => &self.room,
            FieldId::Diagnosis => &self.diagnosis,
            FieldId::CodeStatus => &self.code_status,
            FieldId::Allergies => &self.allergies,
            FieldId::Isolation => &self.isolation,
            FieldId::History => &self.history,
            FieldId::Vitals => &self.vitals,
            FieldId::Pain => &self.pain,
            FieldId::Mobility => &self.mobility,
            FieldId::Wounds => &self.wounds,
            FieldId::Meds => &self.meds,
            FieldId::Io => &self.io,
            FieldId::BowelBladder => &self.bowel_bladder,
            FieldId::Tasks => &self.tasks,
            FieldId::Prns => &self.prns,
            FieldId::AppointmentsToday => &self.appointments_today,
            FieldId::AppointmentsUpcoming => &self.appointments_upcoming,
            FieldId::Notes => &self.notes,
            FieldId::FallRisk | FieldId::BedAlarm | FieldId::TransportArranged => return None,
        };
        Some(slot)
    }

    pub(crate) fn text_slot_mut(&mut self, field: FieldId) -> Option<&mut String> {
        let slot = match field {
            FieldId::Nurse => &mut self.nurse,
            FieldId::Date => &mut self.date,
            FieldId::Shift => &mut self.shift,
            FieldId::PatientName => &mut self.patient_name,
            FieldId::Room => &mut self.room,
            FieldId::Diagnosis => &mut self.diagnosis,
            FieldId::CodeStatus => &mut self.code_status,
            FieldId::Allergies => &mut self.allergies,
            FieldId::Isolation => &mut self.isolation,
            FieldId::History => &mut self.history,
            FieldId::Vitals => &mut self.vitals,
            FieldId::Pain => &mut self.pain,
            FieldId::Mobility => &mut self.mobility,
            FieldId::Wounds => &mut self.wounds,
            FieldId::Meds => &mut self.meds,
            FieldId::Io => &mut self.io,
            FieldId::BowelBladder => &mut self.bowel_bladder,
            FieldId::Tasks => &mut self.tasks,
            FieldId::Prns => &mut self.prns,
            FieldId::AppointmentsToday => &mut self.appointments_today,
            FieldId::AppointmentsUpcoming => &mut self.appointments_upcoming,
            FieldId::Notes => &mut self.notes,
            FieldId::FallRisk | FieldId::BedAlarm | FieldId::TransportArranged => return None,
        };
        Some(slot)
    }

    pub(crate) fn flag_slot_mut(&mut self, field: FieldId) -> Option<&mut bool> {
        match field {
            FieldId::FallRisk => Some(&mut self.fall_risk),
            FieldId::BedAlarm => Some(&mut self.bed_alarm),
            FieldId::TransportArranged => Some(&mut self.transport_arranged),
            _ => None,
        }
    }
}

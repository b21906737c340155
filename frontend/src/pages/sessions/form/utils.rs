use crate::{
    api::{Id, SessionPayload, YogaSession},
    utils::{
        time::parse_date,
        validation::{self, FieldError},
    },
};

pub const DESCRIPTION_MAX: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(Id),
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create session",
            FormMode::Update(_) => "Update session",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Session created !",
            FormMode::Update(_) => "Session updated !",
        }
    }
}

/// Editable fields; `date` holds the `YYYY-MM-DD` text of the date input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFormState {
    pub name: String,
    pub date: String,
    pub teacher_id: Option<Id>,
    pub description: String,
}

impl SessionFormState {
    pub fn from_session(session: &YogaSession) -> Self {
        Self {
            name: session.name.clone(),
            date: session.date.format("%Y-%m-%d").to_string(),
            teacher_id: session.teacher_id,
            description: session.description.clone(),
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = validation::collect([
            validation::required("name", &self.name),
            validation::required("date", &self.date),
            validation::required("description", &self.description),
            validation::max_length("description", &self.description, DESCRIPTION_MAX),
        ]);
        if !self.date.trim().is_empty() && self.parsed_date().is_none() {
            errors.push(FieldError {
                field: "date",
                message: "date must be YYYY-MM-DD".into(),
            });
        }
        if self.teacher_id.is_none() {
            errors.push(FieldError {
                field: "teacher",
                message: "teacher is required".into(),
            });
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    fn parsed_date(&self) -> Option<chrono::NaiveDate> {
        let raw = self.date.trim();
        (raw.len() == 10).then(|| parse_date(raw)).flatten()
    }

    pub fn to_payload(&self) -> Result<SessionPayload, Vec<FieldError>> {
        let errors = self.validate();
        match (errors.is_empty(), self.parsed_date(), self.teacher_id) {
            (true, Some(date), Some(teacher_id)) => Ok(SessionPayload {
                name: self.name.trim().to_string(),
                date,
                teacher_id,
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> SessionFormState {
        SessionFormState {
            name: "Morning flow".into(),
            date: "2025-08-06".into(),
            teacher_id: Some(Id::new(2)),
            description: "Slow vinyasa".into(),
        }
    }

    #[test]
    fn mode_titles_and_messages() {
        assert_eq!(FormMode::Create.title(), "Create session");
        assert_eq!(FormMode::Update(Id::new(1)).title(), "Update session");
        assert_eq!(FormMode::Create.success_message(), "Session created !");
        assert_eq!(FormMode::Update(Id::new(1)).success_message(), "Session updated !");
    }

    #[test]
    fn every_field_is_required() {
        let errors = SessionFormState::default().validate();
        for field in ["name", "date", "description", "teacher"] {
            assert!(errors.iter().any(|e| e.field == field), "missing {}", field);
        }
    }

    #[test]
    fn description_is_capped() {
        let state = SessionFormState {
            description: "x".repeat(DESCRIPTION_MAX + 1),
            ..filled()
        };
        assert!(!state.is_valid());
    }

    #[test]
    fn date_must_be_calendar_day() {
        let state = SessionFormState {
            date: "2025-08-06T10:00:00".into(),
            ..filled()
        };
        assert!(state.validate().iter().any(|e| e.field == "date"));
        let state = SessionFormState {
            date: "2025-02-30".into(),
            ..filled()
        };
        assert!(!state.is_valid());
    }

    #[test]
    fn payload_carries_typed_values() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2025, 8, 6).unwrap());
        assert_eq!(payload.teacher_id, Id::new(2));
    }

    #[test]
    fn prefill_round_trips_session_fields() {
        let session: YogaSession = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Evening",
            "date": "2025-09-01",
            "teacher_id": 3,
            "description": "Yin",
            "users": []
        }))
        .unwrap();
        let state = SessionFormState::from_session(&session);
        assert_eq!(state.date, "2025-09-01");
        assert_eq!(state.teacher_id, Some(Id::new(3)));
        assert!(state.is_valid());
    }
}

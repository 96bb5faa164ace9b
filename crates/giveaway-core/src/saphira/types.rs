use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

/// A lecture as listed by saphira.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    /// Accepts a JSON number or a numeric string.
    #[serde(deserialize_with = "deserialize_lecture_id")]
    pub id: i64,
    pub title: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLectureId {
    Number(i64),
    Text(String),
}

fn deserialize_lecture_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLectureId::deserialize(deserializer)? {
        RawLectureId::Number(id) => Ok(id),
        RawLectureId::Text(raw) => raw.trim().parse().map_err(|_| {
            de::Error::invalid_value(Unexpected::Str(&raw), &"a numeric lecture id")
        }),
    }
}

/// Body returned by both draw endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiveawayResult {
    #[serde(rename = "nome")]
    pub winner: String,
}

/// Which draw endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Any registered attendee can win.
    #[default]
    General,
    /// Only attendees registered as physically present can win.
    PresencialOnly,
}

impl DrawMode {
    pub fn from_presencial_only(presencial_only: bool) -> Self {
        if presencial_only {
            DrawMode::PresencialOnly
        } else {
            DrawMode::General
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DrawMode::General => "general",
            DrawMode::PresencialOnly => "presencial_only",
        }
    }
}

/// A validated draw submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    pub lecture_id: String,
    pub mode: DrawMode,
}

impl DrawRequest {
    /// Validates the raw lecture id. Returns `None` when it is blank.
    pub fn new(raw_lecture_id: &str, presencial_only: bool) -> Option<Self> {
        let lecture_id = raw_lecture_id.trim();
        if lecture_id.is_empty() {
            return None;
        }
        Some(Self {
            lecture_id: lecture_id.to_string(),
            mode: DrawMode::from_presencial_only(presencial_only),
        })
    }
}

/// Sorts lectures by descending id. The sort is stable, so equal ids keep
/// their relative order.
pub fn sort_lectures_desc(lectures: &mut [Lecture]) {
    lectures.sort_by(|a, b| b.id.cmp(&a.id));
}

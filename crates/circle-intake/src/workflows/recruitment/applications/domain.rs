use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::workflows::forms::rules::RATING_VALUES;
use crate::workflows::forms::FormValues;

/// Closed set of values offered to the applicant through a `<select>`.
///
/// The same table backs the rendered options and the validator, so the two cannot drift.
pub trait Selectable: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|option| option.label() == raw)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|option| option.label()).collect()
    }
}

/// Which circle families the applicant is applying to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "Technical Only")]
    TechnicalOnly,
    #[serde(rename = "Non-Technical Only")]
    NonTechnicalOnly,
    #[serde(rename = "Both")]
    Both,
}

impl Track {
    pub const fn needs_technical(self) -> bool {
        matches!(self, Track::TechnicalOnly | Track::Both)
    }

    pub const fn needs_non_technical(self) -> bool {
        matches!(self, Track::NonTechnicalOnly | Track::Both)
    }
}

impl Selectable for Track {
    const ALL: &'static [Self] = &[Track::TechnicalOnly, Track::NonTechnicalOnly, Track::Both];

    fn label(self) -> &'static str {
        match self {
            Track::TechnicalOnly => "Technical Only",
            Track::NonTechnicalOnly => "Non-Technical Only",
            Track::Both => "Both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechnicalCircle {
    #[serde(rename = "UIUX")]
    UiUx,
    #[serde(rename = "Frontend")]
    Frontend,
    #[serde(rename = "Backend")]
    Backend,
    #[serde(rename = "Flutter")]
    Flutter,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "CS - Computer Science")]
    ComputerScience,
    #[serde(rename = "Business Analysis")]
    BusinessAnalysis,
}

impl Selectable for TechnicalCircle {
    const ALL: &'static [Self] = &[
        TechnicalCircle::UiUx,
        TechnicalCircle::Frontend,
        TechnicalCircle::Backend,
        TechnicalCircle::Flutter,
        TechnicalCircle::DataScience,
        TechnicalCircle::ComputerScience,
        TechnicalCircle::BusinessAnalysis,
    ];

    fn label(self) -> &'static str {
        match self {
            TechnicalCircle::UiUx => "UIUX",
            TechnicalCircle::Frontend => "Frontend",
            TechnicalCircle::Backend => "Backend",
            TechnicalCircle::Flutter => "Flutter",
            TechnicalCircle::DataScience => "Data Science",
            TechnicalCircle::ComputerScience => "CS - Computer Science",
            TechnicalCircle::BusinessAnalysis => "Business Analysis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NonTechnicalCircle {
    #[serde(rename = "HR - Human Resources")]
    HumanResources,
    #[serde(rename = "PR&FR")]
    PublicRelations,
    #[serde(rename = "R&D")]
    ResearchDevelopment,
    #[serde(rename = "PM")]
    ProjectManagement,
    #[serde(rename = "EO")]
    EventOrganizing,
    #[serde(rename = "Media - Graphic Design")]
    MediaGraphicDesign,
    #[serde(rename = "Media - Video Editing")]
    MediaVideoEditing,
    #[serde(rename = "Media - Photography")]
    MediaPhotography,
}

impl Selectable for NonTechnicalCircle {
    const ALL: &'static [Self] = &[
        NonTechnicalCircle::HumanResources,
        NonTechnicalCircle::PublicRelations,
        NonTechnicalCircle::ResearchDevelopment,
        NonTechnicalCircle::ProjectManagement,
        NonTechnicalCircle::EventOrganizing,
        NonTechnicalCircle::MediaGraphicDesign,
        NonTechnicalCircle::MediaVideoEditing,
        NonTechnicalCircle::MediaPhotography,
    ];

    fn label(self) -> &'static str {
        match self {
            NonTechnicalCircle::HumanResources => "HR - Human Resources",
            NonTechnicalCircle::PublicRelations => "PR&FR",
            NonTechnicalCircle::ResearchDevelopment => "R&D",
            NonTechnicalCircle::ProjectManagement => "PM",
            NonTechnicalCircle::EventOrganizing => "EO",
            NonTechnicalCircle::MediaGraphicDesign => "Media - Graphic Design",
            NonTechnicalCircle::MediaVideoEditing => "Media - Video Editing",
            NonTechnicalCircle::MediaPhotography => "Media - Photography",
        }
    }
}

/// Labels for `academicYear`, indexed by [`AcademicYear`] discriminant.
pub const ACADEMIC_YEAR_LABELS: [&str; 5] = [
    "First Year",
    "Second Year",
    "Third Year",
    "Fourth Year",
    "Graduate",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcademicYear {
    First,
    Second,
    Third,
    Fourth,
    Graduate,
}

impl Selectable for AcademicYear {
    const ALL: &'static [Self] = &[
        AcademicYear::First,
        AcademicYear::Second,
        AcademicYear::Third,
        AcademicYear::Fourth,
        AcademicYear::Graduate,
    ];

    fn label(self) -> &'static str {
        ACADEMIC_YEAR_LABELS[self as usize]
    }
}

impl Serialize for AcademicYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Options rendered for the PM circle's preferred communication question.
pub const PM_COMMUNICATION_WAYS: &[&str] = &[
    "Email",
    "WhatsApp",
    "Slack",
    "Weekly Meetings",
    "Phone Calls",
];

/// Application form payload exactly as the browser posts it.
///
/// Selectors stay raw strings so an unknown option surfaces as a field error rather than a
/// rejected request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub technical_circle: Option<String>,
    #[serde(default)]
    pub non_technical_circle: Option<String>,
    #[serde(flatten)]
    pub fields: FormValues,
}

impl ApplicationSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.track = Some(track.label().to_string());
        self
    }

    pub fn with_technical_circle(mut self, circle: TechnicalCircle) -> Self {
        self.technical_circle = Some(circle.label().to_string());
        self
    }

    pub fn with_non_technical_circle(mut self, circle: NonTechnicalCircle) -> Self {
        self.non_technical_circle = Some(circle.label().to_string());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.set(name, value);
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name)
    }
}

/// A submission that passed every base and circle-specific rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSubmission {
    pub track: Track,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_circle: Option<TechnicalCircle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_technical_circle: Option<NonTechnicalCircle>,
    /// Parsed form of `fields["academicYear"]`; the label itself is what gets serialized.
    #[serde(skip)]
    pub academic_year: Option<AcademicYear>,
    /// Every catalogued field that carried a non-blank value, trimmed and keyed by field name.
    #[serde(flatten)]
    pub fields: BTreeMap<&'static str, String>,
}

impl NormalizedSubmission {
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn full_name(&self) -> &str {
        self.value("fullName").unwrap_or_default()
    }

    /// Labels of the circles the applicant selected, technical first.
    pub fn circle_labels(&self) -> Vec<&'static str> {
        self.technical_circle
            .map(Selectable::label)
            .into_iter()
            .chain(self.non_technical_circle.map(Selectable::label))
            .collect()
    }
}

/// Every enumerated value a client must offer for the application form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationOptions {
    pub tracks: Vec<&'static str>,
    pub technical_circles: Vec<&'static str>,
    pub non_technical_circles: Vec<&'static str>,
    pub academic_years: Vec<&'static str>,
    pub rating_values: Vec<&'static str>,
    pub pm_communication_ways: Vec<&'static str>,
}

impl ApplicationOptions {
    pub fn current() -> Self {
        Self {
            tracks: Track::labels(),
            technical_circles: TechnicalCircle::labels(),
            non_technical_circles: NonTechnicalCircle::labels(),
            academic_years: AcademicYear::labels(),
            rating_values: RATING_VALUES.to_vec(),
            pm_communication_ways: PM_COMMUNICATION_WAYS.to_vec(),
        }
    }
}

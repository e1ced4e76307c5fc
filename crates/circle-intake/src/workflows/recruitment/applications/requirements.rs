//! Which fields each circle makes mandatory, and how each of those fields is judged.
//!
//! A required field listed in [`MIN_LENGTH_OVERRIDES`] is free text checked against its
//! minimum. A required field absent from that table is a 1–5 rating. There is no third case.
//! Field names carry their circle prefix (`hr`, `pm`, `frontend`, ...) so two circles never
//! share a field.

use super::domain::{NonTechnicalCircle, Selectable, TechnicalCircle};

static UIUX_FIELDS: &[&str] = &[
    "uiuxTools",
    "uiuxDesignProcess",
    "uiuxPortfolioLink",
    "uiuxAccessibility",
    "uiuxFigmaRating",
    "uiuxUserResearchRating",
];

static FRONTEND_FIELDS: &[&str] = &[
    "frontendHtml",
    "frontendHeadingTag",
    "frontendCssColor",
    "frontendJsVars",
    "frontendReactComponents",
];

static BACKEND_FIELDS: &[&str] = &[
    "backendLanguage",
    "backendRestApi",
    "backendDatabaseDesign",
    "backendAuthentication",
    "backendSqlRating",
    "backendGitRating",
];

static FLUTTER_FIELDS: &[&str] = &[
    "flutterWidgets",
    "flutterStateManagement",
    "flutterProjectDescription",
    "flutterDartRating",
    "flutterFirebaseRating",
];

static DATA_SCIENCE_FIELDS: &[&str] = &[
    "dsPandasUsage",
    "dsOverfitting",
    "dsProjectDescription",
    "dsPythonRating",
    "dsStatisticsRating",
];

static COMPUTER_SCIENCE_FIELDS: &[&str] = &[
    "csComplexity",
    "csRecursion",
    "csKeyword",
    "csProblemSolvingRating",
    "csDataStructuresRating",
];

static BUSINESS_ANALYSIS_FIELDS: &[&str] = &[
    "baRequirementsGathering",
    "baStakeholders",
    "baCaseStudy",
    "baExcelRating",
    "baUmlRating",
];

static HR_FIELDS: &[&str] = &[
    "hrConflictHandling",
    "hrMotivatingMembers",
    "hrInterviewExperience",
    "hrPunctualityCommitment",
    "hrTeamworkRating",
];

static PR_FIELDS: &[&str] = &[
    "prSponsorPitch",
    "prCompanyResearch",
    "prNegotiationRating",
    "prCommunicationRating",
];

static RD_FIELDS: &[&str] = &[
    "rdResearchTopic",
    "rdSourceEvaluation",
    "rdWritingRating",
    "rdAnalysisRating",
];

static PM_FIELDS: &[&str] = &[
    "pmTaskPrioritization",
    "pmCommunicationWay",
    "pmDeadlineHandling",
    "pmToolsRating",
    "pmRiskRating",
];

static EO_FIELDS: &[&str] = &[
    "eoEventPlan",
    "eoBudgeting",
    "eoPressureRating",
    "eoLogisticsRating",
];

static MEDIA_DESIGN_FIELDS: &[&str] = &[
    "mediaDesignTools",
    "mediaDesignPortfolio",
    "mediaDesignPhotoshopRating",
    "mediaDesignIllustratorRating",
];

static MEDIA_VIDEO_FIELDS: &[&str] = &[
    "mediaVideoSoftware",
    "mediaVideoPortfolio",
    "mediaVideoStorytelling",
    "mediaVideoMotionRating",
];

static MEDIA_PHOTO_FIELDS: &[&str] = &[
    "mediaPhotoCamera",
    "mediaPhotoPortfolio",
    "mediaPhotoLightingRating",
    "mediaPhotoEditingRating",
];

/// Minimum trimmed length for free-text circle answers.
pub static MIN_LENGTH_OVERRIDES: &[(&str, usize)] = &[
    ("uiuxTools", 3),
    ("uiuxDesignProcess", 50),
    ("uiuxPortfolioLink", 10),
    ("uiuxAccessibility", 30),
    ("frontendHtml", 20),
    ("frontendHeadingTag", 20),
    ("frontendCssColor", 20),
    ("frontendJsVars", 30),
    ("frontendReactComponents", 30),
    ("backendLanguage", 2),
    ("backendRestApi", 40),
    ("backendDatabaseDesign", 40),
    ("backendAuthentication", 30),
    ("flutterWidgets", 30),
    ("flutterStateManagement", 30),
    ("flutterProjectDescription", 40),
    ("dsPandasUsage", 30),
    ("dsOverfitting", 40),
    ("dsProjectDescription", 40),
    ("csComplexity", 30),
    ("csRecursion", 30),
    ("baRequirementsGathering", 40),
    ("baStakeholders", 40),
    ("baCaseStudy", 50),
    ("hrConflictHandling", 40),
    ("hrMotivatingMembers", 40),
    ("hrInterviewExperience", 20),
    ("prSponsorPitch", 50),
    ("prCompanyResearch", 40),
    ("rdResearchTopic", 40),
    ("rdSourceEvaluation", 40),
    ("pmTaskPrioritization", 40),
    // Rendered as a <select>, yet judged as free text with a minimum of one character.
    ("pmCommunicationWay", 1),
    ("pmDeadlineHandling", 40),
    ("eoEventPlan", 50),
    ("eoBudgeting", 30),
    ("mediaDesignTools", 3),
    ("mediaDesignPortfolio", 10),
    ("mediaVideoSoftware", 3),
    ("mediaVideoPortfolio", 10),
    ("mediaVideoStorytelling", 30),
    ("mediaPhotoCamera", 3),
    ("mediaPhotoPortfolio", 10),
];

pub fn min_length_override(field: &str) -> Option<usize> {
    MIN_LENGTH_OVERRIDES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, min)| *min)
}

/// How a required circle field is judged once it is known to be non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementRule {
    MinLength(usize),
    Rating,
}

impl RequirementRule {
    pub fn for_field(field: &str) -> Self {
        match min_length_override(field) {
            Some(min) => RequirementRule::MinLength(min),
            None => RequirementRule::Rating,
        }
    }
}

impl TechnicalCircle {
    /// Fields this circle makes mandatory, in form order.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            TechnicalCircle::UiUx => UIUX_FIELDS,
            TechnicalCircle::Frontend => FRONTEND_FIELDS,
            TechnicalCircle::Backend => BACKEND_FIELDS,
            TechnicalCircle::Flutter => FLUTTER_FIELDS,
            TechnicalCircle::DataScience => DATA_SCIENCE_FIELDS,
            TechnicalCircle::ComputerScience => COMPUTER_SCIENCE_FIELDS,
            TechnicalCircle::BusinessAnalysis => BUSINESS_ANALYSIS_FIELDS,
        }
    }

    /// Namespace every field of this circle starts with.
    pub const fn field_prefix(self) -> &'static str {
        match self {
            TechnicalCircle::UiUx => "uiux",
            TechnicalCircle::Frontend => "frontend",
            TechnicalCircle::Backend => "backend",
            TechnicalCircle::Flutter => "flutter",
            TechnicalCircle::DataScience => "ds",
            TechnicalCircle::ComputerScience => "cs",
            TechnicalCircle::BusinessAnalysis => "ba",
        }
    }
}

impl NonTechnicalCircle {
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            NonTechnicalCircle::HumanResources => HR_FIELDS,
            NonTechnicalCircle::PublicRelations => PR_FIELDS,
            NonTechnicalCircle::ResearchDevelopment => RD_FIELDS,
            NonTechnicalCircle::ProjectManagement => PM_FIELDS,
            NonTechnicalCircle::EventOrganizing => EO_FIELDS,
            NonTechnicalCircle::MediaGraphicDesign => MEDIA_DESIGN_FIELDS,
            NonTechnicalCircle::MediaVideoEditing => MEDIA_VIDEO_FIELDS,
            NonTechnicalCircle::MediaPhotography => MEDIA_PHOTO_FIELDS,
        }
    }

    pub const fn field_prefix(self) -> &'static str {
        match self {
            NonTechnicalCircle::HumanResources => "hr",
            NonTechnicalCircle::PublicRelations => "pr",
            NonTechnicalCircle::ResearchDevelopment => "rd",
            NonTechnicalCircle::ProjectManagement => "pm",
            NonTechnicalCircle::EventOrganizing => "eo",
            NonTechnicalCircle::MediaGraphicDesign => "mediaDesign",
            NonTechnicalCircle::MediaVideoEditing => "mediaVideo",
            NonTechnicalCircle::MediaPhotography => "mediaPhoto",
        }
    }
}

/// One circle's requirement list, tagged with the circle's display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementGroup {
    pub circle: &'static str,
    pub prefix: &'static str,
    pub fields: &'static [&'static str],
}

/// Both requirement tables flattened, technical circles first.
pub fn requirement_groups() -> Vec<RequirementGroup> {
    let technical = TechnicalCircle::ALL.iter().map(|circle| RequirementGroup {
        circle: circle.label(),
        prefix: circle.field_prefix(),
        fields: circle.required_fields(),
    });
    let non_technical = NonTechnicalCircle::ALL.iter().map(|circle| RequirementGroup {
        circle: circle.label(),
        prefix: circle.field_prefix(),
        fields: circle.required_fields(),
    });
    technical.chain(non_technical).collect()
}

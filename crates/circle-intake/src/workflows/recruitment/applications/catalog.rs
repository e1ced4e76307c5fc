//! Every field the application form can carry.
//!
//! Base fields carry their own presence and bounds. Circle fields are declared
//! `Conditional`: the base pass ignores them and the refinement pass decides, per selected
//! circle, whether they must be filled.

use crate::workflows::forms::{FieldKind, FieldSpec, LengthBounds};

use super::domain::ACADEMIC_YEAR_LABELS;

use FieldKind::{Email, LongText, NumericString, Phone, Rating, ShortText, Url};

const fn long(name: &'static str, label: &'static str, min: usize, max: usize) -> FieldSpec {
    FieldSpec::required(name, label, LongText, Some(LengthBounds::new(min, max)))
}

const fn circle(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::conditional(name, label, kind)
}

static FIELD_CATALOG: &[FieldSpec] = &[
    // Identity and contact.
    FieldSpec::required(
        "fullName",
        "Full name",
        ShortText,
        Some(LengthBounds::new(3, 120)),
    ),
    FieldSpec::required("email", "Email", Email, Some(LengthBounds::at_most(160))),
    FieldSpec::required("phoneNumber", "Phone number", Phone, None),
    FieldSpec::required(
        "university",
        "University",
        ShortText,
        Some(LengthBounds::new(2, 120)),
    ),
    FieldSpec::required(
        "faculty",
        "Faculty",
        ShortText,
        Some(LengthBounds::new(2, 120)),
    ),
    FieldSpec::optional(
        "academicYear",
        "Academic year",
        FieldKind::Choice(&ACADEMIC_YEAR_LABELS),
    ),
    FieldSpec::required("facebookLink", "Facebook link", Url, None),
    FieldSpec::required("linkedInLink", "LinkedIn link", Url, None),
    FieldSpec::required("gitHubLink", "GitHub link", Url, None),
    FieldSpec::required("hoursPerWeek", "Hours per week", NumericString, None),
    // Motivation. Bounds differ per question on purpose; they set the expected answer depth.
    long("aboutYourself", "About yourself", 50, 1800),
    long("whyJoinUs", "Why you want to join", 50, 1800),
    long("whyThisCircle", "Why this circle", 40, 1500),
    long("expectations", "What you expect from us", 40, 1500),
    long("previousExperience", "Previous experience", 20, 1500),
    long("strengths", "Strengths", 20, 400),
    long("weaknesses", "Weaknesses", 20, 400),
    long("teamConflict", "Handling team conflict", 40, 1200),
    long("timeManagement", "Time management", 40, 1200),
    long("proudProject", "A project you are proud of", 40, 1500),
    long("learningApproach", "How you learn new things", 30, 800),
    long("leadershipExample", "Leadership example", 30, 1000),
    long("extraActivities", "Extracurricular activities", 20, 400),
    // UIUX.
    circle("uiuxTools", "Design tools you use", ShortText),
    circle("uiuxDesignProcess", "Your design process", LongText),
    circle("uiuxPortfolioLink", "Portfolio link", ShortText),
    circle("uiuxAccessibility", "Designing for accessibility", LongText),
    circle("uiuxFigmaRating", "Figma skill rating", Rating),
    circle("uiuxUserResearchRating", "User research rating", Rating),
    // Frontend.
    circle("frontendHtml", "Semantic HTML answer", LongText),
    circle("frontendHeadingTag", "Heading tags answer", LongText),
    circle("frontendCssColor", "CSS color answer", LongText),
    circle("frontendJsVars", "JavaScript variables answer", LongText),
    circle("frontendReactComponents", "React components answer", LongText),
    // Backend.
    circle("backendLanguage", "Preferred backend language", ShortText),
    circle("backendRestApi", "REST API answer", LongText),
    circle("backendDatabaseDesign", "Database design answer", LongText),
    circle("backendAuthentication", "Authentication answer", LongText),
    circle("backendSqlRating", "SQL skill rating", Rating),
    circle("backendGitRating", "Git skill rating", Rating),
    // Flutter.
    circle("flutterWidgets", "Stateless vs stateful widgets", LongText),
    circle("flutterStateManagement", "State management answer", LongText),
    circle("flutterProjectDescription", "Flutter project description", LongText),
    circle("flutterDartRating", "Dart skill rating", Rating),
    circle("flutterFirebaseRating", "Firebase skill rating", Rating),
    // Data Science.
    circle("dsPandasUsage", "Pandas usage answer", LongText),
    circle("dsOverfitting", "Overfitting answer", LongText),
    circle("dsProjectDescription", "Data project description", LongText),
    circle("dsPythonRating", "Python skill rating", Rating),
    circle("dsStatisticsRating", "Statistics skill rating", Rating),
    // CS - Computer Science.
    circle("csComplexity", "Time complexity answer", LongText),
    circle("csRecursion", "Recursion answer", LongText),
    circle("csKeyword", "Language keywords rating", Rating),
    circle("csProblemSolvingRating", "Problem solving rating", Rating),
    circle("csDataStructuresRating", "Data structures rating", Rating),
    // Business Analysis.
    circle("baRequirementsGathering", "Requirements gathering answer", LongText),
    circle("baStakeholders", "Stakeholder management answer", LongText),
    circle("baCaseStudy", "Case study answer", LongText),
    circle("baExcelRating", "Excel skill rating", Rating),
    circle("baUmlRating", "UML skill rating", Rating),
    // HR - Human Resources.
    circle("hrConflictHandling", "Handling member conflicts", LongText),
    circle("hrMotivatingMembers", "Motivating members", LongText),
    circle("hrInterviewExperience", "Interviewing experience", LongText),
    circle("hrPunctualityCommitment", "Punctuality commitment", Rating),
    circle("hrTeamworkRating", "Teamwork rating", Rating),
    // PR&FR.
    circle("prSponsorPitch", "Sponsor pitch", LongText),
    circle("prCompanyResearch", "Company research answer", LongText),
    circle("prNegotiationRating", "Negotiation rating", Rating),
    circle("prCommunicationRating", "Communication rating", Rating),
    // R&D.
    circle("rdResearchTopic", "Research topic proposal", LongText),
    circle("rdSourceEvaluation", "Evaluating sources", LongText),
    circle("rdWritingRating", "Writing rating", Rating),
    circle("rdAnalysisRating", "Analysis rating", Rating),
    // PM.
    circle("pmTaskPrioritization", "Prioritizing tasks", LongText),
    circle("pmCommunicationWay", "Preferred communication way", ShortText),
    circle("pmDeadlineHandling", "Handling missed deadlines", LongText),
    circle("pmToolsRating", "PM tools rating", Rating),
    circle("pmRiskRating", "Risk management rating", Rating),
    // EO.
    circle("eoEventPlan", "Event plan", LongText),
    circle("eoBudgeting", "Budgeting answer", LongText),
    circle("eoPressureRating", "Working under pressure rating", Rating),
    circle("eoLogisticsRating", "Logistics rating", Rating),
    // Media - Graphic Design.
    circle("mediaDesignTools", "Design software", ShortText),
    circle("mediaDesignPortfolio", "Design portfolio", ShortText),
    circle("mediaDesignPhotoshopRating", "Photoshop rating", Rating),
    circle("mediaDesignIllustratorRating", "Illustrator rating", Rating),
    // Media - Video Editing.
    circle("mediaVideoSoftware", "Editing software", ShortText),
    circle("mediaVideoPortfolio", "Video portfolio", ShortText),
    circle("mediaVideoStorytelling", "Storytelling answer", LongText),
    circle("mediaVideoMotionRating", "Motion graphics rating", Rating),
    // Media - Photography.
    circle("mediaPhotoCamera", "Camera you use", ShortText),
    circle("mediaPhotoPortfolio", "Photography portfolio", ShortText),
    circle("mediaPhotoLightingRating", "Lighting rating", Rating),
    circle("mediaPhotoEditingRating", "Photo editing rating", Rating),
];

pub fn field_catalog() -> &'static [FieldSpec] {
    FIELD_CATALOG
}

pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
    FIELD_CATALOG.iter().find(|field| field.name == name)
}

/// Human label for a field, falling back to the raw name for uncatalogued keys.
pub fn label_for(name: &str) -> &str {
    lookup(name).map(|field| field.label).unwrap_or(name)
}

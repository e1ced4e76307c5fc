use chrono::{Local, NaiveDate};
use circle_intake::error::AppError;
use circle_intake::workflows::events::{EventService, EventStatus};
use circle_intake::workflows::forms::{FieldKind, FormValues, Presence, ValidationErrors};
use circle_intake::workflows::forwarding::RecordingSink;
use circle_intake::workflows::recruitment::applications::catalog::field_catalog;
use circle_intake::workflows::recruitment::applications::{
    ApplicationOptions, ApplicationSubmission, ApplicationValidator, NonTechnicalCircle,
    RecruitmentService, RequirementRule, TechnicalCircle, Track,
};
use circle_intake::workflows::recruitment::sheet::SheetAuditor;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON file holding one application exactly as the form posts it
    #[arg(long)]
    pub(crate) file: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct SheetCheckArgs {
    /// CSV export of the submissions sheet; the header row holds field names
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date used for event countdowns (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the event registration portion of the demo.
    #[arg(long)]
    pub(crate) skip_events: bool,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let submission: ApplicationSubmission = serde_json::from_str(&raw)?;
    let validator = ApplicationValidator::new()?;

    match validator.validate(&submission) {
        Ok(normalized) => println!(
            "{}: valid application for {}",
            args.file.display(),
            normalized.circle_labels().join(" + ")
        ),
        Err(errors) => {
            println!("{}: {}", args.file.display(), errors);
            print_errors(&errors, "  ");
        }
    }
    Ok(())
}

pub(crate) fn run_options() -> Result<(), AppError> {
    let options = serde_json::to_string_pretty(&ApplicationOptions::current())?;
    println!("{options}");
    Ok(())
}

pub(crate) fn run_sheet_check(args: SheetCheckArgs) -> Result<(), AppError> {
    let validator = ApplicationValidator::new()?;
    let audit = SheetAuditor::new(&validator).from_path(&args.csv)?;

    println!(
        "{}: {} rows, {} valid, {} need attention",
        args.csv.display(),
        audit.rows.len(),
        audit.valid_count(),
        audit.invalid_count()
    );
    for row in audit.invalid_rows() {
        println!(
            "- row {} ({})",
            row.row,
            row.full_name.as_deref().unwrap_or("unnamed")
        );
        for error in &row.errors {
            println!("    {} [{}]: {}", error.field_path, error.kind.label(), error.message);
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, skip_events } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Circle intake demo");
    let sink = Arc::new(RecordingSink::new());
    let service = RecruitmentService::new(sink.clone())?;

    println!("\n1. Frontend applicant who left the circle questions blank");
    let incomplete = demo_applicant()
        .with_track(Track::TechnicalOnly)
        .with_technical_circle(TechnicalCircle::Frontend);
    match service.validate(&incomplete) {
        Ok(_) => println!("  Unexpectedly valid"),
        Err(errors) => {
            println!("  {}", errors);
            print_errors(&errors, "    ");
        }
    }

    println!("\n2. Same applicant applying to Frontend and PM with every answer filled");
    let complete = answer_circle_questions(
        incomplete
            .with_track(Track::Both)
            .with_non_technical_circle(NonTechnicalCircle::ProjectManagement),
        TechnicalCircle::Frontend
            .required_fields()
            .iter()
            .chain(NonTechnicalCircle::ProjectManagement.required_fields()),
    );
    match service.submit(complete) {
        Ok(receipt) => {
            println!("  Receipt {} -> {}", receipt.receipt_id.0, receipt.summary);
            for forwarded in sink.forwarded() {
                match serde_json::to_string_pretty(&forwarded.sheet_row()) {
                    Ok(json) => println!("  Sheet row:\n{}", json),
                    Err(err) => println!("  Sheet row unavailable: {}", err),
                }
            }
        }
        Err(err) => println!("  Submission rejected: {}", err),
    }

    if skip_events {
        return Ok(());
    }

    println!("\n3. Events as of {}", today);
    let registrations = Arc::new(RecordingSink::new());
    let events = EventService::new(registrations.clone()).pinned_to(today);
    let views = events.list(today);
    for view in &views {
        let countdown = match view.status {
            EventStatus::Upcoming => format!("in {} days", view.days_until),
            EventStatus::Today => "today".to_string(),
            EventStatus::Past => "already happened".to_string(),
        };
        let registration = if view.registration_open {
            "registration open"
        } else {
            "registration closed"
        };
        println!(
            "- {} on {} at {} ({}, {})",
            view.title, view.date, view.location, countdown, registration
        );
    }

    let Some(open) = views.iter().find(|view| view.registration_open) else {
        println!("  No event is taking registrations");
        return Ok(());
    };
    match events.register(open.slug, &demo_attendee()) {
        Ok(receipt) => println!("  Registration {} -> {}", receipt.receipt_id.0, receipt.summary),
        Err(err) => println!("  Registration rejected: {}", err),
    }

    Ok(())
}

fn print_errors(errors: &ValidationErrors, indent: &str) {
    for error in errors {
        println!(
            "{indent}{} [{}]: {}",
            error.field_path,
            error.kind.label(),
            error.message
        );
    }
}

fn demo_answer(min: usize) -> String {
    const SENTENCE: &str = "I break the work into small steps and check in with the team early. ";
    let mut answer = String::new();
    while answer.trim().chars().count() < min.max(1) {
        answer.push_str(SENTENCE);
    }
    answer.trim().to_string()
}

fn demo_applicant() -> ApplicationSubmission {
    let mut submission = ApplicationSubmission::new()
        .with_field("fullName", "Salma Mostafa")
        .with_field("email", "salma.mostafa@example.com")
        .with_field("phoneNumber", "01112345678")
        .with_field("university", "Helwan University")
        .with_field("faculty", "Computers and Information")
        .with_field("academicYear", "Second Year")
        .with_field("facebookLink", "https://facebook.com/salma.mostafa")
        .with_field("linkedInLink", "https://www.linkedin.com/in/salma-mostafa")
        .with_field("gitHubLink", "https://github.com/salma-mostafa")
        .with_field("hoursPerWeek", "10");

    for entry in field_catalog() {
        if entry.kind == FieldKind::LongText && entry.presence == Presence::Required {
            let min = entry.bounds.map(|bounds| bounds.min).unwrap_or(1);
            submission = submission.with_field(entry.name, demo_answer(min));
        }
    }
    submission
}

fn answer_circle_questions<'a>(
    mut submission: ApplicationSubmission,
    fields: impl Iterator<Item = &'a &'static str>,
) -> ApplicationSubmission {
    for &field in fields {
        let value = match RequirementRule::for_field(field) {
            RequirementRule::MinLength(min) => demo_answer(min),
            RequirementRule::Rating => "4".to_string(),
        };
        submission = submission.with_field(field, value);
    }
    submission
}

fn demo_attendee() -> FormValues {
    FormValues::new()
        .with("fullName", "Salma Mostafa")
        .with("email", "salma.mostafa@example.com")
        .with("phoneNumber", "01112345678")
        .with("university", "Helwan University")
        .with("faculty", "Computers and Information")
        .with("academicYear", "Second Year")
}

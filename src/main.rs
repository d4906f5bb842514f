use anyhow::Context;
use clap::Parser;
use exam_portal::adapters::csv_source::{read_schedule_csv, read_seating_csv};
use exam_portal::config::{CliConfig, Command, PortalConfig};
use exam_portal::core::render::{render_hall_ticket, render_seating};
use exam_portal::domain::ports::TicketSource;
use exam_portal::utils::{logger, validation::Validate};
use exam_portal::{ApiTicketSource, LocalTicketSource, SessionContext};
use std::fs::File;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting exam-portal CLI");

    let config = match &cli.config {
        Some(path) => {
            let config = PortalConfig::from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            config.validate()?;
            config
        }
        None => PortalConfig::default(),
    };

    match cli.command {
        Command::Seating { session } => {
            let ctx = SessionContext::load(&session)?;
            tracing::info!("session loaded for {}", ctx.student.register_no);
            println!("{}", render_seating(&ctx.student));
        }
        Command::Ticket {
            session,
            api,
            schedule,
            output,
        } => {
            let ctx = SessionContext::load(&session)?;
            let ticket = match schedule.or_else(|| config.data.schedule.clone().map(PathBuf::from))
            {
                Some(schedule_path) => {
                    let source = local_source(
                        &schedule_path,
                        config.data.seating.as_deref(),
                        ctx.student.clone(),
                    )?;
                    source.fetch_hall_ticket(&ctx.student.register_no).await?
                }
                None => {
                    let base_url = api.unwrap_or_else(|| config.api.base_url.clone());
                    let source = ApiTicketSource::new(base_url);
                    source.fetch_hall_ticket(&ctx.student.register_no).await?
                }
            };

            let rendered = render_hall_ticket(&ticket);
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    tracing::info!("hall ticket written to {}", path.display());
                    println!("Hall ticket written to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }
        Command::Ingest { seating, schedule } => {
            if seating.is_none() && schedule.is_none() {
                anyhow::bail!("nothing to ingest: pass --seating and/or --schedule");
            }
            if let Some(path) = seating {
                let records = read_seating_csv(File::open(&path)?)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                println!("{}: {} student records", path.display(), records.len());
            }
            if let Some(path) = schedule {
                let rows = read_schedule_csv(File::open(&path)?)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                println!("{}: {} schedule rows", path.display(), rows.len());
            }
        }
    }

    Ok(())
}

fn local_source(
    schedule_path: &Path,
    seating_path: Option<&str>,
    session_student: exam_portal::domain::model::StudentRecord,
) -> anyhow::Result<LocalTicketSource> {
    let schedule = read_schedule_csv(File::open(schedule_path)?)
        .with_context(|| format!("failed to read {}", schedule_path.display()))?;
    let mut students = match seating_path {
        Some(path) => read_seating_csv(File::open(path)?)
            .with_context(|| format!("failed to read {}", path))?,
        None => Vec::new(),
    };
    // The session record supplies the name when the seating dataset is
    // absent or does not list this student.
    students.push(session_student);
    Ok(LocalTicketSource::new(schedule, students))
}

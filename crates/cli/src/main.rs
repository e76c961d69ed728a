#![warn(clippy::pedantic)]

use std::{
    collections::HashSet,
    fs,
    hash::Hash,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use futures::executor::block_on;
use liftplan_domain::{
    self as domain, ExerciseRepository, Property, Service, UserID, WorkoutService,
};
use liftplan_storage::{JsonStore, json};
use log::debug;
use uuid::Uuid;

use crate::settings::{Overrides, Settings};

mod logger;
mod settings;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(version, about = "Generate personalized workout plans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file (JSON)
    #[arg(short, long, global = true, env = "LIFTPLAN_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the workout of a single day
    Generate {
        /// Generation request (JSON), `-` reads from stdin
        #[arg(short, long, default_value = "-")]
        request: PathBuf,
        /// User whose recent sessions are avoided
        #[arg(short, long)]
        user: Option<Uuid>,
        /// Append the generated exercises to the user's history
        #[arg(long, requires = "user")]
        record: bool,
    },
    /// Plan every day of a training week
    Week {
        /// Profile request (JSON), `-` reads from stdin
        #[arg(short, long, default_value = "-")]
        request: PathBuf,
        /// Week number, overrides the one in the request
        #[arg(short, long)]
        week: Option<u32>,
        /// User whose recent sessions are avoided
        #[arg(short, long)]
        user: Option<Uuid>,
    },
    /// List catalog exercises
    Catalog {
        /// Part of the exercise name
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long = "body-part")]
        body_parts: Vec<String>,
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Only exercises doable with this equipment, `none` for bodyweight
        #[arg(short, long, value_delimiter = ',')]
        equipment: Option<Vec<String>>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply(&cli.overrides);
    logger::init(settings.level_filter()?)?;
    debug!("{settings:?}");

    let store = JsonStore::new(settings.catalog_path.clone(), settings.history_path.clone());
    println!("{}", block_on(run(cli.command, &settings, &store))?);

    Ok(())
}

async fn run(command: Command, settings: &Settings, store: &JsonStore) -> anyhow::Result<String> {
    let service = Service::new(store.clone()).with_recent_window(settings.recent_window);
    match command {
        Command::Generate {
            request,
            user,
            record,
        } => {
            let request =
                domain::GenerationRequest::try_from(read_input::<json::GenerationRequest>(&request)?)
                    .context("invalid request")?;
            let user_id = user.map_or(UserID::nil(), UserID::from);
            let workout = service.generate_workout(user_id, request).await?;
            if record {
                store.record_session(
                    user_id,
                    Local::now().date_naive(),
                    workout.exercises.iter().map(|e| e.name.to_string()).collect(),
                )?;
            }
            Ok(serde_json::to_string_pretty(&json::GeneratedWorkout::from(
                &workout,
            ))?)
        }
        Command::Week {
            request,
            week,
            user,
        } => {
            let (profile, week_number) = read_input::<json::WeekRequest>(&request)?
                .into_parts()
                .context("invalid request")?;
            let week = service
                .plan_week(
                    user.map_or(UserID::nil(), UserID::from),
                    &profile,
                    week.unwrap_or(week_number),
                )
                .await?;
            Ok(serde_json::to_string_pretty(&json::WeekPlan::from(&week))?)
        }
        Command::Catalog {
            name,
            body_parts,
            categories,
            equipment,
        } => {
            let filter = domain::ExerciseFilter {
                name: name.unwrap_or_default(),
                body_parts: parse_all("bodyPart", &body_parts)?,
                categories: parse_all("category", &categories)?,
                available_equipment: equipment
                    .map(|e| domain::Equipment::parse_list(&e))
                    .transpose()?,
                ..domain::ExerciseFilter::default()
            };
            let exercises = store.find_exercises(&filter).await?;
            Ok(serde_json::to_string_pretty(
                &exercises.iter().map(json::Exercise::from).collect::<Vec<_>>(),
            )?)
        }
    }
}

fn read_input<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = if path == Path::new("-") {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&content).with_context(|| format!("malformed JSON in {}", path.display()))
}

fn parse_all<P: Property + Eq + Hash>(
    field: &'static str,
    values: &[String],
) -> Result<HashSet<P>, domain::InputError> {
    values
        .iter()
        .map(|value| {
            P::parse(value).ok_or_else(|| domain::InputError::Unknown {
                field,
                value: value.clone(),
            })
        })
        .collect()
}

use log::{debug, error};

use crate::{
    Catalog, ExerciseFilter, ExerciseRepository, GeneratedWorkout, GenerationRequest, ReadError,
    UserID, UserProfile, WeekPlan, WorkoutGenerator,
};

#[allow(async_fn_in_trait)]
pub trait HistoryRepository {
    /// Exercise names of the `window` most recent sessions, newest first.
    async fn read_recent_exercises(
        &self,
        user_id: UserID,
        window: usize,
    ) -> Result<Vec<String>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn generate_workout(
        &self,
        user_id: UserID,
        request: GenerationRequest,
    ) -> Result<GeneratedWorkout, ReadError>;
    async fn plan_week(
        &self,
        user_id: UserID,
        profile: &UserProfile,
        week_number: u32,
    ) -> Result<WeekPlan, ReadError>;
}

pub struct Service<R> {
    repository: R,
    recent_window: usize,
}

impl<R> Service<R> {
    pub const DEFAULT_RECENT_WINDOW: usize = 3;

    pub fn new(repository: R) -> Self {
        Self {
            repository,
            recent_window: Self::DEFAULT_RECENT_WINDOW,
        }
    }

    #[must_use]
    pub fn with_recent_window(mut self, recent_window: usize) -> Self {
        self.recent_window = recent_window;
        self
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable(_)) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Service<R>
where
    R: ExerciseRepository + HistoryRepository,
{
    async fn catalog(&self, profile: &UserProfile) -> Result<Catalog, ReadError> {
        let exercises = log_on_error!(
            self.repository
                .find_exercises(&ExerciseFilter::available_with(&profile.available_equipment)),
            ReadError,
            "read",
            "exercises"
        )?;
        Ok(Catalog::new(exercises))
    }

    async fn recent(&self, user_id: UserID, known: &[String]) -> Result<Vec<String>, ReadError> {
        if user_id.is_nil() {
            return Ok(known.to_vec());
        }
        let mut recent = known.to_vec();
        recent.extend(log_on_error!(
            self.repository
                .read_recent_exercises(user_id, self.recent_window),
            ReadError,
            "read",
            "history"
        )?);
        Ok(recent)
    }
}

impl<R> WorkoutService for Service<R>
where
    R: ExerciseRepository + HistoryRepository,
{
    async fn generate_workout(
        &self,
        user_id: UserID,
        mut request: GenerationRequest,
    ) -> Result<GeneratedWorkout, ReadError> {
        let catalog = self.catalog(&request.profile).await?;
        request.recent_exercises = self.recent(user_id, &request.recent_exercises).await?;
        Ok(WorkoutGenerator::new(&catalog).generate(&request))
    }

    async fn plan_week(
        &self,
        user_id: UserID,
        profile: &UserProfile,
        week_number: u32,
    ) -> Result<WeekPlan, ReadError> {
        let catalog = self.catalog(profile).await?;
        let recent = self.recent(user_id, &[]).await?;
        Ok(WorkoutGenerator::new(&catalog).plan_week(profile, week_number, &recent))
    }
}

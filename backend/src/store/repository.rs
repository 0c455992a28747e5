//! Repository for time capsules, location reminders and the user location.

use tokio::sync::RwLock;

use super::{unix_now, Collection, IdPolicy};
use crate::errors::AppError;
use crate::geo;
use crate::models::{
    CreateReminderRequest, CreateTimeCapsuleRequest, LocationReminder, TimeCapsule, UserLocation,
    DEFAULT_REMINDER_RADIUS_METERS,
};

/// Process-wide state shared by all handlers.
pub struct Repository {
    time_capsules: Collection<TimeCapsule>,
    reminders: Collection<LocationReminder>,
    user_location: RwLock<UserLocation>,
}

impl Repository {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            time_capsules: Collection::new(policy),
            reminders: Collection::new(policy),
            user_location: RwLock::new(UserLocation::default()),
        }
    }

    // ==================== TIME CAPSULE OPERATIONS ====================

    /// Store a new time capsule. `timestamp` defaults to the request time.
    pub async fn create_time_capsule(
        &self,
        request: &CreateTimeCapsuleRequest,
    ) -> Result<TimeCapsule, AppError> {
        let note = request
            .note
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("No note provided".to_string()))?;

        let now = unix_now();
        let capsule = self
            .time_capsules
            .insert_with(|id| TimeCapsule {
                id,
                note: note.to_string(),
                timestamp: request.timestamp.unwrap_or(now),
                created_at: now,
            })
            .await;

        tracing::info!(id = capsule.id, "Time capsule created");
        Ok(capsule)
    }

    pub async fn list_time_capsules(&self) -> Vec<TimeCapsule> {
        self.time_capsules.list().await
    }

    pub async fn get_time_capsule(&self, id: u64) -> Result<TimeCapsule, AppError> {
        self.time_capsules
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound("Time capsule not found".to_string()))
    }

    pub async fn delete_time_capsule(&self, id: u64) -> Result<(), AppError> {
        self.time_capsules
            .remove(id)
            .await
            .ok_or_else(|| AppError::NotFound("Time capsule not found".to_string()))?;

        tracing::info!(id, "Time capsule deleted");
        Ok(())
    }

    // ==================== REMINDER OPERATIONS ====================

    /// Store a new location reminder. `radius` defaults to 100 meters.
    pub async fn create_reminder(
        &self,
        request: &CreateReminderRequest,
    ) -> Result<LocationReminder, AppError> {
        let reminder = request.reminder.as_deref().filter(|r| !r.is_empty());
        let (Some(text), Some(latitude), Some(longitude)) =
            (reminder, request.latitude, request.longitude)
        else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        let created = self
            .reminders
            .insert_with(|id| LocationReminder {
                id,
                reminder: text.to_string(),
                latitude,
                longitude,
                place_name: request.place_name.clone().unwrap_or_default(),
                radius: request.radius.unwrap_or(DEFAULT_REMINDER_RADIUS_METERS),
                created_at: unix_now(),
            })
            .await;

        tracing::info!(
            id = created.id,
            radius = created.radius,
            "Location reminder created"
        );
        Ok(created)
    }

    pub async fn list_reminders(&self) -> Vec<LocationReminder> {
        self.reminders.list().await
    }

    pub async fn get_reminder(&self, id: u64) -> Result<LocationReminder, AppError> {
        self.reminders
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound("Location reminder not found".to_string()))
    }

    pub async fn delete_reminder(&self, id: u64) -> Result<(), AppError> {
        self.reminders
            .remove(id)
            .await
            .ok_or_else(|| AppError::NotFound("Location reminder not found".to_string()))?;

        tracing::info!(id, "Location reminder deleted");
        Ok(())
    }

    // ==================== LOCATION OPERATIONS ====================

    /// Record the user's position and return the reminders it triggers.
    ///
    /// Stateless: a reminder is returned on every update that falls inside
    /// its radius.
    pub async fn update_location(&self, location: UserLocation) -> Vec<LocationReminder> {
        *self.user_location.write().await = location;

        let reminders = self.reminders.list().await;
        let nearby = geo::nearby_reminders(location, &reminders);
        tracing::debug!(
            checked = reminders.len(),
            nearby = nearby.len(),
            "User location updated"
        );
        nearby
    }

    pub async fn current_location(&self) -> UserLocation {
        *self.user_location.read().await
    }
}

#![allow(dead_code)]
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::contact::{ContactMessage, NewContactMessage};
use crate::models::service::ServiceListing;
use crate::models::user::{User, UserProfile, UserRole};
use crate::models::work_entry::{NewWorkEntry, WorkEntry};

use super::contact_repository::ContactRepository;
use super::service_repository::ServiceRepository;
use super::user_repository::{UpsertOutcome, UserRepository};
use super::work_repository::WorkRepository;

/// In-memory stand-in for the document store. Fields are public so tests can
/// seed records and mutate them between requests (e.g. flip a role under a
/// still-valid token).
#[derive(Default)]
pub struct MockDb {
    pub users: Mutex<Vec<User>>,
    pub services: Mutex<Vec<ServiceListing>>,
    pub work_entries: Mutex<Vec<WorkEntry>>,
    pub contact_messages: Mutex<Vec<ContactMessage>>,
    pub should_fail: bool,
}

impl MockDb {
    pub fn with_user(user: User) -> Self {
        let db = Self::default();
        db.users.lock().unwrap().push(user);
        db
    }

    pub fn with_service(service: ServiceListing) -> Self {
        let db = Self::default();
        db.services.lock().unwrap().push(service);
        db
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.should_fail {
            return Err(sqlx::Error::Protocol("Mock store failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockDb {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn insert_user_if_absent(
        &self,
        profile: &UserProfile,
    ) -> Result<UpsertOutcome, sqlx::Error> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter().find(|user| user.email == profile.email) {
            return Ok(UpsertOutcome::Existing(existing.clone()));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: profile.email.clone(),
            name: profile.name.clone(),
            role: profile.role,
            designation: profile.designation.clone(),
            bank_account_no: profile.bank_account_no.clone(),
            salary: profile.salary,
            photo_url: profile.photo_url.clone(),
            is_verified: false,
            is_fired: false,
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(UpsertOutcome::Created(user))
    }

    async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_role(&self, email: &str, role: UserRole) -> Result<bool, sqlx::Error> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|user| user.email == email) {
            Some(user) => {
                user.role = Some(role);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_fired(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.is_fired = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_verified(&self, id: Uuid, verified: bool) -> Result<bool, sqlx::Error> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.is_verified = verified;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ServiceRepository for MockDb {
    async fn list_services(&self) -> Result<Vec<ServiceListing>, sqlx::Error> {
        self.check()?;
        Ok(self.services.lock().unwrap().clone())
    }

    async fn find_service_by_id(&self, id: Uuid) -> Result<Option<ServiceListing>, sqlx::Error> {
        self.check()?;
        Ok(self
            .services
            .lock()
            .unwrap()
            .iter()
            .find(|service| service.id == id)
            .cloned())
    }
}

#[async_trait]
impl WorkRepository for MockDb {
    async fn insert_entry(&self, entry: &NewWorkEntry) -> Result<WorkEntry, sqlx::Error> {
        self.check()?;
        let record = WorkEntry {
            id: Uuid::new_v4(),
            employee_email: entry.employee_email.clone(),
            employee_name: entry.employee_name.clone(),
            task: entry.task.clone(),
            hours_worked: entry.hours_worked,
            work_date: entry.work_date,
            created_at: OffsetDateTime::now_utc(),
        };
        self.work_entries.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_entries(&self) -> Result<Vec<WorkEntry>, sqlx::Error> {
        self.check()?;
        Ok(self.work_entries.lock().unwrap().clone())
    }

    async fn list_entries_for_email(&self, email: &str) -> Result<Vec<WorkEntry>, sqlx::Error> {
        self.check()?;
        Ok(self
            .work_entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.employee_email == email)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ContactRepository for MockDb {
    async fn insert_message(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        self.check()?;
        let record = ContactMessage {
            id: Uuid::new_v4(),
            name: message.name.clone(),
            email: message.email.clone(),
            message: message.message.clone(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.contact_messages.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

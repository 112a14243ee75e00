//! Client-side collection stores, one per resource family.
//!
//! Each store keeps the last collection fetched from the server, a loading
//! flag that starts raised, and the message of the most recent failure.
//! New records are prepended as the server returns them; the collection is
//! neither re-sorted nor re-fetched.

use std::marker::PhantomData;

use crate::api::ApiClient;
use crate::api::models::{BodyMeasurementPayload, WeightEntryPayload, WorkoutPayload};
use crate::error::Result;
use crate::models::{
    BodyMeasurement, NewBodyMeasurement, NewWeightEntry, NewWorkout, WeightEntry, WorkoutEntry,
};

/// A resource family as seen by a [`Collection`].
#[async_trait::async_trait]
pub trait Resource: Send + Sync + 'static {
    type Item: Send + Sync;
    type New: Send + Sync;

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self::Item>>;

    async fn create(api: &ApiClient, new: &Self::New) -> Result<Self::Item>;
}

pub struct WeightResource;

#[async_trait::async_trait]
impl Resource for WeightResource {
    type Item = WeightEntry;
    type New = NewWeightEntry;

    async fn fetch_all(api: &ApiClient) -> Result<Vec<WeightEntry>> {
        api.weight_entries()
            .await?
            .into_iter()
            .map(WeightEntry::try_from)
            .collect()
    }

    async fn create(api: &ApiClient, new: &NewWeightEntry) -> Result<WeightEntry> {
        let created = api
            .create_weight_entry(&WeightEntryPayload::from(new))
            .await?;
        WeightEntry::try_from(created)
    }
}

pub struct MeasurementResource;

#[async_trait::async_trait]
impl Resource for MeasurementResource {
    type Item = BodyMeasurement;
    type New = NewBodyMeasurement;

    async fn fetch_all(api: &ApiClient) -> Result<Vec<BodyMeasurement>> {
        api.body_measurements()
            .await?
            .into_iter()
            .map(BodyMeasurement::try_from)
            .collect()
    }

    async fn create(api: &ApiClient, new: &NewBodyMeasurement) -> Result<BodyMeasurement> {
        let created = api
            .create_body_measurement(&BodyMeasurementPayload::from(new))
            .await?;
        BodyMeasurement::try_from(created)
    }
}

pub struct WorkoutResource;

#[async_trait::async_trait]
impl Resource for WorkoutResource {
    type Item = WorkoutEntry;
    type New = NewWorkout;

    async fn fetch_all(api: &ApiClient) -> Result<Vec<WorkoutEntry>> {
        api.workouts()
            .await?
            .into_iter()
            .map(WorkoutEntry::try_from)
            .collect()
    }

    async fn create(api: &ApiClient, new: &NewWorkout) -> Result<WorkoutEntry> {
        let created = api.create_workout(&WorkoutPayload::from(new)).await?;
        WorkoutEntry::try_from(created)
    }
}

pub type WeightEntries = Collection<WeightResource>;
pub type BodyMeasurements = Collection<MeasurementResource>;
pub type Workouts = Collection<WorkoutResource>;

pub struct Collection<R: Resource> {
    api: ApiClient,
    items: Vec<R::Item>,
    loading: bool,
    error: Option<String>,
    _resource: PhantomData<R>,
}

impl<R: Resource> Collection<R> {
    /// Empty store that has not fetched yet; `loading` is already raised.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: true,
            error: None,
            _resource: PhantomData,
        }
    }

    /// Create the store and run the initial fetch.
    pub async fn load(api: ApiClient) -> Self {
        let mut collection = Self::new(api);
        collection.refetch().await;
        collection
    }

    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the collection with the server's current one.
    ///
    /// On failure the previous items are kept and the error flag is set.
    pub async fn refetch(&mut self) {
        self.loading = true;
        self.error = None;

        match R::fetch_all(&self.api).await {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e.to_string()),
        }

        self.loading = false;
    }

    /// Send a new record and put the stored version at the front.
    pub async fn add(&mut self, new: &R::New) -> Result<&R::Item> {
        match R::create(&self.api, new).await {
            Ok(item) => {
                self.items.insert(0, item);
                Ok(&self.items[0])
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

//! Confirm-then-apply reconciliation between the loan API and the local
//! [`RecordStore`].
//!
//! Every operation issues exactly one API call and touches the store only
//! after that call succeeds. On failure the store is left exactly as it was
//! and the error is handed back to the caller, who may retry by invoking the
//! operation again. Operations take `&self`, so several may be in flight at
//! once; the store then reflects whichever response completed last.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    api::{ApiError, LoanApi, LoanPatch},
    form::ValidatedLoanForm,
    loan::{LoanFields, LoanId, LoanRecord},
    store::{RecordStore, SharedStore},
};

type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

/// Why a mutation did not apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// Transport or API-reported failure, passed through unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The operation needs the local copy of a record that is not loaded.
    #[error("loan `{0}` is not in the local list")]
    UnknownRecord(LoanId),
}

/// Runs loan mutations against a [`LoanApi`] and reconciles the store.
pub struct MutationCoordinator<A> {
    api: A,
    store: SharedStore,
    clock: Clock,
}

impl<A: LoanApi> MutationCoordinator<A> {
    /// Coordinator over a fresh, empty store.
    pub fn new(api: A) -> Self {
        Self::with_store(api, RecordStore::shared())
    }

    pub fn with_store(api: A, store: SharedStore) -> Self {
        Self {
            api,
            store,
            clock: Rc::new(Utc::now),
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Owned copy of the current records, for handing to the view layer.
    pub fn snapshot(&self) -> Vec<LoanRecord> {
        self.store.borrow().all().to_vec()
    }

    /// Bulk fetch and replace the store contents.
    pub async fn load(&self) -> Result<usize, MutationError> {
        let records = self.api.list_loans().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to load loans");
            err
        })?;
        let count = records.len();
        self.store.borrow_mut().load(records);
        tracing::info!(count, "loaded loans");
        Ok(count)
    }

    /// Create a loan; the store gains the record under the server's id.
    pub async fn create(&self, form: ValidatedLoanForm) -> Result<LoanRecord, MutationError> {
        let now = (self.clock)();
        let fields = fields_from_form(form, false, Some(now), now);

        let id = self.api.create_loan(&fields).await.map_err(|err| {
            tracing::warn!(error = %err, title = %fields.title, "failed to create loan");
            err
        })?;

        let record = LoanRecord::new(id, fields);
        self.store.borrow_mut().upsert(record.clone());
        tracing::info!(id = %record.id, "created loan");
        Ok(record)
    }

    /// Replace the editable fields of an existing loan.
    ///
    /// `created_at` and the homepage flag come from the local copy; the
    /// update itself never changes visibility.
    pub async fn update(
        &self,
        id: &LoanId,
        form: ValidatedLoanForm,
    ) -> Result<LoanRecord, MutationError> {
        let (created_at, visible_on_home) = {
            let store = self.store.borrow();
            let current = store
                .get(id)
                .ok_or_else(|| MutationError::UnknownRecord(id.clone()))?;
            (current.fields.created_at, current.fields.visible_on_home)
        };

        let fields = fields_from_form(form, visible_on_home, created_at, (self.clock)());
        let patch = LoanPatch::Fields(fields.clone());
        self.api.patch_loan(id, &patch).await.map_err(|err| {
            tracing::warn!(error = %err, %id, "failed to update loan");
            err
        })?;

        let record = LoanRecord::new(id.clone(), fields);
        self.store.borrow_mut().upsert(record.clone());
        tracing::info!(%id, "updated loan");
        Ok(record)
    }

    /// Delete a loan remotely, then locally.
    pub async fn remove(&self, id: &LoanId) -> Result<(), MutationError> {
        self.api.delete_loan(id).await.map_err(|err| {
            tracing::warn!(error = %err, %id, "failed to delete loan");
            err
        })?;
        self.store.borrow_mut().remove(id);
        tracing::info!(%id, "deleted loan");
        Ok(())
    }

    /// Set the homepage flag. Only the flag is sent to the API.
    pub async fn set_visibility(&self, id: &LoanId, visible: bool) -> Result<(), MutationError> {
        let patch = LoanPatch::Visibility {
            show_on_home: visible,
        };
        self.api.patch_loan(id, &patch).await.map_err(|err| {
            tracing::warn!(error = %err, %id, visible, "failed to update loan visibility");
            err
        })?;

        let now = (self.clock)();
        if let Some(record) = self.store.borrow_mut().get_mut(id) {
            record.fields.visible_on_home = visible;
            record.fields.updated_at = Some(now);
        }
        tracing::info!(%id, visible, "updated loan visibility");
        Ok(())
    }

    /// Flip the homepage flag of a loaded record; returns the new value.
    pub async fn toggle_visibility(&self, id: &LoanId) -> Result<bool, MutationError> {
        let next = self
            .store
            .borrow()
            .get(id)
            .map(|record| !record.visible_on_home())
            .ok_or_else(|| MutationError::UnknownRecord(id.clone()))?;
        self.set_visibility(id, next).await?;
        Ok(next)
    }
}

fn fields_from_form(
    form: ValidatedLoanForm,
    visible_on_home: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
) -> LoanFields {
    LoanFields {
        title: form.title,
        category: form.category,
        short_description: form.short_description,
        description: form.description,
        max_loan_amount: form.max_loan_amount,
        interest_rate: form.interest_rate,
        tenure: form.tenure,
        emi_plans: form.emi_plans,
        image_data: form.image_data,
        visible_on_home,
        created_at,
        updated_at: Some(updated_at),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::form::LoanFormInput;

    /// In-memory API double. `fail` makes every call return a network error.
    #[derive(Default)]
    struct ScriptedApi {
        remote: RefCell<Vec<LoanRecord>>,
        patches: RefCell<Vec<(LoanId, LoanPatch)>>,
        next_id: Cell<u32>,
        fail: Cell<bool>,
        calls: Cell<u32>,
    }

    impl ScriptedApi {
        fn with_remote(records: Vec<LoanRecord>) -> Self {
            Self {
                remote: RefCell::new(records),
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail.get() {
                Err(ApiError::Network("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl LoanApi for ScriptedApi {
        async fn list_loans(&self) -> Result<Vec<LoanRecord>, ApiError> {
            self.check()?;
            Ok(self.remote.borrow().clone())
        }

        async fn get_loan(&self, id: &LoanId) -> Result<LoanRecord, ApiError> {
            self.check()?;
            self.remote
                .borrow()
                .iter()
                .find(|record| &record.id == id)
                .cloned()
                .ok_or_else(|| ApiError::from_status(404, r#"{"message":"Loan not found"}"#))
        }

        async fn create_loan(&self, fields: &LoanFields) -> Result<LoanId, ApiError> {
            self.check()?;
            self.next_id.set(self.next_id.get() + 1);
            let id = LoanId::new(format!("srv-{}", self.next_id.get()));
            self.remote
                .borrow_mut()
                .push(LoanRecord::new(id.clone(), fields.clone()));
            Ok(id)
        }

        async fn patch_loan(&self, id: &LoanId, patch: &LoanPatch) -> Result<(), ApiError> {
            self.check()?;
            self.patches.borrow_mut().push((id.clone(), patch.clone()));
            Ok(())
        }

        async fn delete_loan(&self, id: &LoanId) -> Result<(), ApiError> {
            self.check()?;
            let mut remote = self.remote.borrow_mut();
            let before = remote.len();
            remote.retain(|record| &record.id != id);
            if remote.len() == before {
                return Err(ApiError::from_status(404, r#"{"message":"Loan not found"}"#));
            }
            Ok(())
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn business_loan() -> LoanRecord {
        LoanRecord::new(LoanId::new("1"), LoanFields {
            title: "Shop Expansion".into(),
            category: "Business".into(),
            short_description: "Grow your shop".into(),
            max_loan_amount: "$25000".into(),
            interest_rate: "8% - 15%".into(),
            tenure: "3 - 36 months".into(),
            visible_on_home: true,
            created_at: Some(t0()),
            updated_at: Some(t0()),
            ..LoanFields::default()
        })
    }

    fn form(category: &str) -> ValidatedLoanForm {
        LoanFormInput {
            title: "Shop Expansion".into(),
            category: category.into(),
            short_description: "Grow your shop".into(),
            max_loan: "30000".into(),
            interest_rate: "8% - 15%".into(),
            tenure: "3 - 36 months".into(),
            emi_plans: "6 months, 12 months".into(),
            ..LoanFormInput::default()
        }
        .validate()
        .expect("valid form")
    }

    async fn loaded(api: ScriptedApi) -> MutationCoordinator<ScriptedApi> {
        let later = t0() + Duration::hours(1);
        let coordinator = MutationCoordinator::new(api).with_clock(move || later);
        coordinator.load().await.expect("initial load");
        coordinator
    }

    #[tokio::test]
    async fn load_replaces_store_and_failure_keeps_it() {
        let coordinator = loaded(ScriptedApi::with_remote(vec![business_loan()])).await;
        assert_eq!(coordinator.snapshot(), vec![business_loan()]);

        coordinator.api().fail.set(true);
        let err = coordinator.load().await.expect_err("load must fail");
        assert!(matches!(err, MutationError::Api(ApiError::Network(_))));
        assert_eq!(coordinator.snapshot(), vec![business_loan()]);
    }

    #[tokio::test]
    async fn create_uses_server_id_and_equal_timestamps() {
        let coordinator = loaded(ScriptedApi::default()).await;

        let created = coordinator.create(form("Business")).await.expect("create");

        assert_eq!(created.id, LoanId::new("srv-1"));
        assert_eq!(created.fields.created_at, created.fields.updated_at);
        assert_eq!(created.fields.max_loan_amount, "$30000");
        assert_eq!(created.fields.emi_plans, vec!["6 months", "12 months"]);
        assert!(!created.visible_on_home());
        let store = coordinator.store().borrow();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&LoanId::new("srv-1")), Some(&created));
    }

    #[tokio::test]
    async fn failed_create_leaves_store_untouched() {
        let coordinator = loaded(ScriptedApi::with_remote(vec![business_loan()])).await;
        let before = coordinator.store().borrow().clone();

        coordinator.api().fail.set(true);
        let err = coordinator.create(form("Personal")).await.expect_err("create must fail");

        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(*coordinator.store().borrow(), before);
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_visibility() {
        let coordinator = loaded(ScriptedApi::with_remote(vec![business_loan()])).await;
        let id = LoanId::new("1");

        let updated = coordinator.update(&id, form("Personal")).await.expect("update");

        let all = coordinator.snapshot();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].category(), "Personal");
        assert_eq!(all[0].fields.created_at, Some(t0()));
        assert_ne!(all[0].fields.updated_at, Some(t0()));
        assert!(all[0].visible_on_home());
        assert_eq!(updated, all[0]);

        let patches = coordinator.api().patches.borrow();
        assert!(matches!(&patches[0].1, LoanPatch::Fields(fields) if fields.visible_on_home));
    }

    #[tokio::test]
    async fn update_of_unloaded_record_makes_no_api_call() {
        let coordinator = loaded(ScriptedApi::default()).await;
        let calls_before = coordinator.api().calls.get();

        let err = coordinator
            .update(&LoanId::new("ghost"), form("Medical"))
            .await
            .expect_err("unknown record");

        assert_eq!(err, MutationError::UnknownRecord(LoanId::new("ghost")));
        assert_eq!(coordinator.api().calls.get(), calls_before);
    }

    #[tokio::test]
    async fn failed_update_leaves_store_untouched() {
        let coordinator = loaded(ScriptedApi::with_remote(vec![business_loan()])).await;
        coordinator.api().fail.set(true);

        coordinator
            .update(&LoanId::new("1"), form("Personal"))
            .await
            .expect_err("update must fail");

        assert_eq!(coordinator.snapshot(), vec![business_loan()]);
    }

    #[tokio::test]
    async fn remove_applies_only_after_success() {
        let coordinator = loaded(ScriptedApi::with_remote(vec![business_loan()])).await;
        let id = LoanId::new("1");

        coordinator.api().fail.set(true);
        coordinator.remove(&id).await.expect_err("delete must fail");
        assert!(coordinator.store().borrow().get(&id).is_some());

        coordinator.api().fail.set(false);
        coordinator.remove(&id).await.expect("delete");
        assert!(coordinator.store().borrow().is_empty());
    }

    #[tokio::test]
    async fn remote_not_found_is_passed_through() {
        let coordinator = loaded(ScriptedApi::with_remote(vec![business_loan()])).await;
        coordinator.api().remote.borrow_mut().clear();

        let err = coordinator.remove(&LoanId::new("1")).await.expect_err("gone remotely");

        match err {
            MutationError::Api(api) => {
                assert!(api.is_not_found());
                assert_eq!(api.to_string(), "Loan not found");
            },
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(coordinator.store().borrow().len(), 1);
    }

    #[tokio::test]
    async fn visibility_sends_flag_only_and_reverts_nothing_on_failure() {
        let coordinator = loaded(ScriptedApi::with_remote(vec![business_loan()])).await;
        let id = LoanId::new("1");

        let visible = coordinator.toggle_visibility(&id).await.expect("toggle");
        assert!(!visible);
        {
            let store = coordinator.store().borrow();
            let record = store.get(&id).expect("still present");
            assert!(!record.visible_on_home());
            assert_ne!(record.fields.updated_at, Some(t0()));
        }
        assert_eq!(coordinator.api().patches.borrow()[0].1, LoanPatch::Visibility {
            show_on_home: false,
        });

        let before = coordinator.store().borrow().clone();
        coordinator.api().fail.set(true);
        coordinator
            .set_visibility(&id, true)
            .await
            .expect_err("toggle must fail");
        assert_eq!(*coordinator.store().borrow(), before);
    }
}

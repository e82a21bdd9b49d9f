//! Реактивная обвязка страницы-списка над [`CrudSynchronizer`].
//!
//! Страница держит один `GridPage` и отдаёт ему все загрузки и операции.
//! Результаты запросов применяются через `try_update`: если страница уже
//! размонтирована, сигналы освобождены и результат молча отбрасывается.

use crate::shared::grid::{
    derive, ColumnDef, CrudSynchronizer, FailureKind, GridError, GridRecord, MutationOutput,
    PendingMutation, RecordId, RowModel, SyncOutcome, TableState,
};
use crate::system::auth::context::{use_session_context, SessionContext};
use leptos::prelude::*;
use std::future::Future;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Что открыто в форме записи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(RecordId),
}

pub struct GridPage<T: GridRecord> {
    pub sync: RwSignal<CrudSynchronizer<T>>,
    pub state: RwSignal<TableState>,
    /// Баннер ошибки над таблицей
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    session: SessionContext,
}

impl<T: GridRecord> Clone for GridPage<T> {
    fn clone(&self) -> Self {
        Self {
            sync: self.sync,
            state: self.state,
            error: self.error,
            loading: self.loading,
            session: self.session.clone(),
        }
    }
}

impl<T: GridRecord> GridPage<T> {
    pub fn new(state: TableState) -> Self {
        Self {
            sync: RwSignal::new(CrudSynchronizer::new()),
            state: RwSignal::new(state),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            session: use_session_context(),
        }
    }

    /// Модель строк, пересчитываемая при изменении данных или состояния таблицы
    pub fn model(&self, columns: Arc<Vec<ColumnDef<T>>>) -> Memo<RowModel<T>> {
        let sync = self.sync;
        let state = self.state;
        let model = Memo::new(move |_| {
            sync.with(|s| state.with(|st| derive(s.records(), st, &columns)))
        });

        // индекс страницы в состоянии не выходит за диапазон
        Effect::new(move |_| {
            let total = model.with(|m| m.total_filtered);
            let out_of_range = state
                .with_untracked(|s| s.pagination.clamped_index(total) != s.pagination.page_index);
            if out_of_range {
                state.update(|s| {
                    s.clamp_page(total);
                });
            }
        });

        model
    }

    pub fn record(&self, id: RecordId) -> Option<T> {
        self.sync.with_untracked(|s| s.get(id).cloned())
    }

    fn with_both<R>(
        &self,
        f: impl FnOnce(&mut CrudSynchronizer<T>, &mut TableState) -> R,
    ) -> Option<R> {
        let state = self.state;
        self.sync
            .try_update(move |sync| state.try_update(|st| f(sync, st)))
            .flatten()
    }

    /// Загружает список целиком. Результат более ранней загрузки, пришедший
    /// после более поздней, отбрасывается.
    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = Result<Vec<T>, GridError>> + 'static,
    {
        let Some(ticket) = self.sync.try_update(|s| s.begin_fetch()) else {
            return;
        };
        self.loading.set(true);
        self.error.set(None);

        let this = self.clone();
        spawn_local(async move {
            let result = fut.await;
            let latest = this
                .sync
                .try_with_untracked(|s| s.is_latest(ticket))
                .unwrap_or(false);
            if !latest {
                log::debug!("superseded list result dropped");
                return;
            }
            match result {
                Ok(records) => {
                    log::info!("loaded {} records", records.len());
                    this.with_both(|sync, state| sync.on_fetched(ticket, records, state));
                }
                Err(err) => this.report(err),
            }
            let _ = this.loading.try_set(false);
        });
    }

    /// Ждёт результат операции и применяет его; `on_done` получает итог
    pub fn submit<F>(
        &self,
        pending: PendingMutation,
        fut: F,
        on_done: impl FnOnce(Result<SyncOutcome, GridError>) + 'static,
    ) where
        F: Future<Output = Result<MutationOutput<T>, GridError>> + 'static,
    {
        let this = self.clone();
        spawn_local(async move {
            let result = fut.await;
            match this.with_both(move |sync, state| sync.resolve(pending, result, state)) {
                Some(outcome) => {
                    if let Err(err) = &outcome {
                        if err.kind() == FailureKind::Session {
                            this.session.sign_out();
                        }
                    }
                    on_done(outcome)
                }
                None => log::debug!("result of #{} arrived after unmount", pending.seq),
            }
        });
    }

    pub fn create<F>(&self, fut: F, on_done: impl FnOnce(Result<SyncOutcome, GridError>) + 'static)
    where
        F: Future<Output = Result<MutationOutput<T>, GridError>> + 'static,
    {
        if let Some(pending) = self.sync.try_update(|s| s.begin_create()) {
            self.submit(pending, fut, on_done);
        }
    }

    pub fn update<F>(
        &self,
        id: RecordId,
        fut: F,
        on_done: impl FnOnce(Result<SyncOutcome, GridError>) + 'static,
    ) where
        F: Future<Output = Result<MutationOutput<T>, GridError>> + 'static,
    {
        if let Some(pending) = self.sync.try_update(|s| s.begin_update(id)) {
            self.submit(pending, fut, on_done);
        }
    }

    /// Удаление. Если запись удалять нельзя, запрос не отправляется и
    /// `on_done` сразу получает отказ.
    pub fn delete<F>(
        &self,
        id: RecordId,
        fut: F,
        on_done: impl FnOnce(Result<SyncOutcome, GridError>) + 'static,
    ) where
        F: Future<Output = Result<MutationOutput<T>, GridError>> + 'static,
    {
        match self.sync.try_update(|s| s.begin_delete(id)) {
            Some(Ok(pending)) => self.submit(pending, fut, on_done),
            Some(Err(err)) => on_done(Err(err)),
            None => {}
        }
    }

    /// Ошибка в баннер страницы; ошибка сессии завершает сессию
    pub fn report(&self, err: GridError) {
        self.session.report(err, self.error);
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

//! Синхронизация локального хранилища с результатами операций API.
//!
//! Каждая операция получает порядковый номер при отправке. Для каждого id
//! запоминается номер последнего применённого результата; более ранний
//! результат, пришедший позже, отбрасывается. Так в хранилище всегда
//! оказывается последнее отправленное изменение, в каком бы порядке ни
//! приходили ответы. Номер хранится, только пока по id есть
//! незавершённые операции.
//!
//! Если список загружен с серверным фильтром (`set_scope`), записи
//! с другим `scope_key` после создания или правки убираются из хранилища:
//! повторная загрузка их тоже не вернула бы.

use super::error::{FailureKind, GridError};
use super::record::{GridRecord, RecordId};
use super::state::TableState;
use super::store::RecordStore;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Отправленная, но ещё не завершённая операция
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMutation {
    pub kind: MutationKind,
    pub target: Option<RecordId>,
    pub seq: u64,
}

/// Успешный результат операции API
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutput<T> {
    Created(T),
    Updated(T),
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Результат применён к хранилищу
    Applied,
    /// Применять нечего (запись уже исчезла)
    Unchanged,
    /// Результат устарел и отброшен
    Discarded,
}

/// Билет загрузки списка; применим только результат последней загрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct CrudSynchronizer<T> {
    store: RecordStore<T>,
    next_seq: u64,
    applied: BTreeMap<RecordId, u64>,
    in_flight: BTreeMap<RecordId, usize>,
    scope: Option<i64>,
    fetch_generation: u64,
}

impl<T: GridRecord> Default for CrudSynchronizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GridRecord> CrudSynchronizer<T> {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            next_seq: 0,
            applied: BTreeMap::new(),
            in_flight: BTreeMap::new(),
            scope: None,
            fetch_generation: 0,
        }
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn records(&self) -> &[T] {
        self.store.records()
    }

    pub fn version(&self) -> u64 {
        self.store.version()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.store.get(id)
    }

    /// Серверный фильтр текущего списка; `None`: список без фильтра
    pub fn set_scope(&mut self, scope: Option<i64>) {
        self.scope = scope;
    }

    pub fn scope(&self) -> Option<i64> {
        self.scope
    }

    fn in_scope(&self, record: &T) -> bool {
        self.scope.is_none() || record.scope_key() == self.scope
    }

    pub fn on_created(&mut self, record: T) {
        self.store.apply_created(record);
    }

    /// `false`, если записи уже нет
    pub fn on_updated(&mut self, record: T) -> bool {
        self.store.apply_updated(record)
    }

    pub fn on_deleted(&mut self, id: RecordId, state: &mut TableState) -> bool {
        state.purge_selection(id);
        self.store.apply_deleted(id)
    }

    pub fn on_refetched(&mut self, records: Vec<T>, state: &mut TableState) {
        self.store.replace_all(records);
        state.retain_selection(self.store.ids());
    }

    fn issue(&mut self, kind: MutationKind, target: Option<RecordId>) -> PendingMutation {
        if let Some(id) = target {
            *self.in_flight.entry(id).or_insert(0) += 1;
        }
        self.next_seq += 1;
        PendingMutation {
            kind,
            target,
            seq: self.next_seq,
        }
    }

    pub fn begin_create(&mut self) -> PendingMutation {
        self.issue(MutationKind::Create, None)
    }

    pub fn begin_update(&mut self, id: RecordId) -> PendingMutation {
        self.issue(MutationKind::Update, Some(id))
    }

    /// Запись с причиной запрета удаления отклоняется до обращения к API
    pub fn begin_delete(&mut self, id: RecordId) -> Result<PendingMutation, GridError> {
        if let Some(reason) = self.store.get(id).and_then(GridRecord::delete_blocker) {
            log::warn!("delete of record {} refused: {}", id, reason);
            return Err(GridError::Precondition(reason));
        }
        Ok(self.issue(MutationKind::Delete, Some(id)))
    }

    fn is_stale(&self, id: RecordId, seq: u64) -> bool {
        self.applied.get(&id).is_some_and(|last| *last > seq)
    }

    fn mark_applied(&mut self, id: RecordId, seq: u64) {
        if self.in_flight.contains_key(&id) {
            self.applied.insert(id, seq);
        }
    }

    /// Операция завершена; без других операций по id его номер забывается
    fn settle(&mut self, pending: PendingMutation) {
        let Some(id) = pending.target else {
            return;
        };
        let done = match self.in_flight.get_mut(&id) {
            Some(count) => {
                *count = count.saturating_sub(1);
                *count == 0
            }
            None => true,
        };
        if done {
            self.in_flight.remove(&id);
            self.applied.remove(&id);
        }
    }

    /// Применяет результат операции. Ошибки возвращаются как есть и не трогают
    /// хранилище; `StaleReference` считается успехом: записи на сервере уже
    /// нет, и локальная копия тоже удаляется.
    pub fn resolve(
        &mut self,
        pending: PendingMutation,
        outcome: Result<MutationOutput<T>, GridError>,
        state: &mut TableState,
    ) -> Result<SyncOutcome, GridError> {
        let result = self.apply(pending, outcome, state);
        self.settle(pending);
        result
    }

    fn apply(
        &mut self,
        pending: PendingMutation,
        outcome: Result<MutationOutput<T>, GridError>,
        state: &mut TableState,
    ) -> Result<SyncOutcome, GridError> {
        let output = match outcome {
            Ok(output) => output,
            Err(err) if err.kind() == FailureKind::StaleReference => {
                log::debug!("{:?} #{} hit a vanished record: {}", pending.kind, pending.seq, err);
                return Ok(match (pending.kind, pending.target) {
                    (MutationKind::Delete | MutationKind::Update, Some(id)) => {
                        self.resolve_deleted(id, pending.seq, state)
                    }
                    _ => SyncOutcome::Unchanged,
                });
            }
            Err(err) => {
                log::error!("{:?} #{} failed: {}", pending.kind, pending.seq, err);
                return Err(err);
            }
        };

        let outcome = match output {
            MutationOutput::Created(record) => {
                let id = record.record_id();
                if self.is_stale(id, pending.seq) {
                    SyncOutcome::Discarded
                } else if !self.in_scope(&record) {
                    log::debug!("created record {} is outside the list filter", id);
                    self.resolve_deleted(id, pending.seq, state)
                } else {
                    self.mark_applied(id, pending.seq);
                    self.on_created(record);
                    SyncOutcome::Applied
                }
            }
            MutationOutput::Updated(record) => {
                let id = record.record_id();
                if self.is_stale(id, pending.seq) {
                    SyncOutcome::Discarded
                } else if !self.in_scope(&record) {
                    log::debug!("updated record {} left the list filter", id);
                    self.resolve_deleted(id, pending.seq, state)
                } else {
                    self.mark_applied(id, pending.seq);
                    if self.on_updated(record) {
                        SyncOutcome::Applied
                    } else {
                        SyncOutcome::Unchanged
                    }
                }
            }
            MutationOutput::Deleted => match pending.target {
                Some(id) => self.resolve_deleted(id, pending.seq, state),
                None => {
                    log::warn!("delete result #{} without target id", pending.seq);
                    SyncOutcome::Unchanged
                }
            },
        };
        if outcome == SyncOutcome::Discarded {
            log::warn!("stale result of {:?} #{} discarded", pending.kind, pending.seq);
        }
        Ok(outcome)
    }

    fn resolve_deleted(&mut self, id: RecordId, seq: u64, state: &mut TableState) -> SyncOutcome {
        if self.is_stale(id, seq) {
            return SyncOutcome::Discarded;
        }
        self.mark_applied(id, seq);
        if self.on_deleted(id, state) {
            SyncOutcome::Applied
        } else {
            SyncOutcome::Unchanged
        }
    }

    /// Новая загрузка списка делает все предыдущие билеты недействительными
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        FetchTicket {
            generation: self.fetch_generation,
        }
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.fetch_generation
    }

    /// `false`, если результат относится к устаревшей загрузке
    pub fn on_fetched(&mut self, ticket: FetchTicket, records: Vec<T>, state: &mut TableState) -> bool {
        if !self.is_latest(ticket) {
            log::warn!(
                "list result of fetch {} dropped, latest is {}",
                ticket.generation,
                self.fetch_generation
            );
            return false;
        }
        self.on_refetched(records, state);
        true
    }
}

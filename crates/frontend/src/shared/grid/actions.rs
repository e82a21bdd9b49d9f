//! Реестр команд строк.
//!
//! Колонки объявляются один раз и ничего не знают о странице. Страница
//! собирает реестр перед отрисовкой таблицы и передаёт его вместе с
//! колонками; ячейка действий находит обработчик по имени команды и вызывает
//! его с id строки. Реестр после сборки только читается: чтобы поменять
//! поведение, страница собирает новый.

use super::record::RecordId;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Логическая команда строки
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowAction {
    OpenEdit,
    OpenDelete,
    OpenDetails,
}

impl RowAction {
    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::OpenEdit => "edit",
            RowAction::OpenDelete => "delete",
            RowAction::OpenDetails => "eye",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RowAction::OpenEdit => "Редактировать",
            RowAction::OpenDelete => "Удалить",
            RowAction::OpenDetails => "Подробнее",
        }
    }
}

pub type ActionHandler = Arc<dyn Fn(RecordId) + Send + Sync>;

#[derive(Clone, Default)]
pub struct ActionRegistry {
    handlers: BTreeMap<RowAction, ActionHandler>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Регистрирует обработчик (только на этапе сборки реестра)
    pub fn on<F>(mut self, action: RowAction, handler: F) -> Self
    where
        F: Fn(RecordId) + Send + Sync + 'static,
    {
        self.handlers.insert(action, Arc::new(handler));
        self
    }

    pub fn handles(&self, action: RowAction) -> bool {
        self.handlers.contains_key(&action)
    }

    /// Вызывает обработчик команды. Отсутствующий обработчик не считается ошибкой:
    /// вызов игнорируется и возвращается `false`.
    pub fn dispatch(&self, action: RowAction, id: RecordId) -> bool {
        match self.handlers.get(&action) {
            Some(handler) => {
                handler(id);
                true
            }
            None => {
                log::debug!("no handler registered for {:?} (row {})", action, id);
                false
            }
        }
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

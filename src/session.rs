//! A calculator session wired to a key-value store.

use crate::builder::CalculatorBuilder;
use crate::config::CalculatorConfig;
use crate::core::HistoryLog;
use crate::engine::{
    parse_inputs, Action, CalculationEngine, Evaluation, Input, InputError, MemoryAction,
};
use crate::math::AngleMode;
use crate::memory::MemoryCell;
use crate::storage::{HistoryStore, KeyValueStore, StorageError};
use crate::theme::{SystemPreferences, ThemeEvent, ThemeMode, ThemeState};
use tracing::{debug, warn};

/// The calculation engine, memory cell and theme state sharing one store.
///
/// The session routes inputs to the engine and persists whatever they
/// change. Persistence failures during input are logged and otherwise
/// ignored; the in-session state stays authoritative.
///
/// # Example
///
/// ```rust
/// use abacus::session::Calculator;
/// use abacus::storage::InMemoryStore;
///
/// let mut calc = Calculator::new(InMemoryStore::new());
/// calc.press_line("12 + 7 =").unwrap();
///
/// assert_eq!(calc.display(), "19");
/// assert_eq!(calc.history().entries()[0].expression(), "12 + 7");
/// ```
#[derive(Debug)]
pub struct Calculator<K: KeyValueStore> {
    store: K,
    engine: CalculationEngine,
    history_store: HistoryStore,
    memory: MemoryCell,
    theme: ThemeState,
}

impl<K: KeyValueStore> Calculator<K> {
    /// Start a session with the default configuration.
    pub fn new(store: K) -> Self {
        Self::from_parts(store, &CalculatorConfig::default(), SystemPreferences::default())
    }

    pub fn builder() -> CalculatorBuilder<K> {
        CalculatorBuilder::new()
    }

    /// Restore persisted state from `store` and apply `config`.
    ///
    /// `config` is assumed valid.
    pub(crate) fn from_parts(
        store: K,
        config: &CalculatorConfig,
        system: SystemPreferences,
    ) -> Self {
        let history_store = HistoryStore::new(config.history_capacity);
        let history = history_store.load(&store);
        let engine = CalculationEngine::new(config.angle_mode, config.format, history);
        let memory = MemoryCell::load(&store);
        let theme = ThemeState::load(&store, system);

        debug!(
            history = engine.history().len(),
            angle_mode = %config.angle_mode,
            "calculator session started"
        );
        Self {
            store,
            engine,
            history_store,
            memory,
            theme,
        }
    }

    /// Apply one input.
    pub fn press(&mut self, input: Input) -> Evaluation {
        debug!(?input, "input");
        let outcome = match input {
            Input::Digit(digit) => {
                self.engine.input_digit(digit);
                Evaluation::Unchanged
            }
            Input::Operator(op) => self.engine.input_operator(op),
            Input::Action(action) => self.act(action),
            Input::Function(function) => self.engine.apply_function(function),
            Input::BinaryFunction(function) => self.engine.input_binary_function(function),
            Input::Convert(conversion) => self.engine.apply_conversion(conversion),
            Input::Constant(constant) => {
                self.engine.insert_constant(constant);
                Evaluation::Unchanged
            }
            Input::Memory(action) => {
                self.memory_action(action);
                Evaluation::Unchanged
            }
        };

        if outcome.is_completed() {
            self.persist_history();
        }
        outcome
    }

    /// Parse and apply a single token such as `7`, `+` or `sqrt`.
    pub fn press_token(&mut self, token: &str) -> Result<Evaluation, InputError> {
        let input = token.parse()?;
        Ok(self.press(input))
    }

    /// Parse a whitespace-separated line and apply every input in order.
    ///
    /// Nothing is applied if any token is unknown. Returns the last outcome
    /// that was not [`Evaluation::Unchanged`].
    pub fn press_line(&mut self, line: &str) -> Result<Evaluation, InputError> {
        let inputs = parse_inputs(line)?;
        let mut last = Evaluation::Unchanged;
        for input in inputs {
            match self.press(input) {
                Evaluation::Unchanged => {}
                outcome => last = outcome,
            }
        }
        Ok(last)
    }

    pub fn display(&self) -> &str {
        self.engine.display()
    }

    pub fn pending_label(&self) -> Option<String> {
        self.engine.pending_label()
    }

    pub fn history(&self) -> &HistoryLog {
        self.engine.history()
    }

    /// Empty the history and persist the empty list.
    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        self.engine.clear_history();
        self.history_store.persist(&mut self.store, self.engine.history())
    }

    /// Load the result of history entry `index` into the display.
    pub fn recall_history(&mut self, index: usize) -> bool {
        self.engine.recall_history(index)
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.engine.angle_mode()
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.engine.set_angle_mode(mode);
    }

    pub fn engine(&self) -> &CalculationEngine {
        &self.engine
    }

    pub fn memory(&self) -> &MemoryCell {
        &self.memory
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn toggle_theme(&mut self) -> Result<ThemeMode, StorageError> {
        self.theme.toggle(&mut self.store)
    }

    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<(), StorageError> {
        self.theme.set_theme(&mut self.store, mode)
    }

    pub fn apply_auto_theme(&mut self, hour: u32) -> Result<ThemeMode, StorageError> {
        self.theme.apply_auto(&mut self.store, hour)
    }

    pub fn system_preference_changed(&mut self, prefers_dark: bool) -> bool {
        self.theme.system_preference_changed(&self.store, prefers_dark)
    }

    /// Switch to a named color preset; unknown names are ignored.
    pub fn apply_preset(&mut self, name: &str) -> Result<bool, StorageError> {
        self.theme.apply_preset(&mut self.store, name)
    }

    pub fn toggle_high_contrast(&mut self) -> Result<bool, StorageError> {
        self.theme.toggle_high_contrast(&mut self.store)
    }

    pub fn toggle_color_blind(&mut self) -> Result<bool, StorageError> {
        self.theme.toggle_color_blind(&mut self.store)
    }

    pub fn subscribe_theme(&mut self, subscriber: impl Fn(&ThemeEvent) + Send + Sync + 'static) {
        self.theme.subscribe(subscriber);
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn into_store(self) -> K {
        self.store
    }

    fn act(&mut self, action: Action) -> Evaluation {
        match action {
            Action::Clear => {
                self.engine.clear();
                Evaluation::Unchanged
            }
            Action::Delete => {
                self.engine.backspace();
                Evaluation::Unchanged
            }
            Action::Calculate => self.engine.evaluate(),
            Action::Percent => self.engine.percent(),
            Action::ToggleParentheses => {
                self.engine.toggle_parentheses();
                Evaluation::Unchanged
            }
        }
    }

    fn memory_action(&mut self, action: MemoryAction) {
        if action == MemoryAction::Recall {
            let value = self.memory.recall(&self.store);
            self.engine.set_value(value);
            return;
        }
        if action == MemoryAction::Clear {
            if let Err(error) = self.memory.clear(&mut self.store) {
                warn!(%error, "failed to clear memory");
            }
            return;
        }

        let value = self.engine.current().value();
        if !value.is_finite() {
            debug!(?action, display = self.display(), "no value for memory");
            return;
        }

        let result = match action {
            MemoryAction::Store => self.memory.store(&mut self.store, value),
            MemoryAction::Add => self.memory.add(&mut self.store, value).map(|_| ()),
            MemoryAction::Subtract => self.memory.subtract(&mut self.store, value).map(|_| ()),
            MemoryAction::Recall | MemoryAction::Clear => Ok(()),
        };
        if let Err(error) = result {
            warn!(%error, ?action, "failed to persist memory");
        }
        self.engine.commit_entry();
    }

    fn persist_history(&mut self) {
        if let Err(error) = self
            .history_store
            .persist(&mut self.store, self.engine.history())
        {
            warn!(%error, "failed to persist history");
        }
    }
}

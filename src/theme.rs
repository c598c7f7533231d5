// src/theme.rs

use eframe::Storage;
use egui::ThemePreference;
use log::{info, warn};

use crate::signal::{Observers, SubscriptionId};

/// Clave persistida con el tema elegido.
pub const THEME_KEY: &str = "selectedTheme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppTheme {
    Light,
    Dark,
    #[default]
    System,
}

impl AppTheme {
    pub const ALL: [AppTheme; 3] = [AppTheme::Light, AppTheme::Dark, AppTheme::System];

    /// Valor tal y como se guarda en el almacenamiento.
    pub fn label(self) -> &'static str {
        match self {
            AppTheme::Light => "Light",
            AppTheme::Dark => "Dark",
            AppTheme::System => "System",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppTheme::Light => "☀",
            AppTheme::Dark => "🌙",
            AppTheme::System => "🌓",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == value.trim())
    }

    /// Light -> Dark -> System -> Light
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn preference(self) -> ThemePreference {
        match self {
            AppTheme::Light => ThemePreference::Light,
            AppTheme::Dark => ThemePreference::Dark,
            AppTheme::System => ThemePreference::System,
        }
    }
}

/// Estado del tema para todo el proceso. Se crea una vez al arrancar y se
/// pasa por referencia a quien lo necesite.
#[derive(Debug, Default)]
pub struct ThemeManager {
    current: AppTheme,
    observers: Observers<AppTheme>,
}

impl ThemeManager {
    pub fn new(current: AppTheme) -> Self {
        Self {
            current,
            observers: Observers::new(),
        }
    }

    /// Lee el tema guardado; si falta o no se reconoce, `System`.
    pub fn load(storage: Option<&dyn Storage>) -> Self {
        let stored = storage.and_then(|s| s.get_string(THEME_KEY));
        let current = match stored.as_deref() {
            None => AppTheme::default(),
            Some(raw) => AppTheme::from_label(raw).unwrap_or_else(|| {
                warn!("unknown stored theme {raw:?}, falling back to System");
                AppTheme::default()
            }),
        };
        info!("theme loaded: {}", current.label());
        Self::new(current)
    }

    pub fn current(&self) -> AppTheme {
        self.current
    }

    /// Pasa al siguiente tema y avisa a los observadores. Quien llama debe
    /// persistirlo con `persist`.
    pub fn toggle(&mut self) -> AppTheme {
        self.current = self.current.next();
        info!("theme changed to {}", self.current.label());
        self.observers.publish(&self.current);
        self.current
    }

    pub fn persist(&self, storage: &mut dyn Storage) {
        storage.set_string(THEME_KEY, self.current.label().to_owned());
        storage.flush();
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&AppTheme) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
        flushes: usize,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn missing_key_defaults_to_system() {
        assert_eq!(ThemeManager::load(None).current(), AppTheme::System);
        let storage = MemoryStorage::default();
        assert_eq!(ThemeManager::load(Some(&storage)).current(), AppTheme::System);
    }

    #[test]
    fn unknown_value_defaults_to_system() {
        let mut storage = MemoryStorage::default();
        storage.set_string(THEME_KEY, "Sepia".into());
        assert_eq!(ThemeManager::load(Some(&storage)).current(), AppTheme::System);
    }

    #[test]
    fn toggle_cycles_and_persists() {
        let mut storage = MemoryStorage::default();
        storage.set_string(THEME_KEY, "Light".into());
        let mut theme = ThemeManager::load(Some(&storage));

        assert_eq!(theme.toggle(), AppTheme::Dark);
        theme.persist(&mut storage);
        assert_eq!(storage.get_string(THEME_KEY).as_deref(), Some("Dark"));
        assert_eq!(storage.flushes, 1);

        assert_eq!(theme.toggle(), AppTheme::System);
        assert_eq!(theme.toggle(), AppTheme::Light);
        theme.persist(&mut storage);

        let reloaded = ThemeManager::load(Some(&storage));
        assert_eq!(reloaded.current(), AppTheme::Light);
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let mut a = ThemeManager::new(AppTheme::Light);
        let b = ThemeManager::new(AppTheme::Light);
        a.toggle();
        assert_eq!(a.current(), AppTheme::Dark);
        assert_eq!(b.current(), AppTheme::Light);
    }

    #[test]
    fn observers_receive_new_theme() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut theme = ThemeManager::new(AppTheme::Dark);
        {
            let seen = Rc::clone(&seen);
            theme.subscribe(move |t| seen.borrow_mut().push(*t));
        }
        theme.toggle();
        theme.toggle();
        assert_eq!(*seen.borrow(), vec![AppTheme::System, AppTheme::Light]);
    }

    #[test]
    fn labels_round_trip() {
        for theme in AppTheme::ALL {
            assert_eq!(AppTheme::from_label(theme.label()), Some(theme));
        }
        assert_eq!(AppTheme::System.preference(), ThemePreference::System);
    }
}

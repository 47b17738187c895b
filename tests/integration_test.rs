use anyhow::Result;
use std::cell::RefCell;
use std::env;
use std::fs;
use std::rc::Rc;

use rtasks::{
    bind_persistence, full_text_of, load_tasks, save_tasks, JsonFileStorage, PreferenceStorage,
    PresentationSurface, Task, ThemePreference, ThemeStore, THEME_KEY,
};

fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Write the release notes".to_string(),
            description: Some("Cover the theme toggle".to_string()),
            status: "In Progress".to_string(),
            priority: "High".to_string(),
            color: "Blue".to_string(),
            full_text: full_text_of("Write the release notes", Some("Cover the theme toggle")),
        },
        Task {
            id: 2,
            title: "Clean the garage shelves".to_string(),
            description: None,
            status: "Completed".to_string(),
            priority: "Low".to_string(),
            color: "Green".to_string(),
            full_text: full_text_of("Clean the garage shelves", None),
        },
    ]
}

#[test]
fn test_write_and_read_task_file() -> Result<()> {
    let test_file = env::temp_dir().join("rtasks_integration_tasks.json");

    // Clean up any existing file
    let _ = fs::remove_file(&test_file);

    let tasks = sample_tasks();
    save_tasks(&test_file, &tasks)?;

    let loaded = load_tasks(&test_file)?;
    assert_eq!(loaded, tasks);

    // The optional description must be absent from the file, not null.
    let raw = fs::read_to_string(&test_file)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    assert!(parsed[1].get("description").is_none());

    let _ = fs::remove_file(&test_file);
    Ok(())
}

/// Presentation surface recording the dark flag.
#[derive(Default)]
struct FlagSurface {
    dark: bool,
}

impl PresentationSurface for FlagSurface {
    fn set_dark_flag(&mut self, dark: bool) {
        self.dark = dark;
    }
}

#[test]
fn test_theme_preference_survives_restart() {
    let pref_file = env::temp_dir().join("rtasks_integration_prefs.json");
    let _ = fs::remove_file(&pref_file);

    // First session: fresh environment with a dark system preference.
    {
        let storage: Rc<RefCell<JsonFileStorage>> =
            Rc::new(RefCell::new(JsonFileStorage::open(&pref_file)));
        let surface: Rc<RefCell<FlagSurface>> = Rc::new(RefCell::new(FlagSurface::default()));

        let mut store = {
            let storage = storage.borrow();
            ThemeStore::from_environment(Some(&*storage as &dyn PreferenceStorage), Some(true))
        };
        assert_eq!(store.get(), ThemePreference::Dark);

        bind_persistence(
            &mut store,
            Rc::clone(&storage) as Rc<RefCell<dyn PreferenceStorage>>,
            Rc::clone(&surface) as Rc<RefCell<dyn PresentationSurface>>,
        );
        assert!(surface.borrow().dark);

        // User prefers light after all.
        store.toggle();
        assert_eq!(store.get(), ThemePreference::Light);
        assert!(!surface.borrow().dark);
        assert_eq!(
            storage.borrow().get_string(THEME_KEY).as_deref(),
            Some("light")
        );
    }

    // Second session: the stored choice beats the system signal.
    {
        let storage = JsonFileStorage::open(&pref_file);
        let store = ThemeStore::from_environment(Some(&storage), Some(true));
        assert_eq!(store.get(), ThemePreference::Light);
    }

    let _ = fs::remove_file(&pref_file);
}

#[test]
fn test_restricted_environment_never_fails() {
    // No storage, no system signal: the store still comes up, on light.
    let mut store = ThemeStore::from_environment(None, None);
    assert_eq!(store.get(), ThemePreference::Light);

    // And it stays fully usable without any binding.
    store.toggle();
    assert_eq!(store.get(), ThemePreference::Dark);
}

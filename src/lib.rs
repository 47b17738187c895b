pub mod storage;
pub mod store;
pub mod task;
pub mod theme;

// Export theme preference core
pub use store::{
    bind_persistence, resolve_initial_theme, PreferenceStorage, PresentationSurface, ThemeStore,
    THEME_KEY,
};
pub use theme::{apply_palette, palette, ThemeColors, ThemePreference};

// Export storage backends
pub use storage::{JsonFileStorage, MemoryStorage};

// Export task model
pub use task::{
    full_text_of, load_tasks, save_tasks, Task, COLOR_VALUES, PRIORITY_VALUES, STATUS_VALUES,
};

//! Global Application State
//!
//! Reactive state management using Leptos signals. The only state shared
//! across components is the active tab; everything else (form drafts,
//! overview collections) is owned by the component that renders it.

use leptos::*;

/// The four panels of the tabbed interface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Profile,
    Log,
    Markers,
    Data,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 4] = [Tab::Profile, Tab::Log, Tab::Markers, Tab::Data];

    /// Label shown in the tab bar
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Log => "Health Log",
            Tab::Markers => "Markers",
            Tab::Data => "Your Data",
        }
    }

    /// Panel shown after this panel's form submits successfully. A
    /// one-directional shortcut only; manual navigation is never blocked.
    pub fn next_after_submit(&self) -> Tab {
        match self {
            Tab::Profile => Tab::Log,
            _ => Tab::Data,
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently visible panel. Single-writer (tab bar and post-submit
    /// advance), multi-reader.
    pub active_tab: RwSignal<Tab>,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        active_tab: create_rw_signal(Tab::default()),
    };

    provide_context(state);
}

/// Fetch the shared state from context
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_profile() {
        assert_eq!(Tab::default(), Tab::Profile);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Profile.label(), "Profile");
        assert_eq!(Tab::Log.label(), "Health Log");
        assert_eq!(Tab::Markers.label(), "Markers");
        assert_eq!(Tab::Data.label(), "Your Data");
    }

    #[test]
    fn test_all_tabs_in_display_order() {
        assert_eq!(Tab::ALL, [Tab::Profile, Tab::Log, Tab::Markers, Tab::Data]);
    }

    #[test]
    fn test_advance_targets_after_submit() {
        assert_eq!(Tab::Profile.next_after_submit(), Tab::Log);
        assert_eq!(Tab::Log.next_after_submit(), Tab::Data);
        assert_eq!(Tab::Markers.next_after_submit(), Tab::Data);
    }

    #[test]
    fn test_advance_writes_the_shared_tab_signal() {
        let runtime = create_runtime();

        let active_tab = create_rw_signal(Tab::default());
        let advance = move |from: Tab| active_tab.set(from.next_after_submit());

        advance(Tab::Profile);
        assert_eq!(active_tab.get_untracked(), Tab::Log);

        advance(Tab::Log);
        assert_eq!(active_tab.get_untracked(), Tab::Data);

        runtime.dispose();
    }
}

//! FolderPilot - a companion window for your file manager
//!
//! A menu-bar companion that parks itself directly beneath the frontmost
//! Finder window: pick a folder, type an instruction, and let the agent
//! take it from there. The agent pass itself is still a placeholder; the
//! working pieces are the keychain credential store and the window
//! locator.
//!
//! ## Architecture
//!
//! - **Auth**: the single keychain credential
//! - **Placement**: window-server lookup and companion positioning
//! - **Session**: process-local UI state and the send gate
//! - **Security**: zeroized in-memory secret handling

pub mod auth;
mod commands;
pub mod config;
pub mod placement;
pub mod security;
pub mod session;

use std::sync::Arc;
use tauri::{
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager, WindowEvent,
};
use tokio::sync::RwLock;

use auth::CredentialStore;
use config::AppConfig;
use session::Session;

/// Application state shared across the Tauri app
pub struct AppState {
    /// Loaded configuration
    pub config: AppConfig,
    /// Keychain-backed credential storage
    pub store: CredentialStore,
    /// Process-local UI state
    pub session: Session,
}

impl AppState {
    /// Creates the state, reading the credential from the keychain once
    ///
    /// A keychain that cannot be read just leaves the session without a
    /// credential.
    pub fn new() -> Self {
        let config = AppConfig::load();
        let store = CredentialStore::new();
        let mut session = Session::new();
        session.set_credential(store.load());

        Self {
            config,
            store,
            session,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tauri App Entry Point
// ============================================================================

/// Initializes and runs the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folderpilot=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting FolderPilot...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let state = Arc::new(RwLock::new(AppState::new()));
            app.manage(state);

            // Tray icon: left click toggles the companion window
            let mut tray = TrayIconBuilder::new()
                .tooltip("FolderPilot - Click to toggle the companion window");
            if let Some(icon) = app.default_window_icon() {
                tray = tray.icon(icon.clone());
            }
            let _tray = tray
                .on_tray_icon_event(move |tray, event| {
                    if let TrayIconEvent::Click {
                        button: MouseButton::Left,
                        button_state: MouseButtonState::Up,
                        ..
                    } = event
                    {
                        toggle_companion(tray.app_handle());
                    }
                })
                .build(app)?;

            // Listen for window focus loss to auto-hide
            if let Some(window) = app.get_webview_window("main") {
                let window_clone = window.clone();
                window.on_window_event(move |event| {
                    if let WindowEvent::Focused(false) = event {
                        let _ = window_clone.hide();
                    }
                });
            }

            tracing::info!("FolderPilot initialized successfully");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::choose_folder,
            commands::reveal_folder,
            commands::get_session,
            commands::set_input,
            commands::submit_command,
            commands::save_credential,
            commands::load_credential,
            commands::snap_to_target,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Hides the companion if it is visible; otherwise places it beneath the
/// target window and shows it
///
/// When the target window cannot be located the companion still shows,
/// wherever it last was.
fn toggle_companion(app: &AppHandle) {
    let Some(window) = app.get_webview_window("main") else {
        return;
    };

    if window.is_visible().unwrap_or(false) {
        let _ = window.hide();
        return;
    }

    let (target_app, panel_height) = {
        // Tray events arrive on the main thread, outside any async
        // context, so a blocking read is safe here.
        let state = app.state::<Arc<RwLock<AppState>>>();
        let state = state.blocking_read();
        (state.config.target_app.clone(), state.config.panel_height)
    };

    placement::place_below(&window, &placement::XcapSource, &target_app, panel_height);
    let _ = window.show();
    let _ = window.set_focus();
}

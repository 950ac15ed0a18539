//! Tauri IPC Commands
//!
//! All commands that can be called from the frontend via Tauri IPC.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tauri::{AppHandle, Emitter, Manager};
use tokio::sync::RwLock;

use crate::placement::{self, XcapSource};
use crate::session::SessionSnapshot;
use crate::AppState;

/// How long the placeholder processing pass holds the input
///
/// Stands in for the real agent call until one exists.
const PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Opens the native directory picker and records the selection
///
/// Returns the chosen absolute path, or `None` when the user cancels. The
/// chooser drags the foreground away from the target window, so a deferred
/// re-placement pass is scheduled as it opens.
#[tauri::command]
pub async fn choose_folder(
    app: AppHandle,
    state: tauri::State<'_, Arc<RwLock<AppState>>>,
) -> Result<Option<PathBuf>, String> {
    use tauri_plugin_dialog::DialogExt;

    let (target_app, panel_height, delay_ms) = {
        let state = state.read().await;
        (
            state.config.target_app.clone(),
            state.config.panel_height,
            state.config.reposition_delay_ms,
        )
    };
    if let Some(window) = app.get_webview_window("main") {
        placement::schedule_place_below(window, target_app, panel_height, delay_ms);
    }

    let (tx, rx) = tokio::sync::oneshot::channel();
    app.dialog().file().pick_folder(move |picked| {
        let _ = tx.send(picked);
    });

    let picked = rx.await.map_err(|e| e.to_string())?;
    let Some(picked) = picked else {
        return Ok(None);
    };
    let folder = picked.into_path().map_err(|e| e.to_string())?;

    state.write().await.session.set_folder(folder.clone());

    Ok(Some(folder))
}

/// Shows the selected folder in the system file manager
#[tauri::command]
pub async fn reveal_folder(
    state: tauri::State<'_, Arc<RwLock<AppState>>>,
) -> Result<(), String> {
    let folder = {
        let state = state.read().await;
        state.session.folder().map(Path::to_path_buf)
    };

    let Some(folder) = folder else {
        return Err("No folder selected".to_string());
    };
    tauri_plugin_opener::reveal_item_in_dir(folder).map_err(|e| e.to_string())
}

/// Gets the current session snapshot
#[tauri::command]
pub async fn get_session(
    state: tauri::State<'_, Arc<RwLock<AppState>>>,
) -> Result<SessionSnapshot, String> {
    let state = state.read().await;
    Ok(state.session.snapshot())
}

/// Replaces the instruction text
#[tauri::command]
pub async fn set_input(
    state: tauri::State<'_, Arc<RwLock<AppState>>>,
    input: String,
) -> Result<(), String> {
    let mut state = state.write().await;
    state.session.set_input(input);
    Ok(())
}

/// Submits the current instruction
///
/// Returns `false` when the session is not sendable (blank instruction, no
/// folder, or an instruction already in flight). Otherwise holds the
/// processing flag through a fixed delay, clears the input, and emits
/// `processing-finished`. The real agent pass will replace the delay.
#[tauri::command]
pub async fn submit_command(
    app: AppHandle,
    state: tauri::State<'_, Arc<RwLock<AppState>>>,
) -> Result<bool, String> {
    {
        let mut state = state.write().await;
        if !state.session.begin_processing() {
            return Ok(false);
        }
    }

    let state = state.inner().clone();
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(PROCESSING_DELAY).await;

        {
            let mut state = state.write().await;
            state.session.finish_processing();
        }

        if let Err(e) = app.emit("processing-finished", ()) {
            tracing::warn!("Failed to emit processing-finished: {}", e);
        }
    });

    Ok(true)
}

/// Stores the credential in the keychain and in session state
#[tauri::command]
pub async fn save_credential(
    state: tauri::State<'_, Arc<RwLock<AppState>>>,
    secret: String,
) -> Result<(), String> {
    let mut state = state.write().await;
    state.store.save(&secret);
    state.session.set_credential(secret);
    Ok(())
}

/// Returns the credential read at startup, or an empty string
#[tauri::command]
pub async fn load_credential(
    state: tauri::State<'_, Arc<RwLock<AppState>>>,
) -> Result<String, String> {
    let state = state.read().await;
    Ok(state.session.credential().as_str().to_string())
}

/// Runs one locate-and-place pass right now
///
/// A no-op when the target window or the primary screen is missing.
#[tauri::command]
pub async fn snap_to_target(
    app: AppHandle,
    state: tauri::State<'_, Arc<RwLock<AppState>>>,
) -> Result<(), String> {
    let (target_app, panel_height) = {
        let state = state.read().await;
        (state.config.target_app.clone(), state.config.panel_height)
    };

    if let Some(window) = app.get_webview_window("main") {
        placement::place_below(&window, &XcapSource, &target_app, panel_height);
    }
    Ok(())
}

//! Entry point for the **wspick** headless picker.
//!
//! Seeds an in-memory workspace store from the command line, opens the
//! picker, and drives it with newline-delimited JSON requests read from
//! stdin on a background thread.  Every picker event is logged.
//!
//! ```text
//! wspick [--active NAME] NAME...
//! ```

use log::{error, info};
use std::rc::Rc;
use std::sync::mpsc;
use wspick::config::Config;
use wspick::memory::MemoryStore;
use wspick::picker::instructions;
use wspick::scope::ModalStack;
use wspick::source::{JsonLineSource, Request};
use wspick::switcher::WorkspaceSwitcher;
use wspick::traits::{InputSource, PickerEvent, WorkspaceStore};

/// Resolve the config directory (`$XDG_CONFIG_HOME/wspick`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("wspick")
}

/// Try to load the config from `$XDG_CONFIG_HOME/wspick/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Split the arguments into workspace names and the active one.
///
/// Without `--active`, the first name is active.
fn parse_args(args: impl IntoIterator<Item = String>) -> (Vec<String>, String) {
    let mut names = Vec::new();
    let mut active = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--active" {
            active = args.next();
        } else {
            names.push(arg);
        }
    }
    let active = active
        .or_else(|| names.first().cloned())
        .unwrap_or_default();
    if !active.is_empty() && !names.contains(&active) {
        names.push(active.clone());
    }
    (names, active)
}

//  Main

fn main() {
    env_logger::init();

    let config = load_config();
    let (names, active) = parse_args(std::env::args().skip(1));
    let store = Rc::new(MemoryStore::with_workspaces(names, &active));

    let modals = ModalStack::new();
    let (event_tx, event_rx) = mpsc::channel::<PickerEvent>();
    let mut switcher = WorkspaceSwitcher::new(Rc::clone(&store), &modals);
    switcher.set_config(config.picker.clone());
    switcher.set_events(event_tx);

    if let Err(e) = switcher.open() {
        error!("failed to open picker: {}", e);
        std::process::exit(1);
    }
    for (key, what) in instructions(switcher.config()) {
        info!("  {:<10} {}", key, what);
    }

    let (req_tx, req_rx) = mpsc::channel::<Request>();
    spawn_stdin_source(req_tx);

    info!("wspick running");
    log_state(&switcher, &event_rx);
    for req in req_rx {
        let result = match req {
            Request::Input(input) => switcher.handle(input),
            Request::Accept => futures::executor::block_on(switcher.accept_confirmation()),
            Request::Cancel => {
                switcher.cancel_confirmation();
                Ok(())
            }
        };
        if let Err(e) = result {
            error!("request error: {}", e);
        }
        log_state(&switcher, &event_rx);
        if !switcher.is_open() {
            break;
        }
    }
    switcher.close();
    while let Ok(event) = event_rx.try_recv() {
        info!("event: {:?}", event);
    }
    info!(
        "active workspace {:?}, layout {:?}",
        store.active_workspace().unwrap_or_default(),
        store.current_layout()
    );
}

//  Helpers

fn log_state<S: WorkspaceStore + 'static>(
    switcher: &WorkspaceSwitcher<S>,
    events: &mpsc::Receiver<PickerEvent>,
) {
    while let Ok(event) = events.try_recv() {
        info!("event: {:?}", event);
    }
    if let Some(dialog) = switcher.pending_confirmation() {
        info!("[{}] {} ({} / Cancel)", dialog.title(), dialog.body(), dialog.cta());
        return;
    }
    let state = switcher.state();
    if let Some(hint) = state.empty_hint() {
        info!("{}", hint);
    }
    for index in 0..state.displayed_len() {
        let marker = if state.cursor() == Some(index) { '>' } else { ' ' };
        info!("{} {}", marker, state.label(index).unwrap_or_default());
    }
}

fn spawn_stdin_source(tx: mpsc::Sender<Request>) {
    std::thread::spawn(move || {
        let mut source = JsonLineSource::new(std::io::BufReader::new(std::io::stdin()));
        if let Err(e) = source.run(tx) {
            error!("stdin source error: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_name_is_active_by_default() {
        let (names, active) = parse_args(args(&["Default", "Writing"]));
        assert_eq!(names, args(&["Default", "Writing"]));
        assert_eq!(active, "Default");
    }

    #[test]
    fn explicit_active_is_added_if_missing() {
        let (names, active) = parse_args(args(&["Default", "--active", "Reading"]));
        assert_eq!(names, args(&["Default", "Reading"]));
        assert_eq!(active, "Reading");
    }

    #[test]
    fn no_args_means_empty_store() {
        let (names, active) = parse_args(Vec::new());
        assert!(names.is_empty());
        assert!(active.is_empty());
    }
}

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use uigen::app::{Workbench, WorkspaceServices};
use uigen::core::event::InputEvent;
use uigen::core::View;
use uigen::kernel::services::adapters::{ensure_settings_file, load_settings, VirtualFileSystem};
use uigen::kernel::services::ports::Settings;
use uigen::kernel::{Project, User, WorkspaceProps};
use uigen::tui::{install_termination_signals, TerminalGuard};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const OFFLINE_REPLY: &str = "Generation service is not configured; request was not sent.";
const USAGE: &str = "usage: uigen [--user=<email>] [PROJECT.json | DIR]";

/// Where the initial files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ProjectSource {
    Empty,
    ProjectFile(PathBuf),
    Directory(PathBuf),
}

#[derive(Debug)]
struct Startup {
    props: WorkspaceProps,
    source: ProjectSource,
}

fn resolve_startup(cwd: &Path, args: &[String]) -> io::Result<Startup> {
    let mut props = WorkspaceProps::new();
    let mut path_arg: Option<&str> = None;

    for arg in args {
        if let Some(email) = arg.strip_prefix("--user=") {
            let email = email.trim();
            if email.is_empty() {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty --user"));
            }
            props.user = Some(User {
                id: email.to_string(),
                email: Some(email.to_string()),
            });
        } else if arg.starts_with("--") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown option: {}", arg),
            ));
        } else if path_arg.replace(arg.as_str()).is_some() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "expected at most one path",
            ));
        }
    }

    let Some(raw) = path_arg else {
        return Ok(Startup {
            props,
            source: ProjectSource::Empty,
        });
    };

    let path = cwd.join(raw);
    if path.is_dir() {
        return Ok(Startup {
            props,
            source: ProjectSource::Directory(path),
        });
    }
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("path does not exist: {}", path.display()),
        ));
    }

    props.project = Some(Project::load(&path)?);
    Ok(Startup {
        props,
        source: ProjectSource::ProjectFile(path),
    })
}

fn build_workbench(startup: Startup) -> io::Result<Workbench> {
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "failed to create settings file");
    }
    let settings = load_settings().unwrap_or_default();
    build_workbench_with(startup, &settings)
}

fn build_workbench_with(startup: Startup, settings: &Settings) -> io::Result<Workbench> {
    let Startup { props, source } = startup;
    let services = match &source {
        ProjectSource::Directory(dir) => {
            let fs = VirtualFileSystem::load_from_dir(dir)?;
            tracing::info!(dir = %dir.display(), entries = fs.len(), "seeded from directory");
            WorkspaceServices::with_file_system(&props, fs)
        }
        ProjectSource::ProjectFile(path) => {
            tracing::info!(path = %path.display(), "seeded from project file");
            WorkspaceServices::from_props(&props)
        }
        ProjectSource::Empty => WorkspaceServices::from_props(&props),
    };
    Ok(Workbench::with_settings(props, services, settings))
}

/// Stands in for the remote generation service: requests are logged and answered
/// locally so the chat returns to ready.
fn answer_generation_requests(workbench: &mut Workbench) {
    for request in workbench.drain_generation_requests() {
        let files = request.files.as_object().map(|m| m.len()).unwrap_or(0);
        tracing::info!(
            project = request.project_id.as_deref().unwrap_or("-"),
            messages = request.messages.len(),
            files,
            "generation request"
        );
        workbench.push_assistant_reply(OFFLINE_REPLY);
    }
}

fn run(mut workbench: Workbench) -> io::Result<()> {
    let guard = TerminalGuard::new()?;
    guard.install_panic_hook();
    let (signal_tx, signal_rx) = mpsc::channel();
    let _signal_thread = install_termination_signals(guard.restorer(), signal_tx)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    loop {
        terminal.draw(|frame| workbench.render(frame, frame.area()))?;

        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "termination signal");
            break;
        }
        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }

        let event = InputEvent::from(crossterm::event::read()?);
        if workbench.handle_input(&event).is_quit() {
            break;
        }
        answer_generation_requests(&mut workbench);
    }

    drop(terminal);
    guard.restorer().restore()
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let _logging = logging::init();
    let cwd = std::env::current_dir()?;
    let startup = match resolve_startup(&cwd, &args) {
        Ok(startup) => startup,
        Err(err) => {
            eprintln!("uigen: {}\n{}", err, USAGE);
            std::process::exit(2);
        }
    };

    let workbench = build_workbench(startup)?;
    let result = run(workbench);
    if let Err(err) = &result {
        tracing::error!(error = %err, "uigen exited with error");
    }
    result
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup.rs"]
mod cli_startup_tests;

use clap::ArgMatches;
use tracing::{error, info, warn};

use hostpanel_core::events;
use hostpanel_core::state::{self, StateError};

use super::helpers::{Session, project_flag};

pub async fn handle_project_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("use", sub_matches)) => handle_use(sub_matches),
        Some(("show", _)) => handle_show(global).await,
        Some(("clear", _)) => handle_clear(),
        _ => {
            error!(event = "cli.project.command_unknown");
            Err("Unknown project command".into())
        }
    }
}

fn handle_use(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let guid = matches
        .get_one::<String>("guid")
        .ok_or("Project identifier is required")?
        .trim();

    if guid.is_empty() {
        eprintln!("❌ Project identifier must not be empty");
        return Err("Project identifier must not be empty".into());
    }

    info!(event = "cli.project.use_started", guid = guid);

    match state::set_current_project(guid) {
        Ok(()) => {
            println!("✅ Current project set to {}", guid);
            info!(event = "cli.project.use_completed", guid = guid);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to save current project: {}", e);
            error!(event = "cli.project.use_failed", guid = guid, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

async fn handle_show(global: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let guid = match state::resolve_project(project_flag(global)) {
        Ok(guid) => guid,
        Err(StateError::NoProjectSelected) => {
            println!("No project selected.");
            println!("Use 'hostpanel project use <GUID>' to select one.");
            return Ok(());
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.project.show_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let session = Session::from_matches(global)?;
    match session.api.get_project(&guid).await {
        Ok(project) => {
            println!("Current project: {} ({})", project.display_name(), project.guid);
        }
        Err(e) => {
            println!("Current project: {}", guid);
            eprintln!("⚠️  Could not fetch project details: {}", e);
            warn!(event = "cli.project.fetch_failed", guid = %guid, error = %e);
        }
    }

    Ok(())
}

fn handle_clear() -> Result<(), Box<dyn std::error::Error>> {
    match state::clear_current_project() {
        Ok(Some(previous)) => {
            println!("✅ Cleared current project ({})", previous);
            info!(event = "cli.project.clear_completed", previous = %previous);
            Ok(())
        }
        Ok(None) => {
            println!("No project was selected.");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to clear current project: {}", e);
            error!(event = "cli.project.clear_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

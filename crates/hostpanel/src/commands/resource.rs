use clap::ArgMatches;
use tracing::{error, info};

use hostpanel_core::events;
use hostpanel_core::notify::{Confirmer, StaticConfirmer, StdinConfirmer};
use hostpanel_core::state;
use hostpanel_core::{DeleteOutcome, Resource, ResourceList, ViewError};

use super::helpers::{Session, project_flag};
use crate::table::TableFormatter;

pub async fn handle_resource_command<R: Resource>(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list::<R>(global, sub_matches).await,
        Some(("add", sub_matches)) => handle_add::<R>(global, sub_matches).await,
        Some(("edit", sub_matches)) => handle_edit::<R>(global, sub_matches).await,
        Some(("delete", sub_matches)) => handle_delete::<R>(global, sub_matches).await,
        _ => {
            error!(event = "cli.resource.command_unknown", kind = R::KIND.label());
            Err("Unknown command".into())
        }
    }
}

/// Resolve the project and load the list, reporting failures to the user.
async fn load_list<R: Resource>(
    global: &ArgMatches,
    session: &Session,
) -> Result<ResourceList<R>, Box<dyn std::error::Error>> {
    let project_guid = match state::resolve_project(project_flag(global)) {
        Ok(guid) => guid,
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.project_resolve_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let mut list = ResourceList::<R>::new(project_guid);
    if let Err(e) = list.load(&session.api).await {
        eprintln!("❌ Failed to load {} records: {}", R::KIND.label(), e);
        events::log_app_error(&e);
        return Err(e.into());
    }
    Ok(list)
}

/// Print the detail of a failed view operation.
///
/// Failures that already produced a toast only get the reason line.
fn report_failure(e: &ViewError) {
    match e {
        ViewError::RecordNotFound { .. } | ViewError::NotLoaded | ViewError::NoDialogOpen => {
            eprintln!("❌ {}", e)
        }
        _ => eprintln!("   Reason: {}", e),
    }
}

/// Copy every given `--field` flag into the open editor dialog.
fn apply_field_flags<R: Resource>(
    list: &mut ResourceList<R>,
    matches: &ArgMatches,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut applied = 0;
    for spec in R::KIND.form_fields() {
        if let Some(value) = matches.get_one::<String>(spec.name) {
            if let Err(e) = list.set_field(spec.name, value) {
                eprintln!("❌ {}", e);
                return Err(e.into());
            }
            applied += 1;
        }
    }
    Ok(applied)
}

async fn handle_list<R: Resource>(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(
        event = "cli.list_started",
        kind = R::KIND.label(),
        json_output = json_output
    );

    let session = Session::from_matches(global)?;
    let list = load_list::<R>(global, &session).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(list.records())?);
    } else {
        if let Some(project) = list.project() {
            println!("Project: {} ({})", project.display_name(), project.guid);
        }
        let mut headers = vec!["ID"];
        headers.extend(list.headers());
        let rows: Vec<Vec<String>> = list
            .rows()
            .into_iter()
            .map(|row| {
                let actions = row
                    .actions
                    .iter()
                    .map(|a| a.label())
                    .collect::<Vec<_>>()
                    .join(" | ");
                std::iter::once(row.guid)
                    .chain(row.cells)
                    .chain(std::iter::once(actions))
                    .collect()
            })
            .collect();
        let formatter = TableFormatter::new(&headers, &rows);
        formatter.print_table(&rows, &session.messages.empty_list(R::KIND));
    }

    info!(
        event = "cli.list_completed",
        kind = R::KIND.label(),
        count = list.records().len()
    );
    Ok(())
}

async fn handle_add<R: Resource>(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.add_started", kind = R::KIND.label());

    let session = Session::from_matches(global)?;
    let mut list = load_list::<R>(global, &session).await?;

    list.open_create();
    apply_field_flags(&mut list, matches)?;

    match list
        .submit_dialog(&session.api, &session.notifier, &session.messages)
        .await
    {
        Ok(saved) => {
            println!("   ID: {}", saved.guid());
            info!(
                event = "cli.add_completed",
                kind = R::KIND.label(),
                guid = saved.guid()
            );
            Ok(())
        }
        Err(e) => {
            report_failure(&e);
            error!(event = "cli.add_failed", kind = R::KIND.label(), error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

async fn handle_edit<R: Resource>(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let guid = matches
        .get_one::<String>("guid")
        .ok_or("Identifier argument is required")?;
    info!(event = "cli.edit_started", kind = R::KIND.label(), guid = %guid);

    let session = Session::from_matches(global)?;
    let mut list = load_list::<R>(global, &session).await?;

    if let Err(e) = list.open_edit(guid) {
        report_failure(&e);
        error!(event = "cli.edit_failed", kind = R::KIND.label(), guid = %guid, error = %e);
        return Err(e.into());
    }
    let applied = apply_field_flags(&mut list, matches)?;
    if applied == 0 {
        info!(event = "cli.edit_unchanged", kind = R::KIND.label(), guid = %guid);
    }

    match list
        .submit_dialog(&session.api, &session.notifier, &session.messages)
        .await
    {
        Ok(_) => {
            info!(event = "cli.edit_completed", kind = R::KIND.label(), guid = %guid);
            Ok(())
        }
        Err(e) => {
            report_failure(&e);
            error!(event = "cli.edit_failed", kind = R::KIND.label(), guid = %guid, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

async fn handle_delete<R: Resource>(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let guid = matches
        .get_one::<String>("guid")
        .ok_or("Identifier argument is required")?;
    let skip_prompt = matches.get_flag("yes");
    info!(
        event = "cli.delete_started",
        kind = R::KIND.label(),
        guid = %guid,
        skip_prompt = skip_prompt
    );

    let session = Session::from_matches(global)?;
    let mut list = load_list::<R>(global, &session).await?;

    let confirmer: Box<dyn Confirmer> = if skip_prompt {
        Box::new(StaticConfirmer(true))
    } else {
        Box::new(StdinConfirmer::new())
    };

    match list
        .delete(
            &session.api,
            confirmer.as_ref(),
            &session.notifier,
            &session.messages,
            guid,
        )
        .await
    {
        Ok(DeleteOutcome::Cancelled) => {
            println!("Cancelled.");
            Ok(())
        }
        Ok(DeleteOutcome::Deleted) => {
            info!(event = "cli.delete_completed", kind = R::KIND.label(), guid = %guid);
            Ok(())
        }
        Err(e) => {
            report_failure(&e);
            error!(event = "cli.delete_failed", kind = R::KIND.label(), guid = %guid, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

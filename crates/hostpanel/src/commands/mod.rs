use clap::ArgMatches;
use tracing::error;

use hostpanel_core::events;
use hostpanel_core::{Database, ResourceKind, Storage, WebSpace};

use crate::app::kind_command_name;

pub mod helpers;

mod project;
mod resource;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let database = kind_command_name(ResourceKind::Database);
    let storage = kind_command_name(ResourceKind::Storage);
    let web_space = kind_command_name(ResourceKind::WebSpace);

    match matches.subcommand() {
        Some(("project", sub_matches)) => project::handle_project_command(matches, sub_matches).await,
        Some((name, sub_matches)) if name == database => {
            resource::handle_resource_command::<Database>(matches, sub_matches).await
        }
        Some((name, sub_matches)) if name == storage => {
            resource::handle_resource_command::<Storage>(matches, sub_matches).await
        }
        Some((name, sub_matches)) if name == web_space => {
            resource::handle_resource_command::<WebSpace>(matches, sub_matches).await
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

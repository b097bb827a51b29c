use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};

use hostpanel_core::{FieldSpec, ResourceKind};

/// Subcommand name for a resource kind.
pub fn kind_command_name(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Database => "database",
        ResourceKind::Storage => "storage",
        ResourceKind::WebSpace => "web-space",
    }
}

pub fn build_cli() -> Command {
    let mut app = Command::new("hostpanel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage databases, storage and web spaces of a hosting project")
        .long_about("hostpanel talks to the hosting backend's REST API. Every resource belongs to a project: pass --project or select one with 'hostpanel project use <GUID>'.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("project")
                .long("project")
                .short('p')
                .value_name("GUID")
                .help("Project to operate on (overrides the selected project)")
                .global(true),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Backend base URL (overrides config and HOSTPANEL_API_URL)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("project")
                .about("Select the project resources are scoped to")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("use")
                        .about("Remember a project as the current one")
                        .arg(
                            Arg::new("guid")
                                .help("Project identifier")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(Command::new("show").about("Show the current project"))
                .subcommand(Command::new("clear").about("Forget the current project")),
        );

    for kind in ResourceKind::ALL {
        app = app.subcommand(resource_command(kind));
    }

    app
}

fn resource_command(kind: ResourceKind) -> Command {
    let label = kind.label();
    Command::new(kind_command_name(kind))
        .about(format!("Manage {} records of a project", label))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about(format!("List {} records of the project", label))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("add")
                .about(format!("Create a {}", label))
                .args(kind.form_fields().iter().map(field_arg)),
        )
        .subcommand(
            Command::new("edit")
                .about(format!("Edit a {}; unspecified fields keep their value", label))
                .arg(
                    Arg::new("guid")
                        .help(format!("Identifier of the {}", label))
                        .required(true)
                        .index(1),
                )
                .args(kind.form_fields().iter().map(field_arg)),
        )
        .subcommand(
            Command::new("delete")
                .about(format!("Delete a {} after confirmation", label))
                .arg(
                    Arg::new("guid")
                        .help(format!("Identifier of the {}", label))
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// `--flag <VALUE>` for one form field; the arg id is the field name.
fn field_arg(spec: &FieldSpec) -> Arg {
    let arg = Arg::new(spec.name)
        .long(spec.flag)
        .value_name("VALUE")
        .help(spec.label);
    match spec.choices {
        Some(choices) => arg.value_parser(PossibleValuesParser::new(choices.iter().copied())),
        None => arg,
    }
}

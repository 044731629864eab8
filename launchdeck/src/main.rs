use clap::{Parser, Subcommand};
use launchdeck_client::{Backend, SocketBackend, DEFAULT_SOCKET_PATH};
use launchdeck_gui::{run_gui, GuiConfig};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "launchdeck", version, about = "Project launcher")]
struct Cli {
    /// Backend socket path
    #[arg(long, default_value = DEFAULT_SOCKET_PATH)]
    socket: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List workspaces
    Workspaces,
    /// List projects in the active workspace
    Projects,
    /// List running project ids
    Running,
    /// Launch a project by id
    Launch { id: Uuid },
    /// Stop a running project by id
    Stop { id: Uuid },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let backend = SocketBackend::new(cli.socket.clone());

    match cli.command {
        None => {
            let config = GuiConfig {
                socket_path: cli.socket,
                ..GuiConfig::default()
            };
            run_gui(config)?;
        }
        Some(Commands::Workspaces) => {
            let active = backend.get_active_workspace()?.map(|w| w.id);
            for workspace in backend.list_workspaces()? {
                let marker = if active == Some(workspace.id) { "*" } else { " " };
                println!("{marker} {} {}", workspace.id, workspace.name);
            }
        }
        Some(Commands::Projects) => {
            for project in backend.list_projects(None)? {
                println!(
                    "{} {} ({})",
                    project.id,
                    project.name,
                    project.path.display()
                );
            }
        }
        Some(Commands::Running) => {
            for id in backend.get_running_projects()? {
                println!("{id}");
            }
        }
        Some(Commands::Launch { id }) => {
            backend.launch_project(None, id)?;
            println!("Launched {id}");
        }
        Some(Commands::Stop { id }) => {
            backend.stop_project(id)?;
            println!("Stopped {id}");
        }
    }
    Ok(())
}

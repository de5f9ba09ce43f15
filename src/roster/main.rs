use clap::Parser;
use directories::ProjectDirs;
use roster::api::{
    CmdResult, ConfigAction, RosterApi, RosterPaths, SearchField, SortKey, StudentPatch,
};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::{Scope, SortOrder, Student};
use roster::roster::Roster;
use roster::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod print;
use args::{Cli, Commands, SortBy};

fn main() {
    let cli = Cli::parse();
    roster::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RosterApi<FileStore>,
    scope: Scope,
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            roll,
            department,
            gpa,
            contact,
        }) => {
            let student = Student::new(name, roll, department, gpa, contact);
            let result = ctx.api.add_student(student)?;
            render(&ctx, &result)
        }
        Some(Commands::List) | None => {
            let result = ctx.api.list_students()?;
            render(&ctx, &result)
        }
        Some(Commands::View { roll }) => {
            let result = ctx.api.view_student(&roll)?;
            render(&ctx, &result)
        }
        Some(Commands::Update {
            roll,
            name,
            new_roll,
            department,
            gpa,
            contact,
        }) => {
            let patch = StudentPatch {
                name,
                roll: new_roll,
                department,
                gpa,
                contact,
            };
            let result = ctx.api.update_student(&roll, &patch)?;
            render(&ctx, &result)
        }
        Some(Commands::Delete { rolls }) => {
            let result = ctx.api.delete_students(&rolls)?;
            render(&ctx, &result)
        }
        Some(Commands::Search { name, department }) => {
            // clap requires one of the two flags
            let (field, term) = match name {
                Some(name) => (SearchField::Name, name),
                None => (SearchField::Department, department.unwrap_or_default()),
            };
            let result = ctx.api.search_students(field, &term)?;
            render(&ctx, &result)
        }
        Some(Commands::Sort { by, desc }) => {
            let key = match by {
                SortBy::Gpa => SortKey::Gpa,
                SortBy::Roll => SortKey::Roll,
            };
            let order = if desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let result = ctx.api.sort_students(key, order)?;
            render(&ctx, &result)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Path) => {
            println!("{}", ctx.api.roster().store().path().display());
            Ok(())
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".roster");

    let global_dir = ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Store("Could not determine data directory".to_string()))?;

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let paths = RosterPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let scope_dir = paths.scope_dir(scope)?;
    let config = RosterConfig::load(&scope_dir)?;

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| scope_dir.join(&config.data_file));
    tracing::debug!(path = %data_file.display(), ?scope, "opening roster");

    let roster = Roster::open(FileStore::new(&data_file)).with_max_gpa(config.max_gpa);
    let api = RosterApi::new(roster, paths);

    Ok(AppContext {
        api,
        scope,
        json: cli.json,
    })
}

fn render(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        let students = if result.listed.is_empty() {
            &result.affected
        } else {
            &result.listed
        };
        return print::print_json(students);
    }

    print::print_students(&result.listed);
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        print::print_config(config);
    }
    print::print_messages(&result.messages);
    Ok(())
}

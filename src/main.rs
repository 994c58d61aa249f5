//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, settings loading,
//! and coordinates interactions between different modules.

use std::path::Path;

use stencil::{
    cli::{get_args, Cli, Commands},
    config::{find_settings_file, load_settings, save_settings},
    constants::TEMPLATES_DIR,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{ClassSpec, Processor},
    prompt::DialoguerPrompter,
    renderer::{SequentialRenderer, SinglePassRenderer, TemplateRenderer},
    template::TemplateStore,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Flow
/// 1. Locates the settings file
/// 2. Dispatches to the requested subcommand
fn run(args: Cli) -> Result<()> {
    let settings_path = find_settings_file(args.settings.as_deref())?;

    match args.command {
        Commands::SetProfile { profile } => set_profile(&settings_path, &profile),
        Commands::NewClass { class, profile, header, cpp, force, single_pass } => {
            let spec =
                ClassSpec { name: class, header_dir: header, implementation_dir: cpp };
            new_class(&settings_path, spec, profile.as_deref(), force, single_pass)
        }
    }
}

/// Persists `name` as the default profile in the settings file.
fn set_profile(settings_path: &Path, name: &str) -> Result<()> {
    let mut settings = load_settings(settings_path)?;
    settings.set_default_profile(name)?;
    save_settings(settings_path, &settings)?;

    println!("Profile set to '{}'.", name);
    Ok(())
}

/// Generates the header/implementation pair for one class.
///
/// # Flow
/// 1. Resolves the profile (explicit override beats the persisted default)
/// 2. Renders both templates against the profile and class name
/// 3. Writes each file, asking before overwriting unless forced
fn new_class(
    settings_path: &Path,
    spec: ClassSpec,
    profile_override: Option<&str>,
    force: bool,
    single_pass: bool,
) -> Result<()> {
    let settings = load_settings(settings_path)?;
    let profile = settings.resolve_profile(profile_override)?;

    let templates_dir = settings_path.parent().unwrap_or(Path::new(".")).join(TEMPLATES_DIR);
    let store = TemplateStore::new(templates_dir);

    let engine: Box<dyn TemplateRenderer> = if single_pass {
        Box::new(SinglePassRenderer::new())
    } else {
        Box::new(SequentialRenderer::new())
    };
    let prompt = DialoguerPrompter::new();

    let processor = Processor::new(&*engine, &store, profile, &prompt, force);
    let plans = processor.plan(&spec)?;

    println!("Creating class '{}'.", spec.name.trim());
    for plan in plans {
        let action = processor.execute(&plan)?;
        println!("{}: '{}'", action, plan.target.display());
    }

    Ok(())
}

mod form;
mod render;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use meals_core::{
    error_message, FoodApi, FoodFormInput, MealCatalog, SaveOutcome, SaveTarget, DEFAULT_BASE_URL,
};

use crate::form::MealFields;

/// Browse and edit the meals catalog.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the meals store
    #[arg(long, env = "MEALS_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Enable verbose logging{n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every meal
    List,
    /// Search meals by name; a blank query lists everything
    Search { query: String },
    /// Show one meal
    Show { id: String },
    /// Add a meal
    Add {
        #[command(flatten)]
        fields: MealFields,
    },
    /// Edit a meal; omitted flags keep their current value
    Edit {
        id: String,
        #[command(flatten)]
        fields: MealFields,
    },
    /// Delete a meal
    Delete { id: String },
}

fn logger_init(verbose: bool) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module(
            "meals_core",
            if verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Error
            },
        )
        .filter_module(
            "meals",
            if verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger_init(args.verbose);

    if let Err(e) = run(args).await {
        log::debug!("{e:?}");
        eprintln!("{}", describe(&e));
        std::process::exit(1);
    }
}

/// `FoodError`s carry a user-facing message; our own `bail!`s are already
/// written for the user.
fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<meals_core::FoodError>() {
        Some(food) => error_message(food),
        None => err.to_string(),
    }
}

async fn run(args: Args) -> Result<()> {
    let api = FoodApi::new(&args.base_url);
    let mut catalog = MealCatalog::new();

    match args.command {
        Command::List => {
            catalog.load(&api).await?;
            print!("{}", render::meal_list(catalog.meals()));
        }
        Command::Search { query } => {
            catalog.search(&api, &query).await?;
            print!("{}", render::meal_list(catalog.meals()));
        }
        Command::Show { id } => {
            let food = api.get_by_id(&id).await?;
            print!("{}", render::meal_details(&food));
        }
        Command::Add { fields } => {
            let input = fields.apply(FoodFormInput::default());
            save(&api, &mut catalog, SaveTarget::New, &input).await?;
        }
        Command::Edit { id, fields } => {
            let current = api.get_by_id(&id).await?;
            let input = fields.apply(current.to_form_input());
            save(&api, &mut catalog, SaveTarget::Existing(id), &input).await?;
        }
        Command::Delete { id } => {
            catalog.remove(&api, &id).await?;
            println!("Deleted meal {id}. {} meal(s) left.", catalog.meals().len());
        }
    }

    Ok(())
}

async fn save(
    api: &FoodApi,
    catalog: &mut MealCatalog,
    target: SaveTarget,
    input: &FoodFormInput,
) -> Result<()> {
    match catalog.save(api, &target, input).await? {
        SaveOutcome::Saved(food) => {
            log::info!("saved meal {}", food.id);
            print!("{}", render::meal_details(&food));
            Ok(())
        }
        SaveOutcome::Invalid(errors) => {
            eprint!("{}", render::field_errors(&errors));
            bail!("Meal not saved: {} field(s) need attention.", errors.len())
        }
    }
}

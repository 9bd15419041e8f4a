//! Scripted demo session over the in-memory backend.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use sbdelivery::config::Config;
use sbdelivery::logging::init_tracing;
use sbdelivery::repository::{Dish, MemoryBackend, Review};
use sbdelivery::root::{
    Collaborators, HostCommand, Msg, NavigateCommand, RootState, Route, ScreenState, ScreenTarget,
};
use sbdelivery::screens::cart::CartMsg;
use sbdelivery::screens::dish::DishMsg;
use sbdelivery::screens::dishes::DishesMsg;
use sbdelivery::Session;

const STEP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "sbdelivery")]
#[command(about = "Run a scripted delivery-app session against an in-memory backend")]
struct Args {
    /// Config file (defaults to the platform config dir)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Restore state from this JSON snapshot and save the final state back
    #[arg(short = 's', long)]
    snapshot: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging.filter);

    let initial = match &args.snapshot {
        Some(path) if path.exists() => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            let state: RootState = serde_json::from_str(&json)
                .with_context(|| format!("invalid snapshot {}", path.display()))?;
            Some(state)
        }
        _ => None,
    };

    let backend = Arc::new(seed_backend());
    let session = Session::start(&config.engine, Collaborators::shared(backend), initial);

    let notifications = session.notifications();
    tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            println!("  [notice] {}", notification.message());
        }
    });

    run_script(&session).await?;

    let host_commands = session.host_commands();
    match tokio::time::timeout(STEP_TIMEOUT, host_commands.recv()).await {
        Ok(Some(HostCommand::Finish)) => println!("Host asked to finish"),
        Ok(None) => bail!("host command channel closed"),
        Err(_) => bail!("timed out waiting for finish"),
    }

    let state = session.shutdown().await;
    if let Some(path) = &args.snapshot {
        let json = serde_json::to_string_pretty(&state)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        println!("Saved state to {}", path.display());
    }
    Ok(())
}

async fn run_script(session: &Session) -> Result<()> {
    let state = wait_for(session, |state| match state.current_screen() {
        ScreenState::Dishes(dishes) => !dishes.is_loading(),
        _ => true,
    })
    .await?;
    println!("{} | cart: {}", state.title(), state.cart_count());

    // Start from the catalog even when a snapshot put us elsewhere.
    while session.current_state().current_route() != Route::Dishes {
        let depth = session.current_state().backstack().len();
        if depth == 0 {
            session.submit(Msg::Navigate(NavigateCommand::ToScreen(ScreenTarget::Dishes)));
        } else {
            session.submit(Msg::Navigate(NavigateCommand::ToBack));
        }
        wait_for(session, |state| state.backstack().len() != depth).await?;
    }

    session.submit(DishesMsg::SearchToggle);
    session.submit(DishesMsg::SearchInput("пицц".into()));
    session.submit(DishesMsg::UpdateSuggestionResult("пицц".into()));
    let state = wait_for(session, |state| match state.current_screen() {
        ScreenState::Dishes(dishes) => !dishes.suggestions.is_empty(),
        _ => false,
    })
    .await?;
    if let ScreenState::Dishes(dishes) = state.current_screen() {
        for (suggestion, count) in &dishes.suggestions {
            println!("  suggestion: {suggestion} ({count})");
        }
    }

    session.submit(DishesMsg::ClickDish {
        id: "1".into(),
        title: "Пицца Маргарита".into(),
    });
    let state = wait_for(session, |state| match state.current_screen() {
        ScreenState::Dish(dish) => dish.dish().is_some(),
        _ => false,
    })
    .await?;
    println!("{} | cart: {}", state.title(), state.cart_count());

    let before = state.cart_count();
    session.submit(DishMsg::IncrementCount);
    session.submit(DishMsg::AddToCart {
        id: "1".into(),
        count: 2,
    });
    let state = wait_for(session, |state| state.cart_count() == before + 2).await?;
    println!("{} | cart: {}", state.title(), state.cart_count());

    session.submit(Msg::Navigate(NavigateCommand::ToCart));
    let state = wait_for(session, |state| match state.current_screen() {
        ScreenState::Cart(cart) => !cart.items().is_empty(),
        _ => false,
    })
    .await?;
    if let ScreenState::Cart(cart) = state.current_screen() {
        for item in cart.items() {
            println!("  {} x{} @ {}", item.title, item.count, item.price);
        }
        println!("  total: {}", cart.total_price());
    }

    session.submit(CartMsg::SendOrder);
    wait_for(session, |state| state.cart_count() == 0).await?;

    for _ in 0..=state.backstack().len() {
        session.submit(Msg::Navigate(NavigateCommand::ToBack));
    }
    Ok(())
}

async fn wait_for(session: &Session, ready: impl Fn(&RootState) -> bool) -> Result<RootState> {
    let mut states = session.subscribe();
    let wait = async {
        loop {
            let state = states.borrow_and_update().clone();
            if ready(&state) {
                return Ok(state);
            }
            if states.changed().await.is_err() {
                bail!("session stopped");
            }
        }
    };
    tokio::time::timeout(STEP_TIMEOUT, wait)
        .await
        .context("timed out waiting for state")?
}

fn seed_backend() -> MemoryBackend {
    let catalog = vec![
        Dish::new("1", "Пицца Маргарита", 590),
        Dish::new("2", "Пицца с ветчиной", 650),
        Dish::new("3", "Паста", 420),
        Dish::new("4", "Tomato soup", 300),
        Dish::new("5", "Green tea", 120),
    ];
    MemoryBackend::new(catalog)
        .with_latency(Duration::from_millis(30))
        .with_reviews(
            "1",
            vec![Review {
                author: "Olga".to_string(),
                date: 1_631_232_000_000,
                rating: 5,
                text: "Crispy crust".to_string(),
            }],
        )
}

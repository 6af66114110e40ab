use std::{io, sync::OnceLock};

use application::{render, Args, Config, Session};
use common::{pagination, Date};
use service::{
    command::{ChangePage, ChangePageSize, SetFilters, ToggleLike},
    infra::{source, storage},
    query::{LikedListings, Listings},
    Command as _, Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .init();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ()> {
    let Args {
        config,
        filters,
        page,
        page_size,
        likes,
        liked,
    } = Args::parse().unwrap_or_else(|e| e.exit());

    let Config {
        source: source_conf,
        storage: storage_conf,
        session: session_conf,
        log: log_conf,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log_conf.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let listings = source::mock::generate(
        source_conf.count,
        source_conf.seed,
        Date::today(),
    );
    log::info!("generated {} listings", listings.len());

    let session = Session::open(
        session_conf.into(),
        source::Memory::new(listings, source_conf.into()),
        storage::File::new(storage_conf.dir),
    )
    .await;

    for id in likes {
        let liked =
            session.execute(ToggleLike(id.clone())).await.map_err(|e| {
                log::error!("failed to toggle like of `{id}`: {e}");
            })?;
        println!("{} `{id}`", if liked { "Liked" } else { "Unliked" });
    }

    if liked {
        let listings = session
            .execute(LikedListings)
            .await
            .unwrap_or_else(|e| match e {});
        println!("{} liked listings", listings.len());
        println!("{}", render::listings(&listings, &session.state()));
        return Ok(());
    }

    session
        .execute(SetFilters(filters.into()))
        .await
        .unwrap_or_else(|e| match e {});
    if let Some(size) = page_size {
        session
            .execute(ChangePageSize(size))
            .await
            .unwrap_or_else(|e| match e {});
    }
    let page = pagination::Number::from(page);
    if page != pagination::Number::FIRST {
        _ = session.execute(ChangePage(page)).await.map_err(|e| {
            log::error!("failed to change page: {e}");
        })?;
    }

    if let Some(e) = &session.state().error {
        log::error!("listings are unavailable: {e}");
        return Err(());
    }

    let page = session
        .execute(Listings)
        .await
        .unwrap_or_else(|e| match e {});
    println!("{}", render::page(&page, &session.state()));

    Ok(())
}

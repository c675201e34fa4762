//! `storefront` command: browse the catalogue and manage the local session.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use zeroize::Zeroizing;

use storefront::StorefrontSettings;
use storefront::domain::{
    AccountService, AuthStore, HomePageService, LoginCredentials, ProductCard, ProductDetailService,
    ProductId, SignupForm, StarKind,
};
use storefront::gateway::Gateway;
use storefront::outbound::api::GatewayStorefrontApi;
use storefront::outbound::http::ReqwestTransport;
use storefront::outbound::navigation::LoggingNavigator;
use storefront::outbound::storage::FileSessionStorage;

/// `storefront` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Browse travel products and manage the signed-in session",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show popular overseas and domestic products.
    Home,
    /// Show the promotional slides.
    Slides,
    /// Show one product in detail.
    Product {
        /// Product identifier.
        id: ProductId,
    },
    /// Register a new member.
    ///
    /// The password and its confirmation are read from standard input, one
    /// per line.
    Signup {
        /// Email address.
        #[arg(long)]
        email: String,
        /// Accept the terms and marketing messages.
        #[arg(long)]
        agree: bool,
    },
    /// Sign in and store the session.
    ///
    /// The password is read from the first line of standard input.
    Signin {
        /// Email address.
        #[arg(long)]
        email: String,
    },
    /// Forget the stored session.
    Signout,
    /// Show the signed-in member.
    Whoami,
}

struct App {
    home: HomePageService,
    detail: ProductDetailService,
    accounts: AccountService,
    auth: Arc<AuthStore>,
    navigator: Arc<LoggingNavigator>,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> io::Result<()> {
    let settings = StorefrontSettings::load_from_iter([OsString::from("storefront")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let app = wire(&settings)?;

    let outcome = run(&app, args.command).await;
    if let Some(location) = app.navigator.last_location() {
        eprintln!("Session expired. Returning to {location}");
    }
    outcome
}

fn wire(settings: &StorefrontSettings) -> io::Result<App> {
    let config = settings
        .gateway_config()
        .map_err(|error| io::Error::other(format!("gateway config: {error}")))?;
    let storage = FileSessionStorage::open(settings.session_dir()).map_err(|error| {
        io::Error::other(format!(
            "open session directory '{}': {error}",
            settings.session_dir().display()
        ))
    })?;
    let transport = ReqwestTransport::new(&config)
        .map_err(|error| io::Error::other(format!("create HTTP client: {error}")))?;

    let auth = Arc::new(AuthStore::open(Arc::new(storage)));
    let navigator = Arc::new(LoggingNavigator::default());
    let gateway = Gateway::new(Arc::new(transport), auth.clone(), navigator.clone());
    let api = Arc::new(GatewayStorefrontApi::new(Arc::new(gateway)));

    Ok(App {
        home: HomePageService::new(api.clone(), config.origin()),
        detail: ProductDetailService::new(api.clone(), config.origin()),
        accounts: AccountService::new(api, auth.clone()),
        auth,
        navigator,
    })
}

async fn run(app: &App, command: Command) -> io::Result<()> {
    match command {
        Command::Home => {
            let feed = app.home.product_feed().await.map_err(io::Error::other)?;
            print_section("Real-time popular (overseas)", &feed.overseas);
            print_section("Nationwide popular (domestic)", &feed.domestic);
        }
        Command::Slides => {
            for slide in app.home.main_slides().await.map_err(io::Error::other)? {
                println!("[{}] {} | {} ({})", slide.id, slide.title, slide.headline, slide.date);
                println!("    link={} image={}", slide.url, slide.img_src.unwrap_or_default());
            }
        }
        Command::Product { id } => {
            let view = app.detail.detail(id).await.map_err(io::Error::other)?;
            println!("{}", view.title);
            println!("{}", view.hash_tags);
            println!("{} {} ({} sold)", stars(&view.stars), view.rating_label, view.sold);
            match view.discount_rate {
                Some(rate) => println!("{rate}% {} (was {})", view.curr_price, view.prev_price),
                None => println!("{}", view.curr_price),
            }
            println!("5-month installment: {}/month", view.monthly_installment);
            if let Some(image) = view.img_src {
                println!("image={image}");
            }
            if let Some(intro) = view.intro_title {
                println!();
                println!("{intro}");
                println!("{}", view.intro_text.unwrap_or_default());
            }
        }
        Command::Signup { email, agree } => {
            let password = prompt_secret("Password")?;
            let confirm = prompt_secret("Confirm password")?;
            let form = SignupForm {
                email,
                password,
                confirm,
                agreed: agree,
            };
            let member = app.accounts.sign_up(&form).await.map_err(io::Error::other)?;
            println!("Registered {} (id={}). Sign in to continue.", member.email, member.id);
        }
        Command::Signin { email } => {
            let password = prompt_secret("Password")?;
            let credentials = LoginCredentials::try_from_parts(&email, &password)
                .map_err(io::Error::other)?;
            let session = app
                .accounts
                .sign_in(&credentials)
                .await
                .map_err(io::Error::other)?;
            println!("Signed in as {} (id={})", session.email, session.id);
        }
        Command::Signout => {
            app.accounts.sign_out().map_err(io::Error::other)?;
            println!("Signed out");
        }
        Command::Whoami => match app.auth.current() {
            Some(session) => println!("{} (id={})", session.email, session.id),
            None => println!("Not signed in"),
        },
    }
    Ok(())
}

fn prompt_secret(label: &str) -> io::Result<Zeroizing<String>> {
    eprint!("{label}: ");
    io::stderr().flush()?;
    read_secret(&mut io::stdin().lock(), label)
}

/// Read one line from `input` without its line terminator.
fn read_secret(input: &mut impl BufRead, label: &str) -> io::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{label} expected on standard input"),
        ));
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

fn print_section(heading: &str, cards: &[ProductCard]) {
    println!("{heading}");
    for card in cards {
        let discount = card
            .discount_rate
            .map(|rate| format!("{rate}% "))
            .unwrap_or_default();
        println!(
            "  [{}] {} | {discount}{} | {:.1} | {} sold",
            card.id, card.title, card.curr_price, card.rating, card.sold
        );
    }
}

fn stars(stars: &[StarKind]) -> String {
    stars
        .iter()
        .map(|star| match star {
            StarKind::Full => '★',
            StarKind::Half => '⯪',
            StarKind::Empty => '☆',
        })
        .collect()
}

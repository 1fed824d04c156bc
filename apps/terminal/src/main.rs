//! # Rideline CLI
//!
//! Thin command dispatcher over the application library.
//!
//! ## Usage
//! ```bash
//! # Browse the catalog
//! rideline cars                 # first page
//! rideline cars ib --page 2     # filtered, specific page
//! rideline browse               # interactive: type to search, :n/:p to page
//!
//! # Account
//! rideline register yu@yu.com secret
//! rideline login yu@yu.com secret
//! rideline logout
//!
//! # Cars & reviews
//! rideline car 3                # detail + reviews
//! rideline fav 3                # toggle favorite
//! rideline favorites
//! rideline review 3 5 "smooth ride"
//!
//! # Bookings
//! rideline book 3 2024-05-01 09:00 2024-05-02 10:00
//! rideline bookings
//! rideline cancel 7
//! rideline admin-bookings
//!
//! # Analytics & inventory (admin)
//! rideline sales [model]
//! rideline add-car Seat Ibiza 2021 "GPS, Bluetooth"
//! rideline edit-car 3 Seat Ibiza 2022 "GPS"
//! rideline delete-car 3
//! ```
//!
//! The backend address comes from `RIDELINE_API_URL`, `api.toml`, or the
//! localhost default. The session persists in `session.toml` between runs.

use std::env;
use std::io::BufRead;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use rideline_api::{
    ApiClient, ApiConfig, AuthApi, BookingsApi, CarsApi, FavoritesApi, ReviewsApi, SalesApi,
};
use rideline_core::validation::{validate_car, validate_username};
use rideline_core::{BookingDraft, CarDraft, ReviewDraft, DEFAULT_PAGE_SIZE, SEARCH_DEBOUNCE_MS};

use rideline_terminal::catalog::CatalogManager;
use rideline_terminal::error::AppError;
use rideline_terminal::favorites::{load_favorites, toggle_favorite};
use rideline_terminal::pages::{
    cancel_booking, remove_review, submit_booking, submit_review, AdminBookingsPage,
    CarDetailPage, FavoritesPage, HomePage, MyBookingsPage, SalesChartsPage,
};
use rideline_terminal::state::{CarsState, SessionState, SessionStore};

/// Everything a command might need, built once per run.
struct App {
    session: SessionState,
    cars_state: CarsState,
    auth: AuthApi,
    cars: CarsApi,
    favorites: FavoritesApi,
    reviews: ReviewsApi,
    bookings: BookingsApi,
    sales: SalesApi,
}

impl App {
    fn bootstrap() -> Result<App, AppError> {
        let config = ApiConfig::load();
        let session = SessionState::restore(SessionStore::at_default_location());

        let base = ApiClient::new(&config)?;
        let authed = base.for_session(session.current().as_ref());

        Ok(App {
            session,
            cars_state: CarsState::new(),
            auth: AuthApi::new(base),
            cars: CarsApi::new(authed.clone()),
            favorites: FavoritesApi::new(authed.clone()),
            reviews: ReviewsApi::new(authed.clone()),
            bookings: BookingsApi::new(authed.clone()),
            sales: SalesApi::new(authed),
        })
    }

    fn catalog(&self) -> CatalogManager<CarsApi> {
        CatalogManager::new(self.cars.clone(), self.cars_state.clone(), DEFAULT_PAGE_SIZE)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Vec<String>) -> Result<(), AppError> {
    let command = args.first().map(String::as_str).unwrap_or("help");
    let rest = &args[1..];

    let app = App::bootstrap()?;

    match command {
        // =====================================================================
        // Account
        // =====================================================================
        "login" => {
            let (username, password) = two_args(rest, "login <email> <password>")?;
            let session = app.auth.login(&username, &password).await?;
            let admin = if session.is_admin { " (admin)" } else { "" };
            println!("Signed in as {}{admin}", session.username);
            app.session.login(session);
        }
        "register" => {
            let (username, password) = two_args(rest, "register <email> <password>")?;
            validate_username(&username)?;
            app.auth.register(&username, &password).await?;
            println!("Registered {username}. You can sign in now.");
        }
        "logout" => {
            app.session.logout();
            println!("Signed out.");
        }
        "whoami" => match app.session.current() {
            Some(s) => println!("{}{}", s.username, if s.is_admin { " (admin)" } else { "" }),
            None => println!("Not signed in."),
        },

        // =====================================================================
        // Catalog
        // =====================================================================
        "cars" => {
            let mut search = String::new();
            let mut page = 1u32;
            let mut iter = rest.iter();
            while let Some(arg) = iter.next() {
                match arg.as_str() {
                    "--page" => {
                        page = iter
                            .next()
                            .and_then(|v| v.parse().ok())
                            .ok_or_else(|| usage("cars [search] [--page N]"))?;
                    }
                    other => search = other.to_string(),
                }
            }

            let catalog = app.catalog();
            let _ = load_favorites(&app.favorites, &app.session, &app.cars_state).await;
            catalog.open(&search, page).await;
            print!("{}", HomePage::from_catalog(&catalog).render());
        }
        "browse" => {
            let catalog = app.catalog();
            let _ = load_favorites(&app.favorites, &app.session, &app.cars_state).await;
            print!("{}", HomePage::load(&catalog).await.render());
            println!("(type to search · :n next · :p prev · :g N go to · :q quit)");

            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line.unwrap_or_default();
                let input = line.trim();
                match input {
                    ":q" => break,
                    ":n" => {
                        catalog.change_page(catalog.current_page() + 1).await;
                    }
                    ":p" => {
                        let current = catalog.current_page();
                        if current > 1 {
                            catalog.change_page(current - 1).await;
                        }
                    }
                    _ if input.starts_with(":g") => {
                        if let Ok(n) = input.trim_start_matches(":g").trim().parse() {
                            catalog.change_page(n).await;
                        }
                    }
                    text => {
                        // One line stands in for the keystroke stream; wait
                        // out the debounce so the fetch has fired.
                        catalog.handle_search(text);
                        tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS + 50)).await;
                    }
                }
                print!("{}", HomePage::from_catalog(&catalog).render());
            }
        }
        "car" => {
            let id = id_arg(rest, "car <id>")?;
            let page = CarDetailPage::load(&app.cars, &app.reviews, id).await?;
            print!("{}", page.render());
        }

        // =====================================================================
        // Favorites
        // =====================================================================
        "fav" => {
            let id = id_arg(rest, "fav <car_id>")?;
            load_favorites(&app.favorites, &app.session, &app.cars_state).await?;
            let now_favorite =
                toggle_favorite(&app.favorites, &app.session, &app.cars_state, id).await?;
            if now_favorite {
                println!("Car {id} added to favorites.");
            } else {
                println!("Car {id} removed from favorites.");
            }
        }
        "favorites" => {
            let page =
                FavoritesPage::load(&app.cars, &app.favorites, &app.session, &app.cars_state)
                    .await?;
            print!("{}", page.render());
        }

        // =====================================================================
        // Reviews
        // =====================================================================
        "review" => {
            if rest.len() < 3 {
                return Err(usage("review <car_id> <rating 1-5> <text...>"));
            }
            let car_id = parse_i64(&rest[0], "car_id")?;
            let rating: u8 = rest[1]
                .parse()
                .map_err(|_| AppError::validation("rating must be a number from 1 to 5"))?;
            let draft = ReviewDraft {
                car_id,
                text: rest[2..].join(" "),
                rating,
            };
            let review = submit_review(&app.reviews, &app.session, &draft, None).await?;
            println!("Review #{} published.", review.id);
        }
        "edit-review" => {
            if rest.len() < 4 {
                return Err(usage("edit-review <review_id> <car_id> <rating 1-5> <text...>"));
            }
            let review_id = parse_i64(&rest[0], "review_id")?;
            let car_id = parse_i64(&rest[1], "car_id")?;
            let rating: u8 = rest[2]
                .parse()
                .map_err(|_| AppError::validation("rating must be a number from 1 to 5"))?;
            let draft = ReviewDraft {
                car_id,
                text: rest[3..].join(" "),
                rating,
            };
            let review = submit_review(&app.reviews, &app.session, &draft, Some(review_id)).await?;
            println!("Review #{} updated.", review.id);
        }
        "delete-review" => {
            let id = id_arg(rest, "delete-review <review_id>")?;
            remove_review(&app.reviews, &app.session, id).await?;
            println!("Review #{id} deleted.");
        }

        // =====================================================================
        // Bookings
        // =====================================================================
        "book" => {
            if rest.len() != 5 {
                return Err(usage(
                    "book <car_id> <pickup-date> <pickup-time> <return-date> <return-time>",
                ));
            }
            let draft = BookingDraft {
                car_id: parse_i64(&rest[0], "car_id")?,
                date: rest[1].clone(),
                time: rest[2].clone(),
                return_date: rest[3].clone(),
                return_time: rest[4].clone(),
            };
            let booking = submit_booking(&app.bookings, &app.session, &draft).await?;
            println!(
                "Booked car {}: pickup {} {}, return {} {} (booking #{}).",
                booking.car_id,
                booking.date,
                booking.time,
                booking.return_date,
                booking.return_time,
                booking.id
            );
        }
        "bookings" => {
            let page = MyBookingsPage::load(&app.bookings, &app.cars, &app.session).await?;
            print!("{}", page.render());
        }
        "cancel" => {
            let id = id_arg(rest, "cancel <booking_id>")?;
            let booking = cancel_booking(&app.bookings, &app.session, id).await?;
            println!("Booking #{} cancelled.", booking.id);
        }
        "admin-bookings" => {
            let page = AdminBookingsPage::load(&app.bookings, &app.cars, &app.session).await?;
            print!("{}", page.render());
        }

        // =====================================================================
        // Analytics & inventory
        // =====================================================================
        "sales" => {
            let model = rest.first().map(String::as_str);
            let page = SalesChartsPage::load(&app.sales, model).await?;
            print!("{}", page.render());
        }
        "add-car" => {
            let draft = car_draft_args(rest, "add-car <make> <model> <year> [features]")?;
            let known = app.cars.all().await?;
            validate_car(&draft, &known, None)?;
            let car = app.cars.create(&draft).await?;
            println!("Added [{}] {} ({}).", car.id, car.display_name(), car.year);
        }
        "edit-car" => {
            if rest.is_empty() {
                return Err(usage("edit-car <id> <make> <model> <year> [features]"));
            }
            let id = parse_i64(&rest[0], "id")?;
            let draft =
                car_draft_args(&rest[1..], "edit-car <id> <make> <model> <year> [features]")?;
            let known = app.cars.all().await?;
            validate_car(&draft, &known, Some(id))?;
            let car = app.cars.update(id, &draft).await?;
            app.cars_state.update_car(car.clone());
            println!("Updated [{}] {} ({}).", car.id, car.display_name(), car.year);
        }
        "delete-car" => {
            let id = id_arg(rest, "delete-car <id>")?;
            let car = app.cars.delete(id).await?;
            app.cars_state.delete_car(id);
            println!("Deleted [{}] {}.", car.id, car.display_name());
        }

        _ => {
            println!("rideline - car rental client");
            println!();
            println!("  cars [search] [--page N]   browse the catalog");
            println!("  browse                     interactive catalog");
            println!("  car <id>                   car detail + reviews");
            println!("  login/register/logout      account");
            println!("  fav <id> · favorites       favorites");
            println!("  review <id> <1-5> <text>   publish a review");
            println!("  book/bookings/cancel       bookings");
            println!("  admin-bookings             all bookings (admin)");
            println!("  sales [model]              sales charts data");
            println!("  add-car/edit-car/delete-car  inventory (admin)");
        }
    }

    Ok(())
}

// =============================================================================
// Argument Helpers
// =============================================================================

fn usage(text: &str) -> AppError {
    AppError::validation(format!("usage: rideline {text}"))
}

fn two_args(rest: &[String], usage_text: &str) -> Result<(String, String), AppError> {
    match rest {
        [a, b] => Ok((a.clone(), b.clone())),
        _ => Err(usage(usage_text)),
    }
}

fn id_arg(rest: &[String], usage_text: &str) -> Result<i64, AppError> {
    match rest {
        [raw] => parse_i64(raw, "id"),
        _ => Err(usage(usage_text)),
    }
}

fn parse_i64(raw: &str, field: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("{field} must be a number, got \"{raw}\"")))
}

fn car_draft_args(rest: &[String], usage_text: &str) -> Result<CarDraft, AppError> {
    if rest.len() < 3 {
        return Err(usage(usage_text));
    }
    let year: i32 = rest[2]
        .parse()
        .map_err(|_| AppError::validation("year must be a number"))?;
    let features = rest.get(3).map(String::as_str).unwrap_or("");
    Ok(CarDraft::from_form(&rest[0], &rest[1], year, features))
}

use std::error::Error;
use std::io::{self, Write as _};

use chrono::Local;
use colored::*;
use dotenv::dotenv;
use futures::future::join_all;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use okada_logistics::config::AppConfig;
use okada_logistics::database::sqlite::db_connection;
use okada_logistics::domain::summary::summarize;
use okada_logistics::domain::types::{DeliveryRecord, DeliveryStatus, RouteStop};
use okada_logistics::export::csv::export_to_csv;
use okada_logistics::geocode::cache::CachedGeocoder;
use okada_logistics::geocode::nominatim::NominatimGeocoder;
use okada_logistics::geocode::Geocoder;
use okada_logistics::routing::estimator::estimate_minutes;
use okada_logistics::routing::planner::plan_route;
use okada_logistics::sentiment::{LexiconClassifier, SentimentClassifier};
use okada_logistics::store::LogStore;

/// Initialize tracing and environment
fn init_tracing_and_env() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    dotenv().ok();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env();

    let config = AppConfig::from_env();
    let store = LogStore::new(&config.log_file);
    let classifier = LexiconClassifier;

    // Geocode cache degrades to in-session-only if SQLite is unavailable.
    let pool = match db_connection().await {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!("Geocode cache database unavailable: {}", e);
            None
        }
    };
    let geocoder = CachedGeocoder::new(
        NominatimGeocoder::new(config.geocoder_base_url.as_str())?,
        pool,
    );

    loop {
        print_menu();
        let choice = prompt("Select an option: ")?;

        let outcome = match choice.as_str() {
            "1" => add_log(&store, &geocoder, &classifier, &config).await,
            "2" => view_logs(&store),
            "3" => filter_logs(&store),
            "4" => show_summary(&store),
            "5" => export_logs(&store, &config),
            "6" => optimize_route(&store, &geocoder, &config).await,
            "7" => chatbot(&store),
            "8" => {
                println!("Goodbye.");
                return Ok(());
            }
            _ => {
                println!("{}", "Invalid choice. Please try again.\n".red());
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("{}", format!("Error: {e}\n").red());
        }
    }
}

fn print_menu() {
    println!(
        "\n{}",
        "=OkadaGirlLogistic - Delivery Tracker=".bright_blue()
    );
    println!("[1] Add New Delivery Log");
    println!("[2] View All Logs");
    println!("[3] Search/Filter Logs");
    println!("[4] Show Summary Stats");
    println!("[5] Export Logs to CSV");
    println!("[6] Optimize Delivery Route");
    println!("[7] Chatbot Support");
    println!("[8] Exit\n");
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn add_log(
    store: &LogStore,
    geocoder: &dyn Geocoder,
    classifier: &dyn SentimentClassifier,
    config: &AppConfig,
) -> Result<(), Box<dyn Error>> {
    println!("\n{}", "--- Add New Delivery Log ---".cyan());

    let customer = prompt("Customer Name: ")?;
    if customer.is_empty() {
        println!("{}", "Customer name is required. Log not saved.\n".red());
        return Ok(());
    }
    let destination = prompt("Destination: ")?;
    if destination.is_empty() {
        println!("{}", "Destination is required. Log not saved.\n".red());
        return Ok(());
    }
    let status: DeliveryStatus = match prompt("Status (delivered/pending/not delivered): ")?.parse()
    {
        Ok(status) => status,
        Err(e) => {
            println!("{}", format!("{e}. Log not saved.\n").red());
            return Ok(());
        }
    };
    let feedback = prompt("Customer Feedback: ")?;
    if feedback.is_empty() {
        println!("{}", "Feedback is required. Log not saved.\n".red());
        return Ok(());
    }
    let rating = match prompt("Rating 1-5 (press Enter to skip): ")?.as_str() {
        "" => None,
        raw => match raw.parse::<u8>() {
            Ok(r) if (1..=5).contains(&r) => Some(r),
            _ => {
                println!(
                    "{}",
                    "Rating must be a number from 1 to 5; skipped.".yellow()
                );
                None
            }
        },
    };

    let sentiment = classifier.classify(&feedback);
    let predicted_delivery_minutes =
        estimate_minutes(geocoder, config.depot, &config.time_model, &destination).await;

    let record = DeliveryRecord {
        customer,
        destination,
        status,
        feedback,
        sentiment,
        rating,
        date: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        predicted_delivery_minutes,
    };

    store.append(record)?;
    println!("{}", "Log saved successfully.\n".green());
    Ok(())
}

fn print_log(log: &DeliveryRecord) {
    println!("{}", format!("Date: {}", log.date).cyan());
    println!("{}", format!("Customer: {}", log.customer).yellow());
    println!("{}", format!("Destination: {}", log.destination).green());
    println!("{}", format!("Status: {}", log.status).magenta());
    println!(
        "{}",
        format!("Feedback: {} ({})", log.feedback, log.sentiment).blue()
    );
    if let Some(rating) = log.rating {
        println!("{}", format!("Rating: {}/5", rating).yellow());
    }
    println!(
        "{}\n",
        format!("Predicted Delivery Time: {}", log.predicted_time_label()).bright_magenta()
    );
}

fn view_logs(store: &LogStore) -> Result<(), Box<dyn Error>> {
    let logs = store.load()?;
    if logs.is_empty() {
        println!("{}", "No delivery logs found.\n".red());
        return Ok(());
    }

    println!("\n{}", "--- All Delivery Logs ---".cyan());
    for log in &logs {
        print_log(log);
    }
    Ok(())
}

fn filter_logs(store: &LogStore) -> Result<(), Box<dyn Error>> {
    if store.load()?.is_empty() {
        println!("{}", "No delivery logs found.\n".red());
        return Ok(());
    }

    let keyword = prompt("Enter customer name or date to filter: ")?;
    let matches = store.filter(&keyword)?;
    if matches.is_empty() {
        println!("{}", "No logs match your search.\n".yellow());
    } else {
        for log in &matches {
            print_log(log);
        }
    }
    Ok(())
}

fn show_summary(store: &LogStore) -> Result<(), Box<dyn Error>> {
    let logs = store.load()?;
    if logs.is_empty() {
        println!("{}", "No delivery logs to summarize.\n".red());
        return Ok(());
    }

    let summary = summarize(&logs);
    println!("\n{}", "--- Delivery Summary ---".cyan());
    println!("Total Deliveries: {}", summary.total);
    println!("Delivered: {}", summary.delivered.to_string().green());
    println!("Pending: {}", summary.pending.to_string().yellow());
    println!("Not Delivered: {}", summary.not_delivered.to_string().red());
    println!("\nSentiment Breakdown:");
    println!("Positive: {}", summary.positive);
    println!("Negative: {}", summary.negative);
    println!("Neutral: {}", summary.neutral);
    if let Some(avg) = summary.average_rating {
        println!("\nAverage Rating: {:.1}/5", avg);
    }
    println!();
    Ok(())
}

fn export_logs(store: &LogStore, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let logs = store.load()?;
    if logs.is_empty() {
        println!("{}", "No delivery logs to export.\n".red());
        return Ok(());
    }

    export_to_csv(&logs, &config.csv_export_file)?;
    println!(
        "{}",
        format!("Logs exported to {}\n", config.csv_export_file.display()).green()
    );
    Ok(())
}

async fn optimize_route(
    store: &LogStore,
    geocoder: &dyn Geocoder,
    config: &AppConfig,
) -> Result<(), Box<dyn Error>> {
    let logs = store.load()?;
    if logs.is_empty() {
        println!(
            "{}",
            "No delivery logs found for route optimization.\n".red()
        );
        return Ok(());
    }

    // Fan out the geocode calls; join_all keeps results in input order, which
    // the planner's tie-break depends on.
    let destinations: Vec<&str> = logs.iter().map(|log| log.destination.as_str()).collect();
    let resolutions = join_all(
        destinations
            .iter()
            .map(|destination| geocoder.resolve(destination)),
    )
    .await;

    let mut stops: Vec<RouteStop> = Vec::with_capacity(destinations.len());
    for (destination, resolved) in destinations.iter().zip(resolutions) {
        match resolved {
            Some(point) => stops.push(RouteStop::new(*destination, point)),
            None => {
                warn!("Could not geocode destination {:?}", destination);
                println!(
                    "{}",
                    format!("Warning: Could not geocode destination: {}", destination).yellow()
                );
            }
        }
    }

    if stops.is_empty() {
        println!("{}", "No valid destinations for optimization.\n".red());
        return Ok(());
    }

    let route = plan_route(config.depot, &stops);
    println!("\n{}", "-Optimized Delivery Route-".cyan());
    for (i, destination) in route.iter().enumerate() {
        println!("{}. {}", i + 1, destination);
    }
    println!();
    Ok(())
}

fn chatbot(store: &LogStore) -> Result<(), Box<dyn Error>> {
    println!("\n{}", "-OkadaGirl Logistic Chatbot-".cyan());
    println!("Ask me about deliveries or commands. Type 'exit' to quit.\n");

    let logs = store.load()?;
    let summary = summarize(&logs);
    loop {
        let question = prompt("You: ")?.to_lowercase();
        if question == "exit" {
            println!("Chatbot session ended.\n");
            return Ok(());
        } else if question.contains("how many deliveries") || question.contains("total deliveries")
        {
            println!("Bot: Total deliveries so far: {}", summary.total);
        } else if question.contains("pending deliveries") {
            println!("Bot: Pending deliveries: {}", summary.pending);
        } else if question.contains("delivered deliveries")
            || question.contains("completed deliveries")
        {
            println!("Bot: Delivered deliveries: {}", summary.delivered);
        } else if question.contains("summary") {
            println!(
                "Bot: Delivery Summary - Total: {}, Delivered: {}, Pending: {}",
                summary.total, summary.delivered, summary.pending
            );
            println!(
                "Sentiments - Positive: {}, Negative: {}, Neutral: {}",
                summary.positive, summary.negative, summary.neutral
            );
        } else {
            println!("Bot: Sorry, I don't understand. Try asking about deliveries or type 'exit'.");
        }
    }
}

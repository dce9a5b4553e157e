//! One-shot text rendition of the dashboard for terminals without a TTY.

use anyhow::{Context, Result};
use lotwatch_core::{
    booking_split, format_currency, lots_series, overview_split, spending_series,
    DashboardController, Role,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct LotRow {
    #[tabled(rename = "Lot")]
    name: String,
    #[tabled(rename = "Available")]
    available: u64,
    #[tabled(rename = "Occupied")]
    occupied: u64,
    #[tabled(rename = "Total")]
    total: u64,
}

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

pub async fn run(controller: &DashboardController) -> Result<()> {
    let payload = controller
        .fetch()
        .await
        .context("could not fetch parking statistics")?;

    match controller.role() {
        Role::Admin => {
            let split = overview_split(payload.overview.as_ref());
            println!("Parking Status");
            println!(
                "  Available: {}  Occupied: {}  Total: {}",
                split.available, split.occupied, split.total
            );
            if let Some(overview) = payload.overview.as_ref() {
                println!(
                    "  Lots: {}  Users: {}  Reservations: {}",
                    overview.total_lots, overview.total_users, overview.total_reservations
                );
            }
            println!();

            let lots = lots_series(payload.lots.as_deref());
            if lots.is_empty() {
                println!("No parking lots created yet.");
            } else {
                let rows: Vec<LotRow> = (0..lots.labels.len())
                    .map(|i| LotRow {
                        name: lots.labels[i].clone(),
                        available: lots.available[i],
                        occupied: lots.occupied[i],
                        total: lots.totals[i],
                    })
                    .collect();
                println!("{}", Table::new(rows).with(Style::modern()));
            }
        }
        Role::User => {
            let split = booking_split(payload.overview.as_ref());
            println!("Your Bookings");
            println!(
                "  Active: {}  Completed: {}  Total: {}",
                split.active, split.completed, split.total
            );
            if let Some(overview) = payload.overview.as_ref() {
                println!("  Total spent: {}", format_currency(overview.total_spent));
            }
            println!();

            let spending = spending_series(payload.monthly_spending.as_ref());
            if spending.is_empty() {
                println!("No spending data yet.");
            } else {
                let rows: Vec<SpendingRow> = spending
                    .labels
                    .iter()
                    .zip(&spending.values)
                    .map(|(month, &amount)| SpendingRow {
                        month: month.clone(),
                        amount: format_currency(amount),
                    })
                    .collect();
                println!("{}", Table::new(rows).with(Style::modern()));
            }
        }
    }

    Ok(())
}

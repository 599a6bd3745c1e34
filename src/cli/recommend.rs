use super::ui;
use crate::service::{Assessment, RateService};
use anyhow::{Result, bail};
use comfy_table::Cell;
use futures::future::join_all;

struct CurrencyResult {
    currency: String,
    outcome: Result<Assessment, String>,
}

impl Assessment {
    pub fn display_as_table(&self) -> String {
        let latest = self.recommendation.latest();

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Date"),
            ui::header_cell("Value"),
            ui::header_cell("vs latest"),
        ]);

        for observation in &self.history {
            let comparison = if observation == latest {
                Cell::new("latest")
            } else {
                ui::comparison_cell(observation.value(), latest.value())
            };
            table.add_row(vec![
                Cell::new(observation.date()),
                ui::value_cell(observation.value()),
                comparison,
            ]);
        }

        let verdict = if self.recommendation.buy() {
            ui::style_text("BUY", ui::StyleType::Buy)
        } else {
            ui::style_text("DON'T BUY", ui::StyleType::Hold)
        };

        format!(
            "Currency: {}\n\n{}\n\nLatest: {:.4} on {}  Recommendation: {}",
            ui::style_text(latest.currency(), ui::StyleType::Title),
            table,
            latest.value(),
            latest.date(),
            verdict
        )
    }
}

/// Assesses every currency concurrently and prints one table per currency.
pub async fn run(service: &RateService, currencies: &[String]) -> Result<()> {
    if currencies.is_empty() {
        println!("No currencies given to assess.");
        return Ok(());
    }

    let today = chrono::Utc::now().date_naive();
    let pb = ui::new_progress_bar(currencies.len() as u64);

    let futures = currencies.iter().map(|currency| {
        let pb_clone = pb.clone();
        async move {
            let outcome = service
                .assess(currency, today)
                .await
                .map_err(|e| e.to_string());
            pb_clone.inc(1);
            CurrencyResult {
                currency: currency.clone(),
                outcome,
            }
        }
    });

    let results: Vec<CurrencyResult> = join_all(futures).await;
    pb.finish_and_clear();

    let failures = results.iter().filter(|r| r.outcome.is_err()).count();
    for (i, result) in results.iter().enumerate() {
        match &result.outcome {
            Ok(assessment) => println!("{}", assessment.display_as_table()),
            Err(e) => println!(
                "Currency: {}\n{}",
                ui::style_text(&result.currency, ui::StyleType::Title),
                ui::style_text(e, ui::StyleType::Error)
            ),
        }
        if i < results.len() - 1 {
            ui::print_separator();
        }
    }

    if failures == results.len() {
        bail!("Unable to assess any of: {}", currencies.join(", "));
    }
    if failures > 0 {
        println!(
            "\n{}",
            ui::style_text(
                &format!("{failures} of {} currencies could not be assessed", results.len()),
                ui::StyleType::Subtle
            )
        );
    }
    Ok(())
}

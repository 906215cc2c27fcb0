use anyhow::{Result, anyhow};
use compute::trend::ForecastSummary;
use frontend::{ForecastInsights, Msg};
use model::ForecastResult;

use super::{client, load_dashboard};

pub async fn forecast(billboard: &str, api_url: Option<&str>) -> Result<()> {
    let api = client(api_url)?;
    let mut dashboard = load_dashboard(&api).await?;

    let id = dashboard
        .store()
        .find_by_code(billboard)
        .or_else(|| {
            billboard
                .parse::<i64>()
                .ok()
                .and_then(|id| dashboard.store().find(id))
        })
        .map(|record| record.id)
        .ok_or_else(|| anyhow!("Billboard {} not found", billboard))?;

    dashboard.dispatch(&api, Msg::Select(id)).await;

    let selection = dashboard.selection();
    if let Some(message) = selection.error_message() {
        anyhow::bail!(message);
    }
    let (Some(forecast), Some(insights)) = (selection.forecast(), dashboard.insights()) else {
        anyhow::bail!("No forecast available for {}", billboard);
    };

    print!("{}", render_forecast(forecast, &insights));
    Ok(())
}

fn preview(summary: &ForecastSummary) -> String {
    let join = |values: &[u64]| {
        values
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("[{}, ..., {}]", join(&summary.past_head), join(&summary.past_tail))
}

/// Summary cards, the past-series preview and the trend table.
pub fn render_forecast(forecast: &ForecastResult, insights: &ForecastInsights) -> String {
    let summary = &insights.summary;
    let optional = |value: Option<u64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

    let mut out = format!("Forecast for {}\n", summary.billboard_id);
    out.push_str(&format!(
        "Historical avg daily: {:.0}\n",
        summary.historical_average_daily
    ));
    out.push_str(&format!("Total predicted (7d): {:.0}\n", summary.total_predicted));
    out.push_str(&format!(
        "Predicted daily avg:  {:.0}\n",
        summary.predicted_daily_average
    ));
    out.push_str(&format!(
        "Avg confidence:       {}%\n",
        summary.average_confidence_percent
    ));
    out.push_str(&format!(
        "Peak / trough (60d):  {} / {}\n",
        optional(summary.peak),
        optional(summary.trough)
    ));
    out.push_str(&format!("past_60_days:         {}\n\n", preview(summary)));

    out.push_str(&format!(
        "{:<12} {:<10} {:>12} {:>11} {}\n",
        "DATE", "DAY", "IMPRESSIONS", "CONFIDENCE", "TREND"
    ));
    for (day, entry) in forecast.forecast_detail.iter().zip(&insights.trends) {
        out.push_str(&format!(
            "{:<12} {:<10} {:>12.0} {:>10.0}% {}\n",
            day.date.format("%Y-%m-%d").to_string(),
            day.day_of_week,
            day.predicted_impressions,
            day.confidence * 100.0,
            entry.label()
        ));
    }
    out
}

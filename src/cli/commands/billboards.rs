use anyhow::Result;
use frontend::Msg;
use model::BillboardRecord;

use super::{client, load_dashboard};

pub async fn billboards(query: &str, api_url: Option<&str>) -> Result<()> {
    let api = client(api_url)?;
    let mut dashboard = load_dashboard(&api).await?;
    dashboard.update(Msg::QueryChanged(query.to_string()));

    print!("{}", render_billboards(dashboard.visible(), dashboard.total_count()));
    Ok(())
}

/// Table of billboards followed by the "Showing X of Y" footer.
pub fn render_billboards(visible: &[BillboardRecord], total: usize) -> String {
    let mut out = format!(
        "{:<4} {:<6} {:<30} {:<8} {:<8} {:<6} {:<8} {:>10} {:>9} {:>9}\n",
        "ID", "CODE", "REGION", "TRAFFIC", "MARKER", "SIZE", "TYPE", "RATE", "LAT", "LON"
    );
    for record in visible {
        let (latitude, longitude) = record.coordinates();
        out.push_str(&format!(
            "{:<4} {:<6} {:<30} {:<8} {:<8} {:<6} {:<8} {:>10} {:>9.4} {:>9.4}\n",
            record.id,
            record.billboard_id,
            record.region,
            record.traffic_level.as_str(),
            record.traffic_level.marker_color(),
            record.size,
            record.kind,
            record.monthly_rate.to_string(),
            latitude,
            longitude
        ));
    }
    out.push_str(&format!("Showing {} of {} billboards\n", visible.len(), total));
    out
}

//! Terminal rendering for the dashboard: KPI cards, per-brand bar charts,
//! and the top-videos ranking table.
//!
//! All functions are pure (`&[...] -> String`) so the layout is unit
//! testable without a terminal or a live API.

use bvdash_core::{format_count, format_percent, BrandSummary, KpiSet, VideoRecord};

const BAR_WIDTH: usize = 40;

/// Renders the full dashboard: KPI cards, the two per-brand charts, and the
/// top-`top_n` video ranking.
#[must_use]
pub fn render_dashboard(
    kpis: &KpiSet,
    brand_summaries: &[BrandSummary],
    videos: &[VideoRecord],
    top_n: usize,
) -> String {
    let engagement_rows: Vec<(&str, f64, String)> = brand_summaries
        .iter()
        .map(|b| {
            (
                b.brand.as_str(),
                b.avg_engagement,
                format_percent(b.avg_engagement),
            )
        })
        .collect();
    let count_rows: Vec<(&str, f64, String)> = brand_summaries
        .iter()
        .map(|b| (b.brand.as_str(), b.video_count, format_count(b.video_count)))
        .collect();

    let mut out = String::new();
    out.push_str("Beauty Brand Video Dashboard\n");
    out.push_str("============================\n\n");
    out.push_str(&kpi_cards(kpis));
    out.push('\n');
    out.push_str(&bar_chart("Average engagement by brand", &engagement_rows));
    out.push('\n');
    out.push_str(&bar_chart("Video count by brand", &count_rows));
    out.push('\n');
    out.push_str(&top_videos_table(videos, top_n));
    out
}

/// The four KPI cards as aligned label/value lines.
#[must_use]
pub fn kpi_cards(kpis: &KpiSet) -> String {
    let rows = [
        ("Total subscribers", format_count(kpis.total_subscribers)),
        ("Total videos", format_count(kpis.total_videos)),
        ("Total views", format_count(kpis.total_views)),
        (
            "Overall avg engagement",
            format_percent(kpis.overall_avg_engagement),
        ),
    ];
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label:<label_width$}  {value}\n"));
    }
    out
}

/// A horizontal bar chart. Bars are scaled to the maximum value in the
/// series; a series with no positive value renders labels only.
#[must_use]
pub fn bar_chart(title: &str, rows: &[(&str, f64, String)]) -> String {
    let mut out = format!("{title}\n");
    if rows.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let label_width = rows.iter().map(|(label, _, _)| label.len()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);

    for (label, value, formatted) in rows {
        let bar = if max > 0.0 && *value > 0.0 {
            scaled_bar(*value, max)
        } else {
            String::new()
        };
        out.push_str(&format!("  {label:<label_width$}  {bar:<BAR_WIDTH$}  {formatted}\n"));
    }
    out
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scaled_bar(value: f64, max: f64) -> String {
    // at least one cell for any positive value
    let cells = ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
    "█".repeat(cells.min(BAR_WIDTH))
}

/// The top-`n` videos by view count: rank, brand, channel, title, views.
///
/// The channel column falls back from `channel_name` to `channel_id` to
/// `"-"`, matching what the feed can actually provide.
#[must_use]
pub fn top_videos_table(videos: &[VideoRecord], n: usize) -> String {
    let mut ranked: Vec<&VideoRecord> = videos.iter().collect();
    ranked.sort_by(|a, b| b.view_count.total_cmp(&a.view_count));
    ranked.truncate(n);

    let mut out = format!("Top {n} videos by views\n");
    if ranked.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let rows: Vec<(String, &str, &str, &str, String)> = ranked
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let channel = v
                .channel_name
                .as_deref()
                .or_else(|| v.channel_id.as_deref())
                .unwrap_or("-");
            (
                (i + 1).to_string(),
                v.brand.as_str(),
                channel,
                v.video_title.as_str(),
                format_count(v.view_count),
            )
        })
        .collect();

    let brand_width = column_width("Brand", rows.iter().map(|r| r.1.len()));
    let channel_width = column_width("Channel", rows.iter().map(|r| r.2.len()));
    let title_width = column_width("Title", rows.iter().map(|r| r.3.len()));
    let views_width = column_width("Views", rows.iter().map(|r| r.4.len()));

    out.push_str(&format!(
        "  #  {:<brand_width$}  {:<channel_width$}  {:<title_width$}  {:>views_width$}\n",
        "Brand", "Channel", "Title", "Views"
    ));
    for (rank, brand, channel, title, views) in rows {
        out.push_str(&format!(
            "  {rank}  {brand:<brand_width$}  {channel:<channel_width$}  {title:<title_width$}  {views:>views_width$}\n"
        ));
    }
    out
}

fn column_width(header: &str, widths: impl Iterator<Item = usize>) -> usize {
    widths.chain(std::iter::once(header.len())).max().unwrap_or(0)
}

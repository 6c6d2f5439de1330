//! Top-line KPI aggregation over the two fetched datasets.

use crate::dedupe::{dedupe_subscribers, has_subscriber_data};
use crate::types::{BrandSummary, KpiSet, VideoRecord};

/// Derives the four dashboard KPIs from the brand summaries and the raw
/// video list.
///
/// - `total_views` and `total_videos` are straight sums over the brand rows.
/// - `overall_avg_engagement` is the video-count-weighted mean of the
///   per-brand averages, so brands with more videos influence the overall
///   rate proportionally. Exactly `0.0` when there are no videos; never
///   divides by zero.
/// - `total_subscribers` deduplicates per channel, but only when the video
///   feed carries subscriber data at all (see
///   [`crate::dedupe::has_subscriber_data`]); otherwise it is reported as
///   `0.0`.
///
/// Pure: deterministic for identical inputs, and record order does not
/// affect the result beyond floating-point summation order.
#[must_use]
pub fn aggregate(brand_summaries: &[BrandSummary], videos: &[VideoRecord]) -> KpiSet {
    let total_views: f64 = brand_summaries.iter().map(|b| b.total_views).sum();
    let total_videos: f64 = brand_summaries.iter().map(|b| b.video_count).sum();
    let weighted_engagement: f64 = brand_summaries
        .iter()
        .map(|b| b.avg_engagement * b.video_count)
        .sum();
    let overall_avg_engagement = if total_videos > 0.0 {
        weighted_engagement / total_videos
    } else {
        0.0
    };

    let total_subscribers = if has_subscriber_data(videos) {
        dedupe_subscribers(videos)
    } else {
        0.0
    };

    KpiSet {
        total_subscribers,
        total_views,
        total_videos,
        overall_avg_engagement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubscriberCount;

    fn brand(name: &str, video_count: f64, total_views: f64, avg_engagement: f64) -> BrandSummary {
        BrandSummary {
            brand: name.to_owned(),
            video_count,
            total_views,
            total_likes: 0.0,
            avg_engagement,
        }
    }

    fn video(id: &str, channel_id: &str, subs: Option<SubscriberCount>) -> VideoRecord {
        VideoRecord {
            video_id: id.to_owned(),
            brand: "A".to_owned(),
            video_title: format!("video {id}"),
            channel_id: Some(channel_id.to_owned()),
            channel_name: None,
            channel_subscribers: subs,
            view_count: 0.0,
            like_count: 0.0,
            comment_count: 0.0,
            engagement_rate: 0.0,
            published_at: None,
        }
    }

    #[test]
    fn two_brand_example_matches_weighted_mean() {
        let brands = vec![brand("A", 2.0, 100.0, 0.1), brand("B", 1.0, 50.0, 0.4)];
        let kpis = aggregate(&brands, &[]);

        assert_eq!(kpis.total_views, 150.0);
        assert_eq!(kpis.total_videos, 3.0);
        // (0.1*2 + 0.4*1) / 3 = 0.2
        assert!((kpis.overall_avg_engagement - 0.2).abs() < 1e-12);
    }

    #[test]
    fn zero_videos_yields_exact_zero_engagement() {
        let brands = vec![brand("A", 0.0, 0.0, 0.5), brand("B", 0.0, 0.0, 0.9)];
        let kpis = aggregate(&brands, &[]);
        assert_eq!(kpis.overall_avg_engagement, 0.0);
        assert!(!kpis.overall_avg_engagement.is_nan());
    }

    #[test]
    fn empty_inputs_yield_all_zero_kpis() {
        let kpis = aggregate(&[], &[]);
        assert_eq!(
            kpis,
            KpiSet {
                total_subscribers: 0.0,
                total_views: 0.0,
                total_videos: 0.0,
                overall_avg_engagement: 0.0,
            }
        );
    }

    #[test]
    fn subscribers_deduplicated_when_data_present() {
        let videos = vec![
            video("v1", "ch-1", Some(SubscriberCount::Number(1000.0))),
            video("v2", "ch-1", Some(SubscriberCount::Text("1,500".into()))),
            video("v3", "ch-2", Some(SubscriberCount::Number(200.0))),
        ];
        let kpis = aggregate(&[], &videos);
        assert_eq!(kpis.total_subscribers, 1700.0);
    }

    #[test]
    fn subscribers_zero_when_feed_lacks_the_field() {
        let videos = vec![video("v1", "ch-1", None), video("v2", "ch-2", None)];
        let kpis = aggregate(&[], &videos);
        assert_eq!(kpis.total_subscribers, 0.0);
    }

    #[test]
    fn brand_order_does_not_change_totals() {
        let mut brands = vec![
            brand("A", 2.0, 100.0, 0.1),
            brand("B", 1.0, 50.0, 0.4),
            brand("C", 7.0, 980.0, 0.02),
        ];
        let first = aggregate(&brands, &[]);
        brands.reverse();
        let second = aggregate(&brands, &[]);

        assert_eq!(first.total_views, second.total_views);
        assert_eq!(first.total_videos, second.total_videos);
        assert!(
            (first.overall_avg_engagement - second.overall_avg_engagement).abs() < 1e-12
        );
    }
}

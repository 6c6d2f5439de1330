//! Rows returned by the dashboard API and the derived KPI set.
//!
//! `BrandSummary` and `VideoRecord` model the JSON arrays served by
//! `/dashboard/stats` and `/videos`. Both are deserialized leniently
//! (see [`crate::coerce`]): the feed favors graceful degradation over
//! strict validation, so malformed per-record fields become defaults
//! instead of load failures.

use serde::{Deserialize, Serialize};

use crate::coerce;

/// One aggregated row per brand, as computed server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandSummary {
    pub brand: String,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub video_count: f64,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub total_views: f64,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub total_likes: f64,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub avg_engagement: f64,
}

/// One raw video row from the `/videos` feed.
///
/// `channel_subscribers` keeps the absent-vs-present distinction: `None`
/// means the feed did not carry the field at all, which the aggregator
/// treats differently from a present-but-zero count.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub brand: String,
    pub video_title: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub channel_subscribers: Option<SubscriberCount>,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub view_count: f64,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub like_count: f64,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub comment_count: f64,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub engagement_rate: f64,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// A subscriber count as it appears on the wire: either a plain number or
/// a string with separators or unit suffixes (`"1,500"`, `"12.3만"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SubscriberCount {
    Number(f64),
    Text(String),
}

impl SubscriberCount {
    /// Coerces the wire value to a finite count, `0.0` when unparsable.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            SubscriberCount::Number(n) if n.is_finite() => *n,
            SubscriberCount::Number(_) => 0.0,
            SubscriberCount::Text(s) => coerce::parse_loose_number(s),
        }
    }
}

/// The four top-line metrics, recomputed on every successful load.
/// Owned by the current render cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSet {
    pub total_subscribers: f64,
    pub total_views: f64,
    pub total_videos: f64,
    pub overall_avg_engagement: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn brand_summary_coerces_malformed_fields() {
        let row: BrandSummary = serde_json::from_value(json!({
            "brand": "Laneige",
            "video_count": "12",
            "total_views": null,
            "avg_engagement": 0.034
        }))
        .unwrap();

        assert_eq!(row.brand, "Laneige");
        assert_eq!(row.video_count, 12.0);
        assert_eq!(row.total_views, 0.0);
        assert_eq!(row.total_likes, 0.0);
        assert_eq!(row.avg_engagement, 0.034);
    }

    #[test]
    fn video_record_minimal_payload_defaults() {
        let row: VideoRecord = serde_json::from_value(json!({
            "video_id": "abc123",
            "brand": "Innisfree",
            "video_title": "Green tea serum review"
        }))
        .unwrap();

        assert!(row.channel_id.is_none());
        assert!(row.channel_subscribers.is_none());
        assert_eq!(row.view_count, 0.0);
    }

    #[test]
    fn subscriber_count_accepts_number_and_string() {
        let row: VideoRecord = serde_json::from_value(json!({
            "video_id": "v1",
            "brand": "Etude",
            "video_title": "t",
            "channel_subscribers": "1,500"
        }))
        .unwrap();
        assert_eq!(row.channel_subscribers, Some(SubscriberCount::Text("1,500".into())));
        assert_eq!(row.channel_subscribers.unwrap().as_f64(), 1500.0);

        let row: VideoRecord = serde_json::from_value(json!({
            "video_id": "v2",
            "brand": "Etude",
            "video_title": "t",
            "channel_subscribers": 1000
        }))
        .unwrap();
        assert_eq!(row.channel_subscribers.unwrap().as_f64(), 1000.0);
    }

    #[test]
    fn subscriber_count_null_is_treated_as_absent() {
        let row: VideoRecord = serde_json::from_value(json!({
            "video_id": "v3",
            "brand": "Etude",
            "video_title": "t",
            "channel_subscribers": null
        }))
        .unwrap();
        assert!(row.channel_subscribers.is_none());
    }
}

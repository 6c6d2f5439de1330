//! Per-channel subscriber deduplication.
//!
//! Multiple videos from the same channel repeat that channel's subscriber
//! count; summing the raw rows would count a channel once per video. The
//! dedup pass keeps the maximum observed count per `channel_id` and sums
//! those maxima.

use std::collections::HashMap;

use crate::types::{SubscriberCount, VideoRecord};

/// Whether the video feed carries subscriber data at all.
///
/// Inspects the first record only: the feed either includes the
/// `channel_subscribers` column for every row or for none, so sampling one
/// row distinguishes "no subscriber data available" from "all channels
/// report zero". Callers must report `0` without running deduplication
/// when this returns `false`.
#[must_use]
pub fn has_subscriber_data(videos: &[VideoRecord]) -> bool {
    videos
        .first()
        .is_some_and(|v| v.channel_subscribers.is_some())
}

/// Sums subscriber counts with one contribution per distinct channel.
///
/// Builds a `channel_id -> max(observed count)` map and returns the sum of
/// the maxima. Records without a `channel_id` (or with an empty one) are
/// skipped. A record that has a `channel_id` but no parsable subscriber
/// count contributes `0.0` for that channel.
///
/// Idempotent, and insensitive to the order of the input records.
#[must_use]
pub fn dedupe_subscribers(videos: &[VideoRecord]) -> f64 {
    let mut per_channel: HashMap<&str, f64> = HashMap::new();
    for video in videos {
        let Some(channel_id) = video.channel_id.as_deref() else {
            continue;
        };
        if channel_id.is_empty() {
            continue;
        }
        let subs = video
            .channel_subscribers
            .as_ref()
            .map_or(0.0, SubscriberCount::as_f64);
        per_channel
            .entry(channel_id)
            .and_modify(|max| *max = max.max(subs))
            .or_insert(subs);
    }
    per_channel.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, channel_id: Option<&str>, subs: Option<SubscriberCount>) -> VideoRecord {
        VideoRecord {
            video_id: id.to_owned(),
            brand: "Laneige".to_owned(),
            video_title: format!("video {id}"),
            channel_id: channel_id.map(str::to_owned),
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
    fn same_channel_takes_max_with_string_parsing() {
        let videos = vec![
            video("v1", Some("ch-1"), Some(SubscriberCount::Number(1000.0))),
            video("v2", Some("ch-1"), Some(SubscriberCount::Text("1,500".into()))),
        ];
        assert_eq!(dedupe_subscribers(&videos), 1500.0);
    }

    #[test]
    fn distinct_channels_are_summed() {
        let videos = vec![
            video("v1", Some("ch-1"), Some(SubscriberCount::Number(100.0))),
            video("v2", Some("ch-2"), Some(SubscriberCount::Number(200.0))),
            video("v3", Some("ch-2"), Some(SubscriberCount::Number(50.0))),
        ];
        assert_eq!(dedupe_subscribers(&videos), 300.0);
    }

    #[test]
    fn missing_or_empty_channel_id_is_skipped() {
        let videos = vec![
            video("v1", None, Some(SubscriberCount::Number(999.0))),
            video("v2", Some(""), Some(SubscriberCount::Number(999.0))),
            video("v3", Some("ch-1"), Some(SubscriberCount::Number(10.0))),
        ];
        assert_eq!(dedupe_subscribers(&videos), 10.0);
    }

    #[test]
    fn unparsable_count_contributes_zero() {
        let videos = vec![video(
            "v1",
            Some("ch-1"),
            Some(SubscriberCount::Text("unknown".into())),
        )];
        assert_eq!(dedupe_subscribers(&videos), 0.0);
    }

    #[test]
    fn idempotent_and_order_insensitive() {
        let mut videos = vec![
            video("v1", Some("ch-1"), Some(SubscriberCount::Number(1000.0))),
            video("v2", Some("ch-1"), Some(SubscriberCount::Text("1,500".into()))),
            video("v3", Some("ch-2"), Some(SubscriberCount::Number(42.0))),
        ];
        let first = dedupe_subscribers(&videos);
        assert_eq!(dedupe_subscribers(&videos), first);

        videos.reverse();
        assert_eq!(dedupe_subscribers(&videos), first);
    }

    #[test]
    fn has_subscriber_data_samples_first_record() {
        let with = vec![video("v1", Some("ch-1"), Some(SubscriberCount::Number(1.0)))];
        assert!(has_subscriber_data(&with));

        let without = vec![video("v1", Some("ch-1"), None)];
        assert!(!has_subscriber_data(&without));

        assert!(!has_subscriber_data(&[]));
    }
}

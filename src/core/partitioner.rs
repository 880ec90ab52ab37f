use crate::domain::model::{Bucket, CurriculumPlan, PartitionMode, TopicSequence};
use crate::utils::error::{CurriculumError, Result};

/// Splits topics into labelled time buckets, preserving order.
///
/// `WeekWise` produces exactly `bucket_count` buckets of
/// `ceil(len / bucket_count)` topics each; trailing buckets may be short or
/// empty but are always present. `DayWise` ignores `bucket_count` and puts one
/// topic in each bucket.
pub fn partition(
    topics: TopicSequence,
    bucket_count: usize,
    mode: PartitionMode,
) -> Result<CurriculumPlan> {
    let buckets = match mode {
        PartitionMode::WeekWise => week_wise(topics, bucket_count)?,
        PartitionMode::DayWise => day_wise(topics),
    };

    Ok(CurriculumPlan { mode, buckets })
}

fn week_wise(topics: TopicSequence, bucket_count: usize) -> Result<Vec<Bucket>> {
    if bucket_count == 0 {
        return Err(CurriculumError::InvalidBucketCount { bucket_count });
    }

    let per_bucket = topics.len().div_ceil(bucket_count);
    let mut remaining = topics.into_iter();

    let buckets = (1..=bucket_count)
        .map(|week| Bucket {
            label: label(PartitionMode::WeekWise, week),
            topics: remaining.by_ref().take(per_bucket).collect(),
        })
        .collect();

    Ok(buckets)
}

fn day_wise(topics: TopicSequence) -> Vec<Bucket> {
    topics
        .into_iter()
        .enumerate()
        .map(|(i, topic)| Bucket {
            label: label(PartitionMode::DayWise, i + 1),
            topics: vec![topic],
        })
        .collect()
}

fn label(mode: PartitionMode, n: usize) -> String {
    format!("{} {}", mode.bucket_prefix(), n)
}

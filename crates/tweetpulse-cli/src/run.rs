//! Pipeline orchestration: search → score → write → summarize → upload.

use std::path::Path;

use chrono::Utc;

use tweetpulse_archive::{AwsCredentials, S3Client};
use tweetpulse_core::{PipelineConfig, ScoredPost};
use tweetpulse_report::{write_report, LabelCounts};
use tweetpulse_sentiment::score_posts;
use tweetpulse_twitter::TwitterClient;

const HTTP_TIMEOUT_SECS: u64 = 30;

/// Runs one full pipeline pass against the production endpoints.
pub(crate) async fn run(config: PipelineConfig) -> anyhow::Result<()> {
    config.validate()?;
    let twitter = TwitterClient::new(&config.bearer_token, HTTP_TIMEOUT_SECS)?;
    run_with(config, &twitter, None).await
}

/// Runs the pipeline against pre-built clients. Split from [`run`] so tests
/// can point both stages at mock servers.
///
/// Each stage consumes the previous stage's output. The upload stage is
/// skipped when no bucket is configured; when a bucket is set and `archive`
/// is `None`, an [`S3Client`] is built from env credentials. An upload
/// failure never rolls back the already-written report.
pub(crate) async fn run_with(
    config: PipelineConfig,
    twitter: &TwitterClient,
    archive: Option<&S3Client>,
) -> anyhow::Result<()> {
    config.validate()?;

    let posts = twitter.search_recent(&config.keyword, config.count).await?;
    tracing::info!(keyword = %config.keyword, fetched = posts.len(), "search complete");

    let scored = score_posts(posts, config.on_malformed)?;
    let counts = write_report(&config.out_path, &scored)?;
    println!("results written to {}", config.out_path.display());

    print_summary(&config.keyword, &scored, counts);

    if let Some(bucket) = &config.bucket {
        let key = config
            .object_key
            .clone()
            .unwrap_or_else(|| default_object_key(&config.out_path));
        let built;
        let s3 = match archive {
            Some(s3) => s3,
            None => {
                let credentials = AwsCredentials::from_env()?;
                built = S3Client::new(credentials, &config.region, HTTP_TIMEOUT_SECS)?;
                &built
            }
        };
        s3.put_object(bucket, &key, &config.out_path).await?;
        println!("report archived to s3://{bucket}/{key}");
    } else {
        tracing::info!("no bucket configured — skipping archival upload");
    }

    Ok(())
}

/// Timestamped default key, keeping uploads from successive runs distinct:
/// `sentiment/<YYYYMMDD_HHMMSS>_<filename>`.
fn default_object_key(out_path: &Path) -> String {
    let filename = out_path
        .file_name()
        .map_or_else(|| "report.csv".to_string(), |f| f.to_string_lossy().into_owned());
    format!("sentiment/{}_{filename}", Utc::now().format("%Y%m%d_%H%M%S"))
}

/// Prints the distribution report to stdout: per-label counts with
/// percentages and a proportional bar, mean polarity, and an overall
/// verdict.
fn print_summary(keyword: &str, scored: &[ScoredPost], counts: LabelCounts) {
    let total = counts.total();
    println!("sentiment summary for \"{keyword}\": {total} posts");
    if total == 0 {
        return;
    }

    for (label, count) in [
        ("positive", counts.positive),
        ("negative", counts.negative),
        ("neutral", counts.neutral),
    ] {
        #[allow(clippy::cast_precision_loss)]
        let pct = (count as f32 / total as f32) * 100.0;
        println!("  {label:<8} : {count:>3} ({pct:5.1}%) {}", bar(pct));
    }

    let mean = mean_polarity(scored);
    println!("average polarity: {mean:.3}");
    println!("overall: {}", overall_verdict(mean));
}

/// One block per five percentage points.
fn bar(pct: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let blocks = (pct / 5.0) as usize;
    "█".repeat(blocks)
}

fn mean_polarity(scored: &[ScoredPost]) -> f32 {
    if scored.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = scored.len() as f32;
    scored.iter().map(|s| s.polarity).sum::<f32>() / denom
}

/// Overall verdict uses a wider dead zone than per-post labelling so a batch
/// of near-zero scores reads as neutral.
fn overall_verdict(mean: f32) -> &'static str {
    if mean > 0.1 {
        "POSITIVE"
    } else if mean < -0.1 {
        "NEGATIVE"
    } else {
        "NEUTRAL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use tweetpulse_core::{MalformedTextPolicy, Post, SentimentLabel};
    use wiremock::matchers::{method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn scored(polarity: f32) -> ScoredPost {
        ScoredPost {
            post: Post {
                id: "1".to_string(),
                author: "a".to_string(),
                text: "t".to_string(),
                created_at: None,
            },
            polarity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }

    fn temp_out(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tweetpulse-run-{}-{name}.csv", std::process::id()))
    }

    fn test_config(out_path: PathBuf) -> PipelineConfig {
        PipelineConfig {
            keyword: "rust".to_string(),
            count: 10,
            bearer_token: "test-token".to_string(),
            out_path,
            bucket: None,
            object_key: None,
            region: "us-east-1".to_string(),
            on_malformed: MalformedTextPolicy::default(),
        }
    }

    fn search_body() -> serde_json::Value {
        serde_json::json!({
            "data": [
                { "id": "1", "text": "I love this!", "author_id": "7" },
                { "id": "2", "text": "I hate this.", "author_id": "7" }
            ],
            "includes": { "users": [ { "id": "7", "username": "someone" } ] },
            "meta": { "result_count": 2 }
        })
    }

    fn test_s3_client(endpoint: &str) -> S3Client {
        let credentials = AwsCredentials {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            session_token: None,
        };
        S3Client::with_endpoint(credentials, "us-east-1", 30, endpoint)
            .expect("client construction should not fail")
    }

    #[tokio::test]
    async fn upload_is_skipped_when_bucket_is_unset() {
        let search_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/2/tweets/search/recent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
            .mount(&search_server)
            .await;

        // Any request here would mean the archival stage ran despite the
        // missing bucket.
        let store_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&store_server)
            .await;

        let out_path = temp_out("skip");
        let config = test_config(out_path.clone());
        let twitter = TwitterClient::with_base_url("test-token", 30, &search_server.uri()).unwrap();
        let s3 = test_s3_client(&store_server.uri());

        let result = run_with(config, &twitter, Some(&s3)).await;
        assert!(result.is_ok(), "run should succeed without a bucket: {result:?}");
        assert!(out_path.exists(), "report file should still be written");

        std::fs::remove_file(&out_path).ok();
    }

    #[tokio::test]
    async fn configured_bucket_triggers_one_upload() {
        let search_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/2/tweets/search/recent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
            .mount(&search_server)
            .await;

        let store_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(url_path("/archive/reports/run.csv"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&store_server)
            .await;

        let out_path = temp_out("upload");
        let mut config = test_config(out_path.clone());
        config.bucket = Some("archive".to_string());
        config.object_key = Some("reports/run.csv".to_string());
        let twitter = TwitterClient::with_base_url("test-token", 30, &search_server.uri()).unwrap();
        let s3 = test_s3_client(&store_server.uri());

        run_with(config, &twitter, Some(&s3))
            .await
            .expect("run with bucket should succeed");

        std::fs::remove_file(&out_path).ok();
    }

    #[tokio::test]
    async fn auth_failure_leaves_no_report_file() {
        let search_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/2/tweets/search/recent"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&search_server)
            .await;

        let out_path = temp_out("auth");
        std::fs::remove_file(&out_path).ok();
        let config = test_config(out_path.clone());
        let twitter = TwitterClient::with_base_url("bad-token", 30, &search_server.uri()).unwrap();

        let err = run_with(config, &twitter, None).await.unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<tweetpulse_twitter::TwitterError>(),
                Some(tweetpulse_twitter::TwitterError::Authentication { status: 401 })
            ),
            "expected Authentication, got {err:?}"
        );
        assert!(
            !out_path.exists(),
            "no report file may be written before the search succeeds"
        );
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(overall_verdict(0.5), "POSITIVE");
        assert_eq!(overall_verdict(0.11), "POSITIVE");
        assert_eq!(overall_verdict(0.1), "NEUTRAL");
        assert_eq!(overall_verdict(0.0), "NEUTRAL");
        assert_eq!(overall_verdict(-0.1), "NEUTRAL");
        assert_eq!(overall_verdict(-0.11), "NEGATIVE");
    }

    #[test]
    fn mean_polarity_of_empty_batch_is_zero() {
        assert_eq!(mean_polarity(&[]), 0.0);
    }

    #[test]
    fn mean_polarity_averages_scores() {
        let batch = vec![scored(0.5), scored(-0.8), scored(0.0)];
        let mean = mean_polarity(&batch);
        assert!((mean - -0.1).abs() < 1e-6, "got {mean}");
    }

    #[test]
    fn bar_scales_one_block_per_five_percent() {
        assert_eq!(bar(0.0), "");
        assert_eq!(bar(4.9), "");
        assert_eq!(bar(50.0), "█".repeat(10));
        assert_eq!(bar(100.0), "█".repeat(20));
    }

    #[test]
    fn default_object_key_is_timestamped_under_sentiment_prefix() {
        let key = default_object_key(Path::new("out/tweet_sentiments.csv"));
        assert!(key.starts_with("sentiment/"));
        assert!(key.ends_with("_tweet_sentiments.csv"));
    }
}

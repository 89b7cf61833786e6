use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use tweetpulse_core::{MalformedTextPolicy, PipelineConfig};

mod run;

#[derive(Debug, Parser)]
#[command(name = "tweetpulse")]
#[command(about = "Search recent posts for a keyword, score sentiment, write a CSV report, optionally archive it")]
struct Cli {
    /// Search keyword
    #[arg(long)]
    keyword: String,

    /// Maximum number of posts to fetch (1-100)
    #[arg(long, default_value_t = 10)]
    count: u32,

    /// API bearer token
    #[arg(long, env = "TWITTER_BEARER_TOKEN", hide_env_values = true)]
    bearer_token: String,

    /// Destination path for the CSV report
    #[arg(long, default_value = "tweet_sentiments.csv")]
    out: PathBuf,

    /// Upload bucket; omit to skip the archival stage
    #[arg(long, env = "TWEETPULSE_BUCKET")]
    bucket: Option<String>,

    /// Object key for the upload (default: sentiment/<timestamp>_<filename>)
    #[arg(long)]
    object_key: Option<String>,

    /// Object-store region used for request signing
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    region: String,

    /// What to do when a post's text cannot be scored
    #[arg(long, value_enum, default_value_t = MalformedArg::Neutral)]
    on_malformed: MalformedArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MalformedArg {
    /// Keep the post with a neutral zero score
    Neutral,
    /// Drop the post from the report
    Skip,
    /// Fail the whole run
    Abort,
}

impl From<MalformedArg> for MalformedTextPolicy {
    fn from(arg: MalformedArg) -> Self {
        match arg {
            MalformedArg::Neutral => Self::NeutralDefault,
            MalformedArg::Skip => Self::Skip,
            MalformedArg::Abort => Self::Abort,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = PipelineConfig {
        keyword: cli.keyword,
        count: cli.count,
        bearer_token: cli.bearer_token,
        out_path: cli.out,
        bucket: cli.bucket,
        object_key: cli.object_key,
        region: cli.region,
        on_malformed: cli.on_malformed.into(),
    };

    run::run(config).await
}

use hubble::ReturnType;
use std::path::PathBuf;

#[derive(argh::FromArgs)]
#[argh(
    subcommand,
    name = "external-feed-since",
    description = "get an external rss feed from publication dates"
)]
pub struct Options {
    #[argh(positional, description = "the feed name")]
    feed_name: String,

    #[argh(positional, description = "the publication dates")]
    pub_dates: Vec<String>,

    #[argh(
        option,
        short = 't',
        long = "return-type",
        default = "ReturnType::Json",
        description = "how to decode responses: json, text, or content"
    )]
    return_type: ReturnType,

    #[argh(
        option,
        short = 'o',
        long = "out",
        description = "the file to save to, instead of stdout"
    )]
    out: Option<PathBuf>,
}

pub async fn exec(client: &hubble::Client, options: Options) -> anyhow::Result<()> {
    anyhow::ensure!(!options.pub_dates.is_empty(), "missing publication date");

    let pub_dates = super::selection(options.pub_dates);
    let bodies = client
        .external_feed_since(&options.feed_name, pub_dates, options.return_type)
        .await?;
    crate::output::write(bodies, options.out.as_deref()).await
}

use hubble::ReturnType;
use std::path::PathBuf;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "external-feed", description = "get external rss feeds")]
pub struct Options {
    #[argh(positional, description = "the feed names, like esa_feed or jwst_feed")]
    feed_names: Vec<String>,

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
    anyhow::ensure!(!options.feed_names.is_empty(), "missing feed name");

    let feed_names = super::selection(options.feed_names);
    let bodies = client.external_feed(feed_names, options.return_type).await?;
    crate::output::write(bodies, options.out.as_deref()).await
}

use hubble::ReturnType;
use std::path::PathBuf;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "news-release", description = "get news releases")]
pub struct Options {
    #[argh(positional, description = "the release ids, like 2016-24, or \"first\" or \"last\"")]
    ids: Vec<String>,

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
    anyhow::ensure!(!options.ids.is_empty(), "missing release id");

    let ids = super::selection(options.ids);
    let bodies = client.news_release(ids, options.return_type).await?;
    crate::output::write(bodies, options.out.as_deref()).await
}
